use serde::{Deserialize, Deserializer, Serialize};

/// A catalog entry as it comes from the catalog store.
///
/// Every field is a plain string. Missing or `null` fields deserialize to an
/// empty string, unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(deserialize_with = "string_or_null")]
    pub brand: String,
    #[serde(deserialize_with = "string_or_null")]
    pub category: String,
    #[serde(deserialize_with = "string_or_null")]
    pub barcode: String,
    #[serde(deserialize_with = "string_or_null")]
    pub volume: String,
    #[serde(deserialize_with = "string_or_null")]
    pub unit: String,
    #[serde(deserialize_with = "string_or_null")]
    pub image: String,
    #[serde(deserialize_with = "string_or_null")]
    pub price: String,
}

impl Product {
    /// Shorthand for a product that only carries a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Only products with a non-blank name take part in matching.
    pub fn is_eligible(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_missing_fields_to_empty_string() {
        let json = r#"{"name":"Ayran"}"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.name, "Ayran");
        assert_eq!(product.brand, "");
        assert_eq!(product.price, "");
    }

    #[test]
    fn should_treat_null_fields_as_empty_string() {
        let json = r#"{"name":"Ayran","brand":null,"barcode":null}"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.brand, "");
        assert_eq!(product.barcode, "");
    }

    #[test]
    fn should_ignore_unknown_fields() {
        let json = r#"{"name":"Ayran","calories":"35","stock":12}"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product, Product::named("Ayran"));
    }

    #[test]
    fn should_reject_non_string_field_values() {
        let result = serde_json::from_str::<Product>(r#"{"name":42}"#);

        assert!(result.is_err());
    }

    #[test]
    fn should_not_be_eligible_when_name_is_blank() {
        assert!(!Product::named("").is_eligible());
        assert!(!Product::named("   ").is_eligible());
        assert!(Product::named("Lipton").is_eligible());
    }
}
