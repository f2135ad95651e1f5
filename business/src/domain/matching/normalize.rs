/// Normalizes text before it is compared.
///
/// - trims leading and trailing whitespace
/// - collapses internal whitespace runs to a single space
/// - lowercases with full Unicode rules
///
/// The Turkish dotted capital `İ` lowercases to `i` followed by a combining
/// dot above; the combining dot is dropped so `İ` folds to a plain `i`.
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());

    for word in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        for c in word.chars() {
            if c == 'İ' {
                normalized.push('i');
            } else {
                normalized.extend(c.to_lowercase());
            }
        }
    }

    normalized
}

/// Length in characters, the unit every distance is expressed in.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
