pub mod app_config;
pub mod catalog_config;
pub mod resolver_config;

/// Configuration errors raised while reading environment variables.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_value: {key}={value}")]
    InvalidValue { key: &'static str, value: String },
}
