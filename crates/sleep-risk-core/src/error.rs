use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputConversionError {
    #[error("missing argument: {field}")]
    Missing { field: &'static str },
    #[error("{field} is not a number: {value:?}")]
    Malformed { field: &'static str, value: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("threshold {name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}
