use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertiesError {
    #[error("{field} must be between {min} and {max}, found {value}")]
    RangeViolation {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}
