use thiserror::Error;

#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("expected {expected} but found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("number {value} is out of range for {target}")]
    IntegerOutOfRange { value: String, target: &'static str },
    #[error("invalid date-time '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("'{value}' is not a valid {type_name} value")]
    UnknownEnumValue {
        type_name: &'static str,
        value: String,
    },
    #[error("cannot write non-finite number {0}")]
    NonFiniteNumber(f64),
    #[error("property '{0}' has already been written")]
    DuplicateProperty(String),
    #[error("could not parse JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
}
