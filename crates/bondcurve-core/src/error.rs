use thiserror::Error;

#[derive(Debug, Error)]
pub enum BondCurveError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("{0}")]
    OutOfRange(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for BondCurveError {
    fn from(e: serde_json::Error) -> Self {
        BondCurveError::SerializationError(e.to_string())
    }
}
