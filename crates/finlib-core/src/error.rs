use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinlibError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unsupported function: {0}")]
    UnsupportedFunction(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FinlibError {
    fn from(e: serde_json::Error) -> Self {
        FinlibError::SerializationError(e.to_string())
    }
}
