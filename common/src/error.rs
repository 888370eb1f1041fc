use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("invalid integer '{input}': {reason}")]
    InvalidInteger { input: String, reason: String },

    #[error("nothing to check, at least one input is required")]
    EmptyBatch,
}
