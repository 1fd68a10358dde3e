use thiserror::Error;

use crate::validation::FieldViolation;

#[derive(Error, Debug)]
pub enum FeeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("validation failed: {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("arithmetic error: {0}")]
    Arithmetic(String),
}

pub type Result<T> = std::result::Result<T, FeeError>;
