use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the gesture model artifact at startup.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to load model: {0}")]
    Load(#[from] ort::Error),
    #[error("Invalid model structure: {0}")]
    InvalidStructure(String),
}

/// The ways a prediction request can fail.
///
/// Each variant's `Display` text is the exact error string returned to the
/// caller; the HTTP status mapping lives at the server boundary.
#[derive(Debug, Error)]
pub enum PredictError {
    /// The startup load failed and no model is available.
    #[error("Model not loaded")]
    ModelUnavailable,
    /// The request carried no landmark vector, or an empty one.
    #[error("No landmarks received")]
    MissingInput,
    /// The landmark vector length does not match the model input.
    #[error("Invalid input shape, expected {expected} values")]
    InvalidShape { expected: usize },
    /// Any unexpected failure during inference or decoding.
    #[error("{0}")]
    Internal(String),
}
