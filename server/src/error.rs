use thiserror::Error;

/// Per-request pipeline failures. Validation and decode problems are
/// recoverable by the user resubmitting; storage and inference problems
/// are reported for this request without taking the process down.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("transient storage failure: {0}")]
    Storage(#[from] std::io::Error),

    #[error("inference failed: {0}")]
    Inference(String),
}

/// Conditions that make the classifier unavailable. These are checked at
/// startup; the process refuses to start rather than failing on every
/// request.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to load model from {path}: {reason}")]
    Model { path: String, reason: String },

    #[error("failed to load label table from {path}: {reason}")]
    Labels { path: String, reason: String },
}
