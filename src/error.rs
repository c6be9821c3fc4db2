use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClaimScribeError {
    #[error("Report generation failed: {0}")]
    GenerationFailed(String),

    #[error("Invalid media attachment: {0}")]
    InvalidAttachment(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[cfg(feature = "gemini")]
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ClaimScribeError>;
