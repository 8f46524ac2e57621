use thiserror::Error;

/// Why a call to the Chat Service produced no usable response.
///
/// Callers treat every variant the same way (the service is unreachable); the
/// distinction only feeds the logs.
#[derive(Debug, Error)]
pub enum ChatServiceError {
    #[error("chat service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("chat service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("chat service response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}
