use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Failed to parse API Gateway event: {0}")]
    InvalidEvent(#[from] serde_json::Error),

    #[error("Failed to decode response body as UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Invalid adapter configuration: {0}")]
    Config(String),
}
