use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Appointments API returned {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl AppError {
    /// Human-readable message carried by a rejected response, if the API sent one.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            AppError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
