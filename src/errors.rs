// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Provider rejected credentials (status {status}): {body}")]
    Authentication { status: u16, body: String },

    #[error("Provider rate limit exceeded: {body}")]
    RateLimited { body: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected response structure: {0}")]
    MalformedResponse(String),

    #[error("Generated output is not a valid test case list: {0}")]
    InvalidOutput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GenError {
    /// Short machine-readable tag used in error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            GenError::Authentication { .. } => "authentication",
            GenError::RateLimited { .. } => "rate_limited",
            GenError::Transport(_) => "transport",
            GenError::Api { .. } => "provider",
            GenError::MalformedResponse(_) => "malformed_response",
            GenError::InvalidOutput(_) => "invalid_output",
            GenError::Config(_) => "config",
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, GenError::Transport(e) if e.is_timeout())
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
