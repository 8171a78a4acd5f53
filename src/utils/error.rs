use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlyoverError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("Status Code {status} when fetching {context}. Response: {body}")]
    HttpStatus {
        status: u16,
        context: String,
        body: String,
    },

    #[error("Success status was {success}. Server message says: {message} when fetching for IP {ip}")]
    ServiceReported {
        success: bool,
        message: String,
        ip: String,
    },

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Malformed {context} response: {reason}")]
    MalformedResponse { context: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Coarse classification of a failure, used for logging and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    HttpStatus,
    ServiceReported,
    Parse,
    Configuration,
}

impl FlyoverError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FlyoverError::Transport(_) => ErrorCategory::Transport,
            FlyoverError::HttpStatus { .. } => ErrorCategory::HttpStatus,
            FlyoverError::ServiceReported { .. } => ErrorCategory::ServiceReported,
            FlyoverError::Parse(_) | FlyoverError::MalformedResponse { .. } => {
                ErrorCategory::Parse
            }
            FlyoverError::IoError(_)
            | FlyoverError::ConfigError { .. }
            | FlyoverError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlyoverError>;
