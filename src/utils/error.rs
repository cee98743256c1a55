use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Failed to fetch '{path}': {message}")]
    TransportError { path: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RenderError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RenderError::TransportError { .. } | RenderError::HttpError(_) => ErrorSeverity::Medium,
            RenderError::UrlError(_)
            | RenderError::ConfigError { .. }
            | RenderError::InvalidConfigValueError { .. }
            | RenderError::MissingConfigError { .. } => ErrorSeverity::High,
            RenderError::IoError(_) | RenderError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RenderError::TransportError { .. } | RenderError::HttpError(_) => {
                "Check that the content store is reachable and retry"
            }
            RenderError::UrlError(_) => "Check the base URL and the hero image path",
            RenderError::ConfigError { .. }
            | RenderError::InvalidConfigValueError { .. }
            | RenderError::MissingConfigError { .. } => {
                "Fix the configuration file or command line flags"
            }
            RenderError::IoError(_) => "Check file permissions and that the paths exist",
            RenderError::SerializationError(_) => "Report this as a bug",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RenderError::TransportError { path, .. } => {
                format!("Could not fetch content file {}", path)
            }
            RenderError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            RenderError::MissingConfigError { field } => {
                format!("Missing setting {}", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
