use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrintError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    DataLoad,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PrintError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PrintError::IoError(_) | PrintError::SerializationError(_) => ErrorCategory::DataLoad,
            PrintError::ConfigError { .. }
            | PrintError::MissingConfigError { .. }
            | PrintError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PrintError::IoError(_) | PrintError::SerializationError(_) => ErrorSeverity::High,
            PrintError::ConfigError { .. }
            | PrintError::MissingConfigError { .. }
            | PrintError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PrintError::IoError(_) => {
                "Check that the address book file exists and is readable".to_string()
            }
            PrintError::SerializationError(_) => {
                "Check that the address book file contains valid JSON".to_string()
            }
            PrintError::ConfigError { .. } => {
                "Review the configuration file for syntax mistakes".to_string()
            }
            PrintError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            PrintError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::DataLoad => format!("Could not load the address book: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PrintError>;
