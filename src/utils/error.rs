use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Dataset error: {message}")]
    DatasetError { message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    Io,
    Network,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DashError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashError::ConfigError { .. }
            | DashError::ConfigValidationError { .. }
            | DashError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DashError::CsvError(_) | DashError::DatasetError { .. } => ErrorCategory::Data,
            DashError::IoError(_) => ErrorCategory::Io,
            DashError::ServerError { .. } => ErrorCategory::Network,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
            // 埠號被占用等情況，稍後重試通常可以解決
            ErrorCategory::Network => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DashError::CsvError(_) | DashError::DatasetError { .. } => {
                "Check that the dataset has the columns 'Launch Site', 'Payload Mass (kg)', 'Booster Version Category' and 'class'"
            }
            DashError::IoError(_) => "Check that the dataset file exists and is readable",
            DashError::ConfigError { .. } | DashError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax"
            }
            DashError::InvalidConfigValueError { .. } => {
                "Fix the highlighted configuration value and restart"
            }
            DashError::ServerError { .. } => {
                "Make sure the bind address is free or choose another one with --bind"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DashError::IoError(e) => format!("Could not read the dataset: {}", e),
            DashError::CsvError(e) => format!("The dataset could not be parsed: {}", e),
            DashError::DatasetError { message } => format!("The dataset is unusable: {}", message),
            DashError::ServerError { message } => format!("The dashboard server failed: {}", message),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashError>;
