use thiserror::Error;

/// Rejection reasons produced by the CPU and GPU parsers.
///
/// The `Display` text is what the shell shows the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid CPU brand.")]
    InvalidBrand { input: String },

    #[error("Invalid CPU series format.")]
    InvalidSeriesFormat { input: String },

    #[error("Invalid GPU format.")]
    InvalidGpuLineShape { tokens: usize },

    #[error("Invalid GPU number.")]
    InvalidGpuNumber { input: String },
}

impl ParseError {
    /// Short machine-friendly name, used in JSON reports.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::InvalidBrand { .. } => "invalid_brand",
            ParseError::InvalidSeriesFormat { .. } => "invalid_series_format",
            ParseError::InvalidGpuLineShape { .. } => "invalid_gpu_line_shape",
            ParseError::InvalidGpuNumber { .. } => "invalid_gpu_number",
        }
    }
}

#[derive(Error, Debug)]
pub enum RigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

// Rejected user input is a `Report`, not a `RigError`.
impl RigError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RigError::ConfigValidationError { .. } | RigError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            RigError::IoError(_) | RigError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RigError::ConfigValidationError { .. } | RigError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            RigError::IoError(_) | RigError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RigError::ConfigValidationError { field, .. }
            | RigError::InvalidConfigValueError { field, .. } => {
                format!("Check the '{}' setting in your configuration file", field)
            }
            RigError::IoError(_) => {
                "Check that the terminal or file is readable and writable".to_string()
            }
            RigError::SerializationError(_) => "Try the text output format".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RigError::ConfigValidationError { message, .. } => {
                format!("Configuration problem: {}", message)
            }
            RigError::InvalidConfigValueError { field, value, reason } => {
                format!("Setting '{}' has an invalid value '{}': {}", field, value, reason)
            }
            RigError::IoError(e) => format!("Input/output failed: {}", e),
            RigError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, RigError>;
