use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrendsError {
    #[error("Invalid input kind: {message}")]
    InvalidInputKind { message: String },

    #[error("Skills field '{field}' is present but not a list of text (found {found})")]
    MissingFieldError { field: String, found: String },

    #[error("Skills field '{field}' has a non-text token at index {index} (found {found})")]
    InvalidSkillToken {
        field: String,
        index: usize,
        found: String,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    Io,
}

impl TrendsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TrendsError::InvalidInputKind { .. }
            | TrendsError::MissingFieldError { .. }
            | TrendsError::InvalidSkillToken { .. }
            | TrendsError::CsvError(_) => ErrorCategory::Input,
            TrendsError::ConfigValidationError { .. }
            | TrendsError::InvalidConfigValueError { .. }
            | TrendsError::MissingConfigError { .. } => ErrorCategory::Config,
            TrendsError::IoError(_) | TrendsError::SerializationError(_) => ErrorCategory::Io,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TrendsError::InvalidInputKind { .. } => {
                "Provide a list of job records, each one an object of fields"
            }
            TrendsError::MissingFieldError { .. } | TrendsError::InvalidSkillToken { .. } => {
                "Make the skills field a list of strings or a comma-separated string"
            }
            TrendsError::CsvError(_) => "Check that the CSV file has a header row and consistent columns",
            TrendsError::IoError(_) => "Check that the file exists and the output directory is writable",
            TrendsError::SerializationError(_) => "Check that the JSON input is well formed",
            TrendsError::ConfigValidationError { .. }
            | TrendsError::InvalidConfigValueError { .. }
            | TrendsError::MissingConfigError { .. } => "Fix the configuration file and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, TrendsError>;
