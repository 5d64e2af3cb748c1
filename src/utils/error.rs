use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Dataset unavailable: {message}")]
    DatasetUnavailableError { message: String },

    #[error("Translation failed: {message}")]
    TranslationError { message: String },

    #[error("Write failed: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Config,
    System,
}

impl TranslateError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TranslateError::DatasetUnavailableError { .. } => ErrorSeverity::Critical,
            TranslateError::TranslationError { .. } => ErrorSeverity::Medium,
            TranslateError::WriteError(_) => ErrorSeverity::High,
            TranslateError::CsvError(_) => ErrorSeverity::High,
            TranslateError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            TranslateError::DatasetUnavailableError { .. } => ErrorCategory::Network,
            TranslateError::TranslationError { .. } => ErrorCategory::Network,
            TranslateError::WriteError(_) => ErrorCategory::System,
            TranslateError::CsvError(_) => ErrorCategory::Data,
            TranslateError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TranslateError::DatasetUnavailableError { .. } => {
                "Check the dataset name/config/split and your network connection".to_string()
            }
            TranslateError::TranslationError { .. } => {
                "The translation service may be rate limiting; try again later".to_string()
            }
            TranslateError::WriteError(_) => {
                "Check that the output directory is writable and has free space".to_string()
            }
            TranslateError::CsvError(_) => {
                "The output rows may contain data the CSV writer cannot serialize".to_string()
            }
            TranslateError::InvalidConfigValueError { .. } => {
                "Fix the command-line arguments and retry".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TranslateError::DatasetUnavailableError { message } => {
                format!("Could not load the dataset: {}", message)
            }
            TranslateError::TranslationError { message } => {
                format!("Translation request failed: {}", message)
            }
            TranslateError::WriteError(e) => format!("Could not write the output file: {}", e),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;
