use crate::domain::model::NumberKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumerologyError {
    #[error("Invalid birth date '{input}': expected a calendar date such as YYYY-MM-DD")]
    InvalidDateError { input: String },

    #[error("Name has no letters contributing to the {kind} number")]
    EmptyNameError { kind: NumberKind },

    #[error("No form has been submitted in this session")]
    MissingFormError,

    #[error("Validation error for {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NumerologyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDateError { .. }
            | Self::EmptyNameError { .. }
            | Self::MissingFormError
            | Self::ValidationError { .. } => ErrorCategory::Input,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::Io,
            Self::CsvError(_) | Self::SerializationError(_) | Self::ProcessingError { .. } => {
                ErrorCategory::Data
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 建議使用者如何修正
    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidDateError { .. } => {
                "Enter the birth date as YYYY-MM-DD, for example 1990-07-14".to_string()
            }
            Self::EmptyNameError { kind } => match kind {
                NumberKind::SoulUrge => {
                    "The name needs at least one vowel (a, e, i, o, u)".to_string()
                }
                NumberKind::Personality => "The name needs at least one consonant".to_string(),
                _ => "Enter a name containing letters a-z".to_string(),
            },
            Self::MissingFormError => "Submit a name and birth date first".to_string(),
            Self::ValidationError { field, .. } => format!("Please fill in {}", field),
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => {
                "Check the configuration file and command line arguments".to_string()
            }
            Self::IoError(_) => "Check that the paths exist and are writable".to_string(),
            Self::CsvError(_) => {
                "Check the input CSV header row and the configured delimiter".to_string()
            }
            Self::SerializationError(_) | Self::ProcessingError { .. } => {
                "Re-run with --verbose for details".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidDateError { input } => {
                format!("'{}' is not a valid birth date", input)
            }
            Self::EmptyNameError { kind } => {
                format!("The name cannot produce a {} number", kind)
            }
            Self::ValidationError { .. } => "Please fill in all fields".to_string(),
            other => other.to_string(),
        }
    }

    /// 依嚴重程度決定的結束代碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 1,
            ErrorSeverity::High => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, NumerologyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_input_errors() {
        let err = NumerologyError::InvalidDateError {
            input: "not-a-date".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 1);

        let err = NumerologyError::EmptyNameError {
            kind: NumberKind::Expression,
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(
            err.to_string(),
            "Name has no letters contributing to the expression number"
        );
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        let config = NumerologyError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 2);

        let io = NumerologyError::IoError(std::io::Error::other("disk"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_soul_urge_suggestion_mentions_vowels() {
        let err = NumerologyError::EmptyNameError {
            kind: NumberKind::SoulUrge,
        };
        assert!(err.recovery_suggestion().contains("vowel"));
    }
}
