//! Error types for configuration extraction.
//!
//! Responsibilities:
//! - Define error variants for resolution failures (missing/empty required values).
//! - Define the conversion failure variant recorded by `Builder` extractors.
//! - Define backing-store failures (non-Unicode environment values, `.env` parse/IO errors).
//! - Aggregate a whole extraction pass into `ConfigErrors`.
//!
//! Does NOT handle:
//! - Deciding whether to abort; callers inspect the collected log.
//!
//! Invariants:
//! - Every variable-related variant carries the fully-qualified variable name.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::fmt;
use std::io::ErrorKind;
use thiserror::Error;

/// Errors produced while resolving or converting a configuration variable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required variable is not set: {name:?}")]
    MissingRequired { name: String },

    #[error("required variable is empty: {name:?}")]
    EmptyRequired { name: String },

    #[error("to {target} conversion error for {name}={value:?}: {message}")]
    Conversion {
        name: String,
        value: String,
        target: &'static str,
        message: String,
    },

    #[error("variable {name:?} is set but is not valid unicode")]
    NotUnicode { name: String },

    /// Failed to parse a `.env` file due to invalid syntax.
    ///
    /// SAFETY: Only the byte index of the failure is kept, never the offending line.
    #[error("Failed to parse .env file at position {error_index}")]
    DotenvParse { error_index: usize },

    /// Failed to read a `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file")]
    DotenvUnknown,
}

impl ConfigError {
    /// The fully-qualified variable name this error refers to, if any.
    pub fn var_name(&self) -> Option<&str> {
        match self {
            ConfigError::MissingRequired { name }
            | ConfigError::EmptyRequired { name }
            | ConfigError::Conversion { name, .. }
            | ConfigError::NotUnicode { name } => Some(name),
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => None,
        }
    }

    /// Returns true for `MissingRequired` and `EmptyRequired`.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            ConfigError::MissingRequired { .. } | ConfigError::EmptyRequired { .. }
        )
    }

    pub fn is_conversion(&self) -> bool {
        matches!(self, ConfigError::Conversion { .. })
    }
}

impl From<dotenvy::Error> for ConfigError {
    fn from(error: dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, idx) => ConfigError::DotenvParse { error_index: idx },
            dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
                kind: io_err.kind(),
            },
            _ => ConfigError::DotenvUnknown,
        }
    }
}

/// All errors collected during one extraction pass, in extraction order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigErrors(Vec<ConfigError>);

impl ConfigErrors {
    pub fn new(errors: Vec<ConfigError>) -> Self {
        Self(errors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigError> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<ConfigError> {
        self.0
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.0.len() == 1 { "error" } else { "errors" };
        write!(f, "invalid configuration ({} {})", self.0.len(), noun)?;
        for error in &self.0 {
            write!(f, "\n  {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigErrors {}

impl IntoIterator for ConfigErrors {
    type Item = ConfigError;
    type IntoIter = std::vec::IntoIter<ConfigError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConfigErrors {
    type Item = &'a ConfigError;
    type IntoIter = std::slice::Iter<'a, ConfigError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_message_names_variable() {
        let err = ConfigError::MissingRequired {
            name: "APP_HOST".to_string(),
        };
        assert_eq!(err.to_string(), "required variable is not set: \"APP_HOST\"");
        assert_eq!(err.var_name(), Some("APP_HOST"));
        assert!(err.is_missing());
    }

    #[test]
    fn test_empty_required_message_differs_from_missing() {
        let empty = ConfigError::EmptyRequired {
            name: "APP_HOST".to_string(),
        };
        let missing = ConfigError::MissingRequired {
            name: "APP_HOST".to_string(),
        };
        assert_eq!(empty.to_string(), "required variable is empty: \"APP_HOST\"");
        assert_ne!(empty.to_string(), missing.to_string());
    }

    #[test]
    fn test_conversion_message_includes_name_value_and_cause() {
        let err = ConfigError::Conversion {
            name: "APP_PORT".to_string(),
            value: "eighty".to_string(),
            target: "int",
            message: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "to int conversion error for APP_PORT=\"eighty\": invalid digit found in string"
        );
        assert!(err.is_conversion());
        assert!(!err.is_missing());
    }

    #[test]
    fn test_dotenv_errors_have_no_variable_name() {
        assert_eq!(ConfigError::DotenvParse { error_index: 3 }.var_name(), None);
        assert_eq!(ConfigError::DotenvUnknown.var_name(), None);
    }

    #[test]
    fn test_dotenv_io_error_conversion_keeps_kind_only() {
        let io = std::io::Error::new(ErrorKind::PermissionDenied, "secret=hunter2");
        let err = ConfigError::from(dotenvy::Error::Io(io));
        assert_eq!(
            err,
            ConfigError::DotenvIo {
                kind: ErrorKind::PermissionDenied
            }
        );
        assert!(!err.to_string().contains("hunter2"));
    }

    #[test]
    fn test_aggregate_display_lists_every_error() {
        let errors = ConfigErrors::new(vec![
            ConfigError::MissingRequired {
                name: "A".to_string(),
            },
            ConfigError::EmptyRequired {
                name: "B".to_string(),
            },
        ]);
        let rendered = errors.to_string();
        assert!(rendered.starts_with("invalid configuration (2 errors)"));
        assert!(rendered.contains("\n  required variable is not set: \"A\""));
        assert!(rendered.contains("\n  required variable is empty: \"B\""));
        assert_eq!(errors.len(), 2);
    }
}
