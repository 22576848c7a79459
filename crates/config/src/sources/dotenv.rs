//! `.env` file backed source.
//!
//! Responsibilities:
//! - Parse a `.env` file once with `dotenvy` and serve its pairs as a `Source`.
//!
//! Does NOT handle:
//! - Mutating the process environment (use `dotenvy::dotenv()` for that).
//! - Watching the file for changes.
//!
//! Invariants:
//! - When a key appears more than once, the first occurrence wins, matching
//!   what `dotenvy::from_path` leaves in the environment.
//! - Errors never include raw .env line contents to prevent secret leakage.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::source::Source;
use crate::sources::MapSource;
use crate::var::Var;

/// Reads configuration from a parsed `.env` file.
#[derive(Debug, Clone)]
pub struct DotenvSource {
    path: PathBuf,
    values: MapSource,
}

impl DotenvSource {
    /// Parse the `.env` file at `path`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::DotenvIo` if the file cannot be opened or read.
    /// - `ConfigError::DotenvParse` if a line has invalid syntax.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut values = HashMap::new();
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            values.entry(key).or_insert(value);
        }
        tracing::debug!(path = %path.display(), count = values.len(), "loaded .env file");

        Ok(Self {
            path: path.to_path_buf(),
            values: MapSource::new(values),
        })
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.values = self.values.with_prefix(prefix);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of distinct keys in the file.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Source for DotenvSource {
    fn optional(&self, name: &str) -> Result<Var, ConfigError> {
        self.values.optional(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conformance;
    use std::fs;
    use tempfile::TempDir;

    fn write_env(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(".env");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_reads_pairs_without_touching_environment() {
        let dir = TempDir::new().unwrap();
        let path = write_env(
            &dir,
            "# comment\n_CONFSTRUCT_DOTENV_HOST=api.example.com\n_CONFSTRUCT_DOTENV_TAGS=\"a, b,c\"\n",
        );

        let source = DotenvSource::from_path(&path).unwrap();
        assert_eq!(source.path(), path.as_path());
        assert_eq!(source.len(), 2);
        assert_eq!(
            source.required("_CONFSTRUCT_DOTENV_HOST").unwrap().value,
            "api.example.com"
        );
        assert_eq!(source.optional("_CONFSTRUCT_DOTENV_TAGS").unwrap().value, "a, b,c");
        assert!(std::env::var("_CONFSTRUCT_DOTENV_HOST").is_err());
    }

    #[test]
    fn test_first_occurrence_wins() {
        let dir = TempDir::new().unwrap();
        let path = write_env(&dir, "KEY=first\nKEY=second\n");
        let source = DotenvSource::from_path(path).unwrap();
        assert_eq!(source.required("KEY").unwrap().value, "first");
    }

    #[test]
    fn test_prefix_applies_to_file_keys() {
        let dir = TempDir::new().unwrap();
        let path = write_env(&dir, "APP_PORT=9000\n");
        let source = DotenvSource::from_path(path).unwrap().with_prefix("APP_");
        assert_eq!(source.optional("PORT").unwrap(), Var::found("APP_PORT", "9000"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = DotenvSource::from_path(dir.path().join("absent.env")).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DotenvIo {
                kind: std::io::ErrorKind::NotFound
            }
        );
    }

    #[test]
    fn test_parse_error_does_not_leak_contents() {
        let dir = TempDir::new().unwrap();
        let path = write_env(&dir, "GOOD=1\n!SECRET=hunter2\n");
        let err = DotenvSource::from_path(path).unwrap_err();
        assert!(matches!(err, ConfigError::DotenvParse { .. }));
        assert!(!err.to_string().contains("hunter2"));
    }

    #[test]
    fn test_dotenv_source_conforms() {
        let dir = TempDir::new().unwrap();
        let content: String = conformance::fixture()
            .iter()
            .map(|(key, value)| format!("{key}=\"{value}\"\n"))
            .collect();
        let path = write_env(&dir, &content);
        conformance::assert_source_conforms(&DotenvSource::from_path(path).unwrap());
    }
}
