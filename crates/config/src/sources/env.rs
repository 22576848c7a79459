//! Environment variable backed source.
//!
//! Responsibilities:
//! - Resolve bare names against the process environment.
//! - Apply the constant name prefix (`prefix + name`, no separator).
//!
//! Does NOT handle:
//! - Loading `.env` files into the environment (see `DotenvSource` for reading them).
//! - Caching; every call performs a fresh lookup.
//!
//! Invariants:
//! - `Var::name` is always the prefixed name so diagnostics point at the real variable.
//! - A set but non-Unicode value is a backing-store error under every policy.

use std::env::VarError;

use crate::error::ConfigError;
use crate::source::Source;
use crate::var::Var;

/// Reads configuration from process environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    /// Create a source without a prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `prefix` to every looked-up name (e.g. `APP_` turns `PORT` into `APP_PORT`).
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn qualify(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

impl Source for EnvSource {
    fn optional(&self, name: &str) -> Result<Var, ConfigError> {
        let full_name = self.qualify(name);
        match std::env::var(&full_name) {
            Ok(value) => {
                tracing::trace!(var = %full_name, "environment variable found");
                Ok(Var::found(full_name, value))
            }
            Err(VarError::NotPresent) => {
                tracing::trace!(var = %full_name, "environment variable not set");
                Ok(Var::missing(full_name))
            }
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { name: full_name }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::var::VarGetter;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_prefix_is_concatenated_without_separator() {
        temp_env::with_vars(
            [("_CONFSTRUCT_TEST_PORT", Some("8080")), ("_CONFSTRUCT_TEST__PORT", None)],
            || {
                let source = EnvSource::new().with_prefix("_CONFSTRUCT_TEST_");
                assert_eq!(source.prefix(), "_CONFSTRUCT_TEST_");
                let var = source.required("PORT").unwrap();
                assert_eq!(var, Var::found("_CONFSTRUCT_TEST_PORT", "8080"));
            },
        );
    }

    #[test]
    #[serial]
    fn test_required_errors_use_prefixed_name() {
        temp_env::with_vars(
            [
                ("_CONFSTRUCT_TEST_HOST", None::<&str>),
                ("_CONFSTRUCT_TEST_USER", Some("")),
            ],
            || {
                let source = EnvSource::new().with_prefix("_CONFSTRUCT_TEST_");
                assert_eq!(
                    source.required("HOST").unwrap_err().to_string(),
                    "required variable is not set: \"_CONFSTRUCT_TEST_HOST\""
                );
                assert_eq!(
                    source.required("USER").unwrap_err().to_string(),
                    "required variable is empty: \"_CONFSTRUCT_TEST_USER\""
                );
            },
        );
    }

    #[test]
    #[serial]
    fn test_optional_keeps_empty_value() {
        temp_env::with_vars([("_CONFSTRUCT_TEST_DEBUG", Some(""))], || {
            let var = EnvSource::new().optional("_CONFSTRUCT_TEST_DEBUG").unwrap();
            assert!(var.found);
            assert_eq!(var.value, "");
        });
    }

    #[test]
    #[serial]
    fn test_each_lookup_reads_current_environment() {
        let source = EnvSource::new();
        let getter = source.with_default("fallback");
        temp_env::with_vars([("_CONFSTRUCT_TEST_LIVE", None::<&str>)], || {
            assert_eq!(getter.get("_CONFSTRUCT_TEST_LIVE").unwrap().value, "fallback");
        });
        temp_env::with_vars([("_CONFSTRUCT_TEST_LIVE", Some("set"))], || {
            assert_eq!(getter.get("_CONFSTRUCT_TEST_LIVE").unwrap().value, "set");
        });
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_non_unicode_value_is_reported() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(&[0x66, 0x6f, 0x80]);
        temp_env::with_vars([("_CONFSTRUCT_TEST_RAW", Some(raw))], || {
            let source = EnvSource::new();
            assert_eq!(
                source.optional("_CONFSTRUCT_TEST_RAW"),
                Err(ConfigError::NotUnicode {
                    name: "_CONFSTRUCT_TEST_RAW".to_string()
                })
            );
            assert!(source.with_default("x").get("_CONFSTRUCT_TEST_RAW").is_err());
        });
    }

    #[test]
    #[serial]
    fn test_env_source_conforms() {
        let fixture = crate::conformance::fixture();
        let vars = fixture.map(|(key, value)| (format!("_CONFSTRUCT_CONF_{key}"), Some(value)));
        temp_env::with_vars(vars, || {
            crate::conformance::assert_source_conforms(
                &EnvSource::new().with_prefix("_CONFSTRUCT_CONF_"),
            );
        });
    }
}
