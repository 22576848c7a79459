//! Typed extraction with accumulated errors.
//!
//! Responsibilities:
//! - Resolve variables through a `VarGetter` and convert them to typed values.
//! - Record every resolution or conversion failure in an ordered log.
//! - Turn the log into a `Result` once all fields have been extracted.
//!
//! Does NOT handle:
//! - Looking values up (see `source.rs` and `sources/`).
//! - Deciding to abort; callers inspect `errors()` or call `finish()`.
//!
//! Invariants:
//! - Extractors never panic or return early; on failure they log and return a placeholder.
//! - Each failed extraction appends exactly one error.
//! - `bool` uses presence semantics: any non-empty value (including "false" and "0") is true.
//! - `string_option` treats `found == false` as absent, not an empty value.

use std::any::type_name;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::{ConfigError, ConfigErrors};
use crate::var::{Var, VarGetter};

/// Collects typed configuration values and every error met while doing so.
///
/// Create one per loading pass:
///
/// ```
/// use confstruct::{Builder, Source, sources::MapSource};
///
/// let source = MapSource::from_iter([("HOST", "api.example.com")]);
/// let mut b = Builder::new();
/// let host = b.string("HOST", source.as_required());
/// let port = b.int("PORT", source.with_default("8080"));
/// assert_eq!((host.as_str(), port), ("api.example.com", 8080));
/// assert!(b.finish(()).is_ok());
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    errors: Vec<ConfigError>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw value. Placeholder: `""`.
    pub fn string(&mut self, name: &str, getter: impl VarGetter) -> String {
        self.resolve(name, &getter)
            .map(|var| var.value)
            .unwrap_or_default()
    }

    /// The value split on `,` with every element trimmed.
    ///
    /// Empty elements are kept, so `""` yields `[""]`. Placeholder: `[]`.
    pub fn string_array(&mut self, name: &str, getter: impl VarGetter) -> Vec<String> {
        match self.resolve(name, &getter) {
            Some(var) => var
                .value
                .split(',')
                .map(|item| item.trim().to_string())
                .collect(),
            None => Vec::new(),
        }
    }

    /// The value parsed as a base-10 signed integer. Placeholder: `0`.
    pub fn int(&mut self, name: &str, getter: impl VarGetter) -> i64 {
        self.convert(name, &getter, "int")
    }

    /// `true` iff the value is non-empty. Placeholder: `false`.
    pub fn bool(&mut self, name: &str, getter: impl VarGetter) -> bool {
        self.resolve(name, &getter)
            .is_some_and(|var| !var.value.is_empty())
    }

    /// `None` when the var was not found, otherwise its value. Placeholder: `None`.
    pub fn string_option(&mut self, name: &str, getter: impl VarGetter) -> Option<String> {
        self.resolve(name, &getter)
            .filter(|var| var.found)
            .map(|var| var.value)
    }

    /// The value parsed with `FromStr`. Placeholder: `T::default()`.
    pub fn parse<T>(&mut self, name: &str, getter: impl VarGetter) -> T
    where
        T: FromStr + Default,
        T::Err: Display,
    {
        let target = type_name::<T>().rsplit("::").next().unwrap_or("value");
        self.convert(name, &getter, target)
    }

    /// Errors recorded so far, in extraction order.
    pub fn errors(&self) -> &[ConfigError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ConfigError> {
        self.errors
    }

    /// `Ok(value)` when nothing failed, otherwise every recorded error.
    pub fn finish<T>(self, value: T) -> Result<T, ConfigErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ConfigErrors::new(self.errors))
        }
    }

    fn resolve(&mut self, name: &str, getter: &impl VarGetter) -> Option<Var> {
        match getter.get(name) {
            Ok(var) => Some(var),
            Err(error) => {
                self.record(error);
                None
            }
        }
    }

    fn convert<T>(&mut self, name: &str, getter: &impl VarGetter, target: &'static str) -> T
    where
        T: FromStr + Default,
        T::Err: Display,
    {
        let Some(var) = self.resolve(name, getter) else {
            return T::default();
        };
        match var.value.parse() {
            Ok(value) => value,
            Err(error) => {
                self.record(ConfigError::Conversion {
                    message: error.to_string(),
                    name: var.name,
                    value: var.value,
                    target,
                });
                T::default()
            }
        }
    }

    fn record(&mut self, error: ConfigError) {
        tracing::debug!(
            var = error.var_name().unwrap_or_default(),
            error = %error,
            "configuration value rejected"
        );
        self.errors.push(error);
    }
}
