//! Backing-store abstraction and its retrieval policies.
//!
//! Responsibilities:
//! - Define the `Source` trait: required, optional and defaulted lookups.
//! - Provide policy adapters (`Required`, `Optional`, `WithDefault`) that turn a
//!   source into a `VarGetter` for `Builder`.
//!
//! Does NOT handle:
//! - Type conversion (see `builder.rs`).
//! - Concrete storage (see `sources/`).
//!
//! Invariants:
//! - `optional` never reports absence as an error.
//! - `required` fails with `MissingRequired` when absent and `EmptyRequired` when `""`.
//! - `WithDefault` always yields `found == true`. `Builder::string_option` relies on it.

use crate::error::ConfigError;
use crate::var::{Var, VarGetter};

/// A key/value backing store queried by bare variable name.
///
/// Implementations only have to provide [`Source::optional`]; the other
/// policies are derived from it. Implementations overriding `required` or
/// `with_default` must keep the documented semantics (the `conformance`
/// module checks them).
pub trait Source {
    /// Look up `name`. Absence is reported as `found == false`, never as an error.
    ///
    /// Present values are returned as-is with `found == true`, including `""`.
    fn optional(&self, name: &str) -> Result<Var, ConfigError>;

    /// Look up `name`, failing if it is absent or empty.
    fn required(&self, name: &str) -> Result<Var, ConfigError> {
        let var = self.optional(name)?;
        if !var.found {
            Err(ConfigError::MissingRequired { name: var.name })
        } else if var.value.is_empty() {
            Err(ConfigError::EmptyRequired { name: var.name })
        } else {
            Ok(var)
        }
    }

    /// A getter that behaves like `optional` but substitutes `fallback` when absent.
    fn with_default(&self, fallback: impl Into<String>) -> WithDefault<'_, Self>
    where
        Self: Sized,
    {
        WithDefault {
            source: self,
            fallback: fallback.into(),
        }
    }

    /// The `required` policy as a getter.
    fn as_required(&self) -> Required<'_, Self>
    where
        Self: Sized,
    {
        Required(self)
    }

    /// The `optional` policy as a getter.
    fn as_optional(&self) -> Optional<'_, Self>
    where
        Self: Sized,
    {
        Optional(self)
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn optional(&self, name: &str) -> Result<Var, ConfigError> {
        (**self).optional(name)
    }

    fn required(&self, name: &str) -> Result<Var, ConfigError> {
        (**self).required(name)
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn optional(&self, name: &str) -> Result<Var, ConfigError> {
        (**self).optional(name)
    }

    fn required(&self, name: &str) -> Result<Var, ConfigError> {
        (**self).required(name)
    }
}

/// Getter for [`Source::required`].
#[derive(Debug)]
pub struct Required<'a, S: ?Sized>(&'a S);

impl<S: ?Sized> Clone for Required<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Required<'_, S> {}

impl<S: Source + ?Sized> VarGetter for Required<'_, S> {
    fn get(&self, name: &str) -> Result<Var, ConfigError> {
        self.0.required(name)
    }
}

/// Getter for [`Source::optional`].
#[derive(Debug)]
pub struct Optional<'a, S: ?Sized>(&'a S);

impl<S: ?Sized> Clone for Optional<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Optional<'_, S> {}

impl<S: Source + ?Sized> VarGetter for Optional<'_, S> {
    fn get(&self, name: &str) -> Result<Var, ConfigError> {
        self.0.optional(name)
    }
}

/// Getter returned by [`Source::with_default`].
#[derive(Debug, Clone)]
pub struct WithDefault<'a, S: ?Sized> {
    source: &'a S,
    fallback: String,
}

impl<S: ?Sized> WithDefault<'_, S> {
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl<S: Source + ?Sized> VarGetter for WithDefault<'_, S> {
    fn get(&self, name: &str) -> Result<Var, ConfigError> {
        let mut var = self.source.optional(name)?;
        if !var.found {
            var.found = true;
            var.value.clone_from(&self.fallback);
        }
        Ok(var)
    }
}
