//! Resolved configuration entries and the getter capability.
//!
//! Responsibilities:
//! - Define `Var`, the value record produced by every `Source` lookup.
//! - Define `VarGetter`, the name-to-`Var` capability consumed by `Builder`.
//!
//! Invariants:
//! - `Var::found == false` means `value` must not be trusted.
//! - A getter that injects a default reports `found == true`; `found` means
//!   "authoritative and usable", not "present in the raw store".

use crate::error::ConfigError;

/// A resolved configuration entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Var {
    /// Fully-qualified name (after any source-specific prefixing).
    pub name: String,
    /// Raw string value. Meaningless when `found` is false.
    pub value: String,
    /// Whether the value is authoritative (present in the store or defaulted).
    pub found: bool,
}

impl Var {
    /// A var that was resolved to `value`.
    pub fn found(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            found: true,
        }
    }

    /// A var that the backing store does not contain.
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            found: false,
        }
    }

    /// The value, or `None` when the var was not found.
    pub fn value(&self) -> Option<&str> {
        self.found.then_some(self.value.as_str())
    }
}

/// Resolves a bare variable name to a `Var` under some policy.
///
/// Implemented by the policy adapters in [`crate::source`] and by any closure
/// `Fn(&str) -> Result<Var, ConfigError>`.
pub trait VarGetter {
    fn get(&self, name: &str) -> Result<Var, ConfigError>;
}

impl<F> VarGetter for F
where
    F: Fn(&str) -> Result<Var, ConfigError>,
{
    fn get(&self, name: &str) -> Result<Var, ConfigError> {
        self(name)
    }
}
