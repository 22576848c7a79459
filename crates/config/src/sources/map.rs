//! In-memory map backed source.

use std::collections::HashMap;

use crate::error::ConfigError;
use crate::source::Source;
use crate::var::Var;

/// Reads configuration from an owned `HashMap`.
///
/// Keys are stored fully qualified; the prefix is applied on lookup,
/// the same way `EnvSource` does it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSource {
    prefix: String,
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self {
            prefix: String::new(),
            values,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Insert or replace a fully-qualified key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MapSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl Source for MapSource {
    fn optional(&self, name: &str) -> Result<Var, ConfigError> {
        let full_name = format!("{}{}", self.prefix, name);
        Ok(match self.values.get(&full_name) {
            Some(value) => Var::found(full_name, value.clone()),
            None => Var::missing(full_name),
        })
    }
}
