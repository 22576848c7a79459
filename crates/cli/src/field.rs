//! Field specifications given on the command line.
//!
//! Responsibilities:
//! - Parse `NAME[!][:TYPE][=DEFAULT]` into a `FieldSpec`.
//! - Map a spec's type onto the matching `Builder` extractor.
//!
//! Invariants:
//! - `!` selects the required policy, `=DEFAULT` the defaulted policy, neither the optional one.
//! - A field cannot be both required and defaulted.
//! - The default is everything after the first `=`, so it may itself contain `:` or `=`.

use std::fmt;
use std::str::FromStr;

use confstruct::{Builder, Source, VarGetter};
use serde::Serialize;
use thiserror::Error;

/// How a field is looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Policy {
    Required,
    Optional,
    Default(String),
}

/// Which extractor converts the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    String,
    Int,
    Bool,
    List,
    Optional,
}

/// An extracted value, serialized as its natural JSON type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
    Optional(Option<String>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::List(items) => f.write_str(&items.join(",")),
            Value::Optional(value) => f.write_str(value.as_deref().unwrap_or_default()),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FieldSpecError {
    #[error("field name is empty")]
    EmptyName,

    #[error("field name {0:?} contains whitespace")]
    InvalidName(String),

    #[error("unknown type {0:?} (expected string, int, bool, list or optional)")]
    UnknownKind(String),

    #[error("field {0:?} cannot be both required (!) and defaulted (=)")]
    RequiredWithDefault(String),
}

impl FromStr for Kind {
    type Err = FieldSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" | "str" => Ok(Kind::String),
            "int" => Ok(Kind::Int),
            "bool" => Ok(Kind::Bool),
            "list" => Ok(Kind::List),
            "optional" | "opt" => Ok(Kind::Optional),
            other => Err(FieldSpecError::UnknownKind(other.to_string())),
        }
    }
}

impl Kind {
    fn extract(self, b: &mut Builder, name: &str, getter: impl VarGetter) -> Value {
        match self {
            Kind::String => Value::String(b.string(name, getter)),
            Kind::Int => Value::Int(b.int(name, getter)),
            Kind::Bool => Value::Bool(b.bool(name, getter)),
            Kind::List => Value::List(b.string_array(name, getter)),
            Kind::Optional => Value::Optional(b.string_option(name, getter)),
        }
    }
}

/// One variable to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: Kind,
    pub policy: Policy,
}

impl FieldSpec {
    /// Resolve this field through `b`, recording any failure there.
    pub fn extract<S: Source>(&self, b: &mut Builder, source: &S) -> Value {
        match &self.policy {
            Policy::Required => self.kind.extract(b, &self.name, source.as_required()),
            Policy::Optional => self.kind.extract(b, &self.name, source.as_optional()),
            Policy::Default(fallback) => {
                self.kind
                    .extract(b, &self.name, source.with_default(fallback.as_str()))
            }
        }
    }
}

impl FromStr for FieldSpec {
    type Err = FieldSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, default) = match s.split_once('=') {
            Some((head, default)) => (head, Some(default)),
            None => (s, None),
        };
        let (name, kind) = match head.split_once(':') {
            Some((name, kind)) => (name, kind.parse()?),
            None => (head, Kind::default()),
        };
        let (name, required) = match name.strip_suffix('!') {
            Some(name) => (name, true),
            None => (name, false),
        };

        if name.is_empty() {
            return Err(FieldSpecError::EmptyName);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(FieldSpecError::InvalidName(name.to_string()));
        }

        let policy = match (required, default) {
            (true, Some(_)) => return Err(FieldSpecError::RequiredWithDefault(name.to_string())),
            (true, None) => Policy::Required,
            (false, Some(default)) => Policy::Default(default.to_string()),
            (false, None) => Policy::Optional,
        };

        Ok(Self {
            name: name.to_string(),
            kind,
            policy,
        })
    }
}
