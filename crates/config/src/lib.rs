//! Typed configuration extraction with accumulated errors.
//!
//! This crate resolves raw string values from a backing store (process
//! environment, `.env` files, in-memory maps) through a [`Source`] and converts
//! them with a [`Builder`] that records every failure instead of stopping at
//! the first one.
//!
//! ```
//! use confstruct::{Builder, Source, sources::MapSource};
//!
//! let source = MapSource::from_iter([("HOST", "api.example.com"), ("TAGS", "a, b,c")]);
//! let mut b = Builder::new();
//! let host = b.string("HOST", source.as_required());
//! let tags = b.string_array("TAGS", source.as_optional());
//! let port = b.int("PORT", source.with_default("8080"));
//! assert!(b.errors().is_empty());
//! assert_eq!(host, "api.example.com");
//! assert_eq!(tags, ["a", "b", "c"]);
//! assert_eq!(port, 8080);
//! ```

mod builder;
mod error;
mod source;
pub mod sources;
mod var;

#[cfg(any(test, feature = "test-utils"))]
pub mod conformance;

pub use builder::Builder;
pub use error::{ConfigError, ConfigErrors};
pub use source::{Optional, Required, Source, WithDefault};
pub use sources::{DotenvSource, EnvSource, MapSource};
pub use var::{Var, VarGetter};
