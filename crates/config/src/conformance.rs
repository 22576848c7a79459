//! Conformance checks for `Source` implementations.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//! Every source should be run through [`assert_source_conforms`] with the
//! [`fixture`] pairs loaded into its backing store (qualified with the source's
//! prefix, if it has one).
//!
//! # Example
//! ```ignore
//! use confstruct::{conformance, sources::MapSource};
//!
//! let source = MapSource::from_iter(conformance::fixture());
//! conformance::assert_source_conforms(&source);
//! ```

use crate::builder::Builder;
use crate::error::ConfigError;
use crate::source::Source;
use crate::var::VarGetter;

/// Key stored with a non-empty value.
pub const PRESENT_KEY: &str = "CONFORMANCE_PRESENT";
pub const PRESENT_VALUE: &str = "present-value";
/// Key stored with an empty value.
pub const EMPTY_KEY: &str = "CONFORMANCE_EMPTY";
/// Key that must not exist in the backing store.
pub const ABSENT_KEY: &str = "CONFORMANCE_ABSENT";

const FALLBACK: &str = "fallback-value";

/// The pairs a source under test must contain.
pub fn fixture() -> [(&'static str, &'static str); 2] {
    [(PRESENT_KEY, PRESENT_VALUE), (EMPTY_KEY, "")]
}

/// Assert the `Source` contract against a source loaded with [`fixture`].
///
/// # Panics
/// On the first violated property, naming it.
pub fn assert_source_conforms<S: Source>(source: &S) {
    // required
    let present = source
        .required(PRESENT_KEY)
        .unwrap_or_else(|e| panic!("required({PRESENT_KEY}) failed: {e}"));
    assert!(present.found, "required() must report found");
    assert_eq!(present.value, PRESENT_VALUE, "required() must return the stored value");
    assert!(
        present.name.ends_with(PRESENT_KEY),
        "Var::name {:?} must be the qualified form of {PRESENT_KEY}",
        present.name
    );

    match source.required(ABSENT_KEY) {
        Err(ConfigError::MissingRequired { name }) => assert!(
            name.ends_with(ABSENT_KEY),
            "MissingRequired must name the qualified variable, got {name:?}"
        ),
        other => panic!("required() of an absent key must be MissingRequired, got {other:?}"),
    }
    match source.required(EMPTY_KEY) {
        Err(ConfigError::EmptyRequired { name }) => assert!(
            name.ends_with(EMPTY_KEY),
            "EmptyRequired must name the qualified variable, got {name:?}"
        ),
        other => panic!("required() of an empty key must be EmptyRequired, got {other:?}"),
    }

    // optional
    let absent = source
        .optional(ABSENT_KEY)
        .unwrap_or_else(|e| panic!("optional() must not fail for an absent key: {e}"));
    assert!(!absent.found, "optional() of an absent key must report not found");
    assert_eq!(absent.value, "", "optional() of an absent key must have an empty value");

    let empty = source
        .optional(EMPTY_KEY)
        .unwrap_or_else(|e| panic!("optional() must not fail for an empty key: {e}"));
    assert!(empty.found, "optional() must report an empty value as found");
    assert_eq!(empty.value, "");

    // with_default
    let getter = source.with_default(FALLBACK);
    let defaulted = getter
        .get(ABSENT_KEY)
        .unwrap_or_else(|e| panic!("with_default() must not fail for an absent key: {e}"));
    assert!(defaulted.found, "with_default() must force found = true when substituting");
    assert_eq!(defaulted.value, FALLBACK);

    let passthrough = getter
        .get(EMPTY_KEY)
        .unwrap_or_else(|e| panic!("with_default() must not fail for an empty key: {e}"));
    assert!(passthrough.found);
    assert_eq!(passthrough.value, "", "with_default() must not replace present empty values");

    let stored = getter
        .get(PRESENT_KEY)
        .unwrap_or_else(|e| panic!("with_default() must not fail for a present key: {e}"));
    assert_eq!(stored.value, PRESENT_VALUE);

    // string_option over a defaulted getter must see the default
    let mut builder = Builder::new();
    assert_eq!(
        builder.string_option(ABSENT_KEY, source.with_default(FALLBACK)),
        Some(FALLBACK.to_string()),
        "string_option() over with_default() must return the default for an absent key"
    );
    assert_eq!(builder.string_option(ABSENT_KEY, source.as_optional()), None);
    assert!(builder.errors().is_empty());
}
