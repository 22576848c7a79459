//! Field resolution against the selected backing store.
//!
//! Responsibilities:
//! - Open the source chosen on the command line (environment or `.env` file).
//! - Resolve all fields in one `Builder` pass so every problem is reported together.

use anyhow::Context;
use confstruct::{Builder, ConfigErrors, DotenvSource, EnvSource, Source};

use crate::args::Cli;
use crate::field::{FieldSpec, Value};

/// Build the source described by `--prefix` and `--env-file`.
pub fn open_source(cli: &Cli) -> anyhow::Result<Box<dyn Source>> {
    match &cli.env_file {
        Some(path) => {
            let source = DotenvSource::from_path(path)
                .with_context(|| format!("Failed to load {}", path.display()))?
                .with_prefix(cli.prefix.as_str());
            Ok(Box::new(source))
        }
        None => Ok(Box::new(EnvSource::new().with_prefix(cli.prefix.as_str()))),
    }
}

/// Resolve `fields` in order, returning every value or every error.
pub fn resolve<S: Source>(
    source: &S,
    fields: &[FieldSpec],
) -> Result<Vec<(String, Value)>, ConfigErrors> {
    let mut b = Builder::new();
    let values: Vec<_> = fields
        .iter()
        .map(|field| (field.name.clone(), field.extract(&mut b, source)))
        .collect();
    tracing::debug!(fields = fields.len(), errors = b.errors().len(), "resolved fields");
    b.finish(values)
}
