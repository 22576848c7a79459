//! Rendering of resolved fields.

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::args::OutputFormat;
use crate::field::Value;

/// Render resolved fields in the requested format.
///
/// Text output prints one `NAME=value` line per field and skips optional
/// fields that resolved to nothing. JSON output keeps them as `null`.
pub fn render(values: &[(String, Value)], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(values
            .iter()
            .filter(|(_, value)| *value != Value::Optional(None))
            .map(|(name, value)| format!("{name}={value}\n"))
            .collect()),
        OutputFormat::Json => {
            let mut object = Map::new();
            for (name, value) in values {
                object.insert(name.clone(), serde_json::to_value(value)?);
            }
            let mut rendered = serde_json::to_string_pretty(&JsonValue::Object(object))?;
            rendered.push('\n');
            Ok(rendered)
        }
    }
}
