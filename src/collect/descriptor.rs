//! Descriptor (`version.json` / `versioninfo.json`) loading.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

/// Parsed descriptor. Only `dependencies` is read; other fields are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Descriptor {
    /// Dependency path strings, in listed order. `null` and absent both mean none.
    #[serde(default)]
    dependencies: Option<Vec<String>>,
}

impl Descriptor {
    pub fn dependencies(&self) -> &[String] {
        self.dependencies.as_deref().unwrap_or_default()
    }
}

/// Parse descriptor JSON. The top level must be an object.
pub fn parse_descriptor(s: &str) -> Result<Descriptor> {
    let value: serde_json::Value = serde_json::from_str(s).context("invalid JSON")?;
    if !value.is_object() {
        bail!("expected a JSON object at the top level");
    }
    serde_json::from_value(value).context("invalid descriptor")
}

/// Read and parse the descriptor at `path`.
pub fn load_descriptor(path: &Path) -> Result<Descriptor> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read descriptor {}", path.display()))?;
    parse_descriptor(&s).with_context(|| format!("parse descriptor {}", path.display()))
}
