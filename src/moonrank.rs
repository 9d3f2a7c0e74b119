use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Maps identifier tokens to moonrank values.
///
/// Stored as a plain JSON object on disk:
/// ```json
/// {
///   "1": "1734",
///   "2": "402"
/// }
/// ```
/// Numeric values are accepted and kept in their textual form.
#[derive(Debug, Default)]
pub struct MoonrankMap {
    entries: HashMap<String, String>,
}

impl MoonrankMap {
    /// Loads the mapping from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read moonrank file '{}'", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("malformed moonrank file '{}'", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let raw: HashMap<String, Value> = serde_json::from_str(content)?;
        let entries = raw
            .into_iter()
            .filter_map(|(id, value)| match value {
                Value::String(s) => Some((id, s)),
                Value::Number(n) => Some((id, n.to_string())),
                _ => None,
            })
            .collect();
        Ok(Self { entries })
    }

    /// Returns the moonrank for `token`, if one is recorded.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for MoonrankMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
