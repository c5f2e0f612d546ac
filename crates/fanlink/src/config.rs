//! JSON configuration for parallel routing.

use crate::error::{Error, Result};
use fanlink_graph::Diagram;
use fanlink_graph::diagram::{DEFAULT_PARALLEL_SPACING, coerce_spacing};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParallelRouteConfig {
    /// Lateral distance between neighboring parallel links. Invalid input becomes `0`.
    #[serde(deserialize_with = "deserialize_spacing")]
    pub parallel_spacing: f64,
}

impl Default for ParallelRouteConfig {
    fn default() -> Self {
        Self {
            parallel_spacing: DEFAULT_PARALLEL_SPACING,
        }
    }
}

impl ParallelRouteConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidConfigJson {
            message: e.to_string(),
        })
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        Self::deserialize(value).map_err(|e| Error::InvalidConfigJson {
            message: e.to_string(),
        })
    }

    /// Applies the spacing to every link. Returns the number of links whose spacing changed.
    pub fn apply(&self, diagram: &mut Diagram) -> usize {
        let mut changed = 0;
        for id in diagram.link_ids() {
            if diagram.set_parallel_spacing(id, self.parallel_spacing) {
                changed += 1;
            }
        }
        tracing::debug!(spacing = self.parallel_spacing, changed, "applied parallel spacing");
        changed
    }
}

/// Numeric reading of an arbitrary JSON value, coerced to a valid spacing.
///
/// Numbers pass through, numeric strings are parsed (blank strings read as `0`), booleans
/// read as `1`/`0` and `null` as `0`. Anything unreadable, negative or non-finite yields `0`.
pub fn coerce_spacing_value(value: &Value) -> f64 {
    let raw = match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => f64::NAN,
    };
    coerce_spacing(raw)
}

fn deserialize_spacing<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_spacing_value(&value))
}
