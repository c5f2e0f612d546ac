//! Link data records and their unique keys.

use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// Unique key the diagram assigns to a link data record.
///
/// Keys are totally ordered: every integer key sorts before every string key, integers compare
/// numerically and strings lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LinkKey {
    Int(i64),
    Str(String),
}

impl LinkKey {
    /// Reads a key from a JSON value. Integers (including whole-number floats such as `2.0`)
    /// and strings qualify.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(whole_i64))
                .map(Self::Int),
            Value::String(s) => Some(Self::Str(s.clone())),
            _ => None,
        }
    }
}

fn whole_i64(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}

impl Ord for LinkKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            (Self::Int(_), Self::Str(_)) => Ordering::Less,
            (Self::Str(_), Self::Int(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for LinkKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LinkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for LinkKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for LinkKey {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// Opaque data record attached to a link.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkData(Value);

impl Default for LinkData {
    fn default() -> Self {
        Self(Value::Object(serde_json::Map::new()))
    }
}

impl LinkData {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn as_value_mut(&mut self) -> &mut Value {
        &mut self.0
    }

    /// The `parallelIndex` ordering hint, or `0` when the field is absent or not a number.
    pub fn parallel_index(&self) -> f64 {
        self.0
            .get("parallelIndex")
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }

    /// The explicit `key` field, if the record carries a usable one.
    pub fn key(&self) -> Option<LinkKey> {
        self.0.get("key").and_then(LinkKey::from_value)
    }

    /// The raw `key` field; `null` counts as absent.
    pub fn raw_key(&self) -> Option<&Value> {
        self.0.get("key").filter(|v| !v.is_null())
    }

    pub(in crate::diagram) fn set_key(&mut self, key: &LinkKey) {
        let value = match key {
            LinkKey::Int(n) => Value::from(*n),
            LinkKey::Str(s) => Value::from(s.as_str()),
        };
        if !self.0.is_object() {
            self.0 = Value::Object(serde_json::Map::new());
        }
        if let Value::Object(map) = &mut self.0 {
            map.insert("key".to_string(), value);
        }
    }
}
