use serde::{Deserialize, Serialize};

/// A single cell of an input result table.
///
/// Query results arrive as untyped JSON records, so a cell is either a
/// number, a string, or null. Anything else is rejected at
/// deserialization time by the upstream result loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Null,
    Number(f64),
    String(String),
}

impl DataValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// True when the cell holds exactly the given string.
    pub fn eq_str(&self, s: &str) -> bool {
        matches!(self, DataValue::String(v) if v == s)
    }

    /// Coerce the cell to an axis/tooltip label. Null cells take the
    /// provided placeholder; numbers render with their natural display
    /// form.
    pub fn to_label(&self, null_placeholder: &str) -> String {
        match self {
            DataValue::Null => null_placeholder.to_string(),
            DataValue::Number(v) => v.to_string(),
            DataValue::String(v) => v.clone(),
        }
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        DataValue::Number(value)
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::String(value.to_string())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::String(value)
    }
}

/// A per-index series value.
///
/// `Token` is the reserved placeholder meaning "render no bar at this
/// index". It keeps all series index-aligned with the category axis and
/// serializes as the renderer's `"-"` marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesValue {
    Token,
    Number(f64),
}

impl SeriesValue {
    pub fn is_token(&self) -> bool {
        matches!(self, SeriesValue::Token)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SeriesValue::Number(v) => Some(*v),
            SeriesValue::Token => None,
        }
    }

    /// Numeric value with the token treated as zero.
    pub fn unwrap_or_zero(&self) -> f64 {
        self.as_f64().unwrap_or(0.0)
    }
}

impl From<f64> for SeriesValue {
    fn from(value: f64) -> Self {
        SeriesValue::Number(value)
    }
}

impl Serialize for SeriesValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            SeriesValue::Token => serializer.serialize_str("-"),
            SeriesValue::Number(v) => serializer.serialize_f64(*v),
        }
    }
}
