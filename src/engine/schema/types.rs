use crate::engine::types::Scalar;
use serde::Deserialize;
use std::fmt;

/// Declared type of a column. Raw input always arrives as text; the
/// cleaner coerces each cell to its column's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    String,
    Float,
}

impl ColumnType {
    /// Parses a type name as written in a settings file. Accepts the
    /// common aliases so `float`, `f64` and `double` all mean the same
    /// column type.
    pub fn from_primitive_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" | "str" | "utf8" | "text" => Some(ColumnType::String),
            "float" | "f64" | "double" | "number" => Some(ColumnType::Float),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Float => "float",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Float)
    }

    /// Attempts to coerce a raw scalar into this column type. Nulls pass
    /// through untouched. Returns `None` when the value cannot represent
    /// the type, which the cleaner reports as a coercion failure.
    ///
    /// A textual `NaN` parses as a float but carries no usable value, so
    /// it coerces to `Null` rather than a `Float64`.
    pub fn coerce(&self, value: &Scalar) -> Option<Scalar> {
        if value.is_null() {
            return Some(Scalar::Null);
        }
        match self {
            ColumnType::String => match value {
                Scalar::Utf8(s) => Some(Scalar::Utf8(s.clone())),
                other => Some(Scalar::Utf8(other.to_csv_field())),
            },
            ColumnType::Float => value.as_f64().map(|f| {
                if f.is_nan() {
                    Scalar::Null
                } else {
                    Scalar::Float64(f)
                }
            }),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ColumnType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        ColumnType::from_primitive_str(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "unknown column type `{raw}` (expected `string` or `float`)"
            ))
        })
    }
}
