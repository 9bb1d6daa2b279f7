use std::cmp::Ordering;

/// A single cell value as it moves through the pipeline.
///
/// Raw input cells are `Utf8`; the cleaner coerces them to the column's
/// declared type. `Null` marks a missing or empty cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Utf8(String),
    Float64(f64),
}

/// Hashable key form of a scalar. Floats key by bit pattern, so values
/// group and deduplicate on exact representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarKey {
    Null,
    Text(String),
    Bits(u64),
}

impl Scalar {
    /// Builds a scalar from a raw CSV field. Empty fields are nulls.
    pub fn from_raw(field: &str) -> Self {
        if field.is_empty() {
            Scalar::Null
        } else {
            Scalar::Utf8(field.to_string())
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Float64(f) => Some(*f),
            Scalar::Utf8(s) => s.trim().parse::<f64>().ok(),
            Scalar::Null => None,
        }
    }

    /// Renders the scalar as a CSV output field. Floats go through `ryu` so
    /// whole numbers keep their fractional point (`2.0`, not `2`).
    pub fn to_csv_field(&self) -> String {
        match self {
            Scalar::Null => String::new(),
            Scalar::Utf8(s) => s.clone(),
            Scalar::Float64(f) => {
                if f.is_finite() {
                    ryu::Buffer::new().format(*f).to_string()
                } else {
                    f.to_string()
                }
            }
        }
    }

    pub fn key(&self) -> ScalarKey {
        match self {
            Scalar::Null => ScalarKey::Null,
            Scalar::Utf8(s) => ScalarKey::Text(s.clone()),
            Scalar::Float64(f) => ScalarKey::Bits(f.to_bits()),
        }
    }

    /// Compares two scalars for sorting. Nulls sort first, then floats,
    /// then strings; floats fall back to `Equal` on NaN.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Scalar::Null, Scalar::Null) => Ordering::Equal,
            (Scalar::Null, _) => Ordering::Less,
            (_, Scalar::Null) => Ordering::Greater,
            (Scalar::Float64(a), Scalar::Float64(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (Scalar::Float64(_), Scalar::Utf8(_)) => Ordering::Less,
            (Scalar::Utf8(_), Scalar::Float64(_)) => Ordering::Greater,
            (Scalar::Utf8(a), Scalar::Utf8(b)) => a.cmp(b),
        }
    }
}
