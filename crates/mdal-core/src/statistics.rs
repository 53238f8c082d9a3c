//! Precomputed statistics attached to groups and datasets.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Minimum and maximum of a dataset or a whole dataset group.
///
/// Computed by an external collaborator and cached as-is. Both bounds are
/// NaN until a value is stored; unset bounds serialize as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Smallest value.
    #[serde(with = "nan_as_null")]
    pub minimum: f64,
    /// Largest value.
    #[serde(with = "nan_as_null")]
    pub maximum: f64,
}

impl Statistics {
    /// Creates statistics from known bounds.
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Self { minimum, maximum }
    }

    /// Returns true if neither bound has been computed.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.minimum.is_nan() && self.maximum.is_nan()
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            minimum: f64::NAN,
            maximum: f64::NAN,
        }
    }
}

mod nan_as_null {
    use super::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
