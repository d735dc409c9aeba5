//! Validation error types
//!
//! Failure reasons:
//! - required: a required field is absent
//! - type_mismatch: a value has the wrong JSON type or is malformed
//! - out_of_range: a numeric value violates its inclusive bounds

use std::fmt;

use serde::Serialize;

use crate::schema::types::NumericRange;

/// Why a field failed validation.
///
/// Serializes with a `reason` tag plus reason-specific keys, so a
/// `type_mismatch` carries `expected`/`actual` and an `out_of_range`
/// carries the violated bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ValidationReason {
    /// Required field absent from the input
    Required,
    /// Wrong JSON type or malformed value
    TypeMismatch {
        /// Expected type or format
        expected: String,
        /// What was actually found
        actual: String,
    },
    /// Numeric value outside its inclusive bounds
    OutOfRange {
        /// Lower bound, if declared
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        /// Upper bound, if declared
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
}

impl ValidationReason {
    /// The stable reason tag, as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationReason::Required => "required",
            ValidationReason::TypeMismatch { .. } => "type_mismatch",
            ValidationReason::OutOfRange { .. } => "out_of_range",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::Required => write!(f, "required field is missing"),
            ValidationReason::TypeMismatch { expected, actual } => {
                write!(f, "expected {}, got {}", expected, actual)
            }
            ValidationReason::OutOfRange { min, max } => match (min, max) {
                (Some(min), Some(max)) => {
                    write!(f, "value must be between {} and {} inclusive", min, max)
                }
                (Some(min), None) => write!(f, "value must be at least {}", min),
                (None, Some(max)) => write!(f, "value must be at most {}", max),
                (None, None) => write!(f, "value out of range"),
            },
        }
    }
}

/// A single validation failure, addressed to one field.
///
/// Array element failures use indexed paths such as `materials[2]`.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("field '{field}': {reason}")]
pub struct ValidationError {
    /// Field path the failure applies to
    pub field: String,
    /// Why the field failed
    #[serde(flatten)]
    pub reason: ValidationReason,
}

impl ValidationError {
    /// A required field was absent.
    pub fn required(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: ValidationReason::Required,
        }
    }

    /// A value had the wrong type or format.
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            reason: ValidationReason::TypeMismatch {
                expected: expected.into(),
                actual: actual.into(),
            },
        }
    }

    /// A numeric value violated its bounds.
    pub fn out_of_range(field: impl Into<String>, range: NumericRange) -> Self {
        Self {
            field: field.into(),
            reason: ValidationReason::OutOfRange {
                min: range.min,
                max: range.max,
            },
        }
    }
}
