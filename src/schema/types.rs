//! Schema type definitions
//!
//! Supported field types:
//! - string: UTF-8 string
//! - int: 64-bit signed integer
//! - float: 64-bit floating point (integer literals accepted)
//! - bool: Boolean
//! - date: ISO-8601 calendar date carried as a string
//! - array of string: homogeneous string list

use std::fmt;

use serde_json::Value;

/// The resource kinds served by the API.
///
/// `User` is declared for storage completeness but no endpoint serves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Product,
    Article,
    ImpactEntry,
    User,
}

impl ResourceKind {
    /// All kinds, in declaration order.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Product,
        ResourceKind::Article,
        ResourceKind::ImpactEntry,
        ResourceKind::User,
    ];

    /// The kind tag, also used as the store collection name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Product => "product",
            ResourceKind::Article => "article",
            ResourceKind::ImpactEntry => "impact-entry",
            ResourceKind::User => "user",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supported field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point; integer literals are accepted
    Float,
    /// Boolean
    Bool,
    /// ISO-8601 calendar date (YYYY-MM-DD), carried as a string
    Date,
    /// Homogeneous array of strings
    StringArray,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::Date => "date",
            FieldType::StringArray => "array of string",
        }
    }
}

/// Inclusive numeric bounds attached to an int or float field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    /// Lower bound, inclusive
    pub min: Option<f64>,
    /// Upper bound, inclusive
    pub max: Option<f64>,
}

impl NumericRange {
    /// Bounded below only.
    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Bounded on both ends.
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Whether `value` lies inside the bounds, inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        if let Some(min) = self.min {
            if value < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return false;
            }
        }
        true
    }
}

/// A single field declaration: type, presence rule, default, numeric bounds.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name as it appears in documents
    pub name: &'static str,
    /// Field data type
    pub field_type: FieldType,
    /// Whether the field must be present in input
    pub required: bool,
    /// Value substituted when the field is absent
    pub default: Option<Value>,
    /// Whether an explicit JSON null is accepted and preserved
    pub nullable: bool,
    /// Inclusive bounds for numeric types
    pub range: Option<NumericRange>,
}

impl FieldSpec {
    /// A field that must be present, with no default.
    pub fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: true,
            default: None,
            nullable: false,
            range: None,
        }
    }

    /// A field that may be absent or null; absent stays absent.
    pub fn optional(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: false,
            default: None,
            nullable: true,
            range: None,
        }
    }

    /// A field replaced by `default` when absent; null is rejected.
    pub fn defaulted(name: &'static str, field_type: FieldType, default: Value) -> Self {
        Self {
            name,
            field_type,
            required: false,
            default: Some(default),
            nullable: false,
            range: None,
        }
    }

    /// Attach inclusive numeric bounds.
    pub fn with_range(mut self, range: NumericRange) -> Self {
        self.range = Some(range);
        self
    }
}

/// Complete declared shape for one resource kind.
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    /// The kind this schema governs
    pub kind: ResourceKind,
    /// Field declarations, in declaration order
    pub fields: Vec<FieldSpec>,
}

impl ResourceSchema {
    /// Create a new schema
    pub fn new(kind: ResourceKind, fields: Vec<FieldSpec>) -> Self {
        Self { kind, fields }
    }

    /// Look up a field declaration by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
