//! Attribute values and feature identifiers
//!
//! An [`AttributeValue`] is one cell of a feature's attribute row: either a
//! number or a piece of text. Values of the same kind are totally ordered
//! (numbers through [`OrderedFloat`]), which lets a classification axis sort
//! and deduplicate them. A classification never compares values of
//! different kinds; the derived ordering across kinds (numbers first) exists
//! only so values can live in ordered collections.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Number => write!(f, "number"),
            ValueKind::Text => write!(f, "text"),
        }
    }
}

/// A scalar attribute value read from one feature's attribute field
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Numeric value (integers are widened to f64)
    Number(OrderedFloat<f64>),
    /// Textual value
    Text(String),
}

impl AttributeValue {
    /// Create a numeric value
    pub fn number(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }

    /// Create a textual value
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// The kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// The numeric value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(n.0),
            Self::Text(_) => None,
        }
    }

    /// The text, if this is a textual value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }

    /// Whether this value is numeric
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n.0),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        Self::number(value as f64)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::number(value as f64)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::number(value as f64)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Stable identifier of a feature, as handed out by the feature source
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    Index(i64),
    Name(String),
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for FeatureId {
    fn from(value: i64) -> Self {
        Self::Index(value)
    }
}

impl From<i32> for FeatureId {
    fn from(value: i32) -> Self {
        Self::Index(value as i64)
    }
}

impl From<usize> for FeatureId {
    fn from(value: usize) -> Self {
        Self::Index(value as i64)
    }
}

impl From<&str> for FeatureId {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for FeatureId {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}
