//! Attribute value shapes.
//!
//! Platform attributes carry one of a closed set of shapes. Plugins read
//! them with shape-filtered accessors on [`Entity`](crate::Entity); a value
//! whose shape is not the one asked for reads as absent, never as an error.

use crate::{Entity, EntityReference};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A selected choice from an option set, carried by its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionValue(i32);

impl OptionValue {
    /// Creates an option value from its numeric wire value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the numeric wire value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The value of a single record attribute.
///
/// Closed over the shapes the platform emits. [`Raw`](AttributeValue::Raw)
/// carries anything the host sends that has no first-class shape here, so
/// deserialization never loses data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    /// An explicitly null attribute.
    Null,

    /// A two-state flag.
    Boolean(bool),

    /// A whole number.
    Integer(i64),

    /// A decimal number.
    Decimal(f64),

    /// A currency amount.
    Money(f64),

    /// Free text.
    String(String),

    /// A choice from an option set.
    Option(OptionValue),

    /// A pointer to another record.
    Reference(EntityReference),

    /// A point in time, always UTC.
    DateTime(DateTime<Utc>),

    /// A list of child records (e.g. activity parties).
    Collection(Vec<Entity>),

    /// Anything the host sends that has no first-class shape above.
    Raw(serde_json::Value),
}

impl fmt::Display for AttributeValue {
    /// Renders the value the way trace logs expect: option sets and money
    /// by their inner value, references as `logical_name / id`, null as
    /// `(null)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "(null)"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Decimal(value) | Self::Money(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value}"),
            Self::Option(value) => write!(f, "{value}"),
            Self::Reference(reference) => write!(f, "{reference}"),
            Self::DateTime(value) => write!(f, "{}", value.to_rfc3339()),
            Self::Collection(entities) => write!(f, "({} records)", entities.len()),
            Self::Raw(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<OptionValue> for AttributeValue {
    fn from(value: OptionValue) -> Self {
        Self::Option(value)
    }
}

impl From<EntityReference> for AttributeValue {
    fn from(value: EntityReference) -> Self {
        Self::Reference(value)
    }
}
