use crate::{AttributeValue, OptionValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// A pointer to a record: the entity's logical name plus the record id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityReference {
    /// Lowercase logical name of the entity type (e.g. "contact").
    pub logical_name: String,

    /// The record's unique identifier.
    pub id: Uuid,
}

impl EntityReference {
    /// Creates a reference to the record with the given logical name and id.
    #[must_use]
    pub fn new(logical_name: impl Into<String>, id: Uuid) -> Self {
        Self {
            logical_name: logical_name.into(),
            id,
        }
    }
}

impl fmt::Display for EntityReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.logical_name, self.id)
    }
}

/// A record: logical name, id, and a bag of typed attributes.
///
/// Attributes are read through shape-filtered accessors. Asking for an
/// attribute under the wrong shape reads as absent rather than failing,
/// matching how the platform delivers partially populated records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Lowercase logical name of the entity type.
    pub logical_name: String,

    /// The record's unique identifier.
    pub id: Uuid,

    /// Attribute values keyed by attribute logical name.
    #[serde(default)]
    pub attributes: HashMap<String, AttributeValue>,
}

impl Entity {
    /// Creates an empty record of the given entity type.
    #[must_use]
    pub fn new(logical_name: impl Into<String>, id: Uuid) -> Self {
        Self {
            logical_name: logical_name.into(),
            id,
            attributes: HashMap::new(),
        }
    }

    /// Sets an attribute, replacing any previous value under that name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Sets an attribute and returns the record, for chained construction.
    #[must_use]
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.set(name, value);
        self
    }

    /// Returns the attribute value under `name`, whatever its shape.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Returns the attribute as text, or `None` if absent or not a string.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.attributes.get(name) {
            Some(AttributeValue::String(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the attribute as a flag, or `None` if absent or not a boolean.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.attributes.get(name) {
            Some(AttributeValue::Boolean(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns the attribute as an option-set choice, or `None` if absent
    /// or not an option value.
    #[must_use]
    pub fn get_option(&self, name: &str) -> Option<OptionValue> {
        match self.attributes.get(name) {
            Some(AttributeValue::Option(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns the attribute as a record pointer, or `None` if absent or
    /// not a reference.
    #[must_use]
    pub fn get_reference(&self, name: &str) -> Option<&EntityReference> {
        match self.attributes.get(name) {
            Some(AttributeValue::Reference(reference)) => Some(reference),
            _ => None,
        }
    }

    /// Builds a reference to this record, carrying the same logical name
    /// and id.
    #[must_use]
    pub fn to_reference(&self) -> EntityReference {
        EntityReference::new(self.logical_name.clone(), self.id)
    }
}
