//! Message parameter shapes.
//!
//! The host delivers message parameters as a heterogeneous, insertion-ordered
//! bag. Readers ask for a name under an expected shape; a parameter present
//! under a different shape reads as absent, so callers can probe one name
//! for several candidate shapes in priority order.

use crate::{Entity, EntityReference, OptionValue};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The value of a single message parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "value", rename_all = "snake_case")]
pub enum ParameterValue {
    /// A full record.
    Entity(Entity),

    /// A pointer to a record.
    Reference(EntityReference),

    /// A choice from an option set.
    Option(OptionValue),

    /// A bare record id.
    Id(Uuid),

    /// Anything else the host sends for this message.
    Raw(serde_json::Value),
}

/// An insertion-ordered bag of named message parameters.
///
/// Lookup is first-match by name, so a duplicate name shadows later entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterBag {
    entries: Vec<(String, ParameterValue)>,
}

impl ParameterBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter to the bag.
    pub fn insert(&mut self, name: impl Into<String>, value: ParameterValue) {
        self.entries.push((name.into(), value));
    }

    /// Appends a parameter and returns the bag, for chained construction.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: ParameterValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Reports whether a parameter with this name is present, any shape.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Returns the first parameter with this name, whatever its shape.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Returns the parameter as a record, or `None` if absent or another shape.
    #[must_use]
    pub fn get_entity(&self, name: &str) -> Option<&Entity> {
        match self.get(name) {
            Some(ParameterValue::Entity(entity)) => Some(entity),
            _ => None,
        }
    }

    /// Returns the parameter as a record pointer, or `None` if absent or
    /// another shape.
    #[must_use]
    pub fn get_reference(&self, name: &str) -> Option<&EntityReference> {
        match self.get(name) {
            Some(ParameterValue::Reference(reference)) => Some(reference),
            _ => None,
        }
    }

    /// Returns the parameter as an option-set choice, or `None` if absent
    /// or another shape.
    #[must_use]
    pub fn get_option(&self, name: &str) -> Option<OptionValue> {
        match self.get(name) {
            Some(ParameterValue::Option(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns the parameter as a bare record id, or `None` if absent or
    /// another shape.
    #[must_use]
    pub fn get_id(&self, name: &str) -> Option<Uuid> {
        match self.get(name) {
            Some(ParameterValue::Id(id)) => Some(*id),
            _ => None,
        }
    }

    /// Iterates the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of parameters, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
