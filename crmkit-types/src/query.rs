use crate::AttributeValue;
use serde::{Deserialize, Serialize};

/// Which attributes a query should bring back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "columns", content = "names", rename_all = "snake_case")]
pub enum ColumnSet {
    /// Every attribute of the matched records.
    All,

    /// Only the named attributes.
    Columns(Vec<String>),
}

impl ColumnSet {
    /// Builds a column set from a list of attribute names.
    #[must_use]
    pub fn columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Columns(names.into_iter().map(Into::into).collect())
    }
}

/// An attribute-equality query: all filters must match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryByAttribute {
    /// Lowercase logical name of the entity type to search.
    pub entity_name: String,

    /// Which attributes to bring back for each match.
    pub column_set: ColumnSet,

    /// Attribute name / required value pairs, all of which must match.
    pub attributes: Vec<(String, AttributeValue)>,
}

impl QueryByAttribute {
    /// Creates a query over the given entity type with no filters yet.
    #[must_use]
    pub fn new(entity_name: impl Into<String>, column_set: ColumnSet) -> Self {
        Self {
            entity_name: entity_name.into(),
            column_set,
            attributes: Vec::new(),
        }
    }

    /// Adds an attribute-equality filter.
    pub fn add_attribute_value(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.push((name.into(), value.into()));
    }
}
