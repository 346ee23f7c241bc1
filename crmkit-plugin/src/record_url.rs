//! Record form URL parsing.
//!
//! The platform links to a record form with `etn` (entity type name) and
//! `id` query parameters. [`RecordUrl`] pulls the record identity back out
//! of such a link, tolerating braces around the id.

use crate::error::PluginError;
use std::str::FromStr;
use url::Url;
use uuid::Uuid;

/// The record identity carried by a form URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUrl {
    /// Lowercase logical name of the entity type.
    pub entity_name: String,

    /// The record's unique identifier.
    pub id: Uuid,
}

impl RecordUrl {
    /// Extracts the record identity from a form URL.
    pub fn parse(input: &str) -> Result<Self, PluginError> {
        let url =
            Url::parse(input).map_err(|err| PluginError::InvalidRecordUrl(err.to_string()))?;

        let mut entity_name = None;
        let mut id = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "etn" => entity_name = Some(value.into_owned()),
                "id" => id = Some(value.into_owned()),
                _ => {}
            }
        }

        let entity_name = entity_name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| PluginError::InvalidRecordUrl("missing 'etn' parameter".into()))?;
        let id = id
            .ok_or_else(|| PluginError::InvalidRecordUrl("missing 'id' parameter".into()))?;
        let id = Uuid::parse_str(id.trim_matches(|c| c == '{' || c == '}'))
            .map_err(|err| PluginError::InvalidRecordUrl(err.to_string()))?;

        Ok(Self { entity_name, id })
    }
}

impl FromStr for RecordUrl {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
