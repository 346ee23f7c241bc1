//! Platform data shapes for CRM plugin development.
//!
//! Defines the types that flow across the plugin boundary:
//! - [`Entity`] — a record: logical name, id, and a bag of typed attributes
//! - [`EntityReference`] — a pointer to a record (logical name + id)
//! - [`AttributeValue`] / [`OptionValue`] — the closed set of attribute shapes
//! - [`ParameterBag`] / [`ParameterValue`] — the pipeline's message parameters
//! - [`ColumnSet`] / [`QueryByAttribute`] — attribute-equality query shapes
//!
//! These types are serialization-stable: the platform host materializes them
//! from its wire representation and plugins consume them as-is.

mod attribute;
mod entity;
mod parameters;
mod query;

pub use attribute::{AttributeValue, OptionValue};
pub use entity::{Entity, EntityReference};
pub use parameters::{ParameterBag, ParameterValue};
pub use query::{ColumnSet, QueryByAttribute};
