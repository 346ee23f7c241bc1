//! Organization service access.
//!
//! [`OrganizationService`] is the opaque data-access boundary implemented by
//! the host. [`ServiceHelper`] wraps a handle with the call discipline every
//! plugin otherwise reimplements: argument validation up front, per-call
//! timing, and trace output for both successes and faults.

use crate::context::TracingService;
use crate::error::{PluginError, ServiceError};
use crmkit_types::{AttributeValue, ColumnSet, Entity, EntityReference, QueryByAttribute};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Data-access operations the host exposes to plugins.
///
/// Implementations carry the privileges of the caller they were created
/// for; the worker hands out one user-privileged and one system-privileged
/// handle per invocation.
pub trait OrganizationService: Send + Sync {
    /// Links records to a target through a named relationship.
    fn associate(
        &self,
        relationship: &str,
        target: &EntityReference,
        related: &[EntityReference],
    ) -> Result<(), ServiceError>;

    /// Removes relationship links between records.
    fn disassociate(
        &self,
        relationship: &str,
        target: &EntityReference,
        related: &[EntityReference],
    ) -> Result<(), ServiceError>;

    /// Runs an attribute-equality query.
    fn retrieve_multiple(&self, query: &QueryByAttribute) -> Result<Vec<Entity>, ServiceError>;

    /// Moves a record into a queue, returning the queue item id.
    fn add_to_queue(
        &self,
        queue: &EntityReference,
        target: &EntityReference,
    ) -> Result<Uuid, ServiceError>;
}

/// An [`OrganizationService`] handle with validation, timing and tracing.
#[derive(Clone)]
pub struct ServiceHelper {
    service: Arc<dyn OrganizationService>,
    tracer: Arc<dyn TracingService>,
    timing: bool,
}

impl ServiceHelper {
    /// Wraps a service handle. Timing traces are off until enabled with
    /// [`with_timing`](Self::with_timing).
    #[must_use]
    pub fn new(service: Arc<dyn OrganizationService>, tracer: Arc<dyn TracingService>) -> Self {
        Self {
            service,
            tracer,
            timing: false,
        }
    }

    /// Enables or disables per-call timing traces.
    #[must_use]
    pub fn with_timing(mut self, timing: bool) -> Self {
        self.timing = timing;
        self
    }

    /// Links `related` records to `target` through `relationship`.
    pub fn associate(
        &self,
        relationship: &str,
        target: &EntityReference,
        related: &[EntityReference],
    ) -> Result<(), PluginError> {
        if relationship.is_empty() {
            return Err(PluginError::InvalidArgument {
                operation: "associate",
                argument: "relationship",
            });
        }
        self.tracer.trace(&format!(
            "Associate [{relationship} / {} / {}]",
            target.id, target.logical_name
        ));
        self.perform("Associate", || {
            self.service.associate(relationship, target, related)
        })
    }

    /// Removes the `relationship` links between `target` and `related`.
    pub fn disassociate(
        &self,
        relationship: &str,
        target: &EntityReference,
        related: &[EntityReference],
    ) -> Result<(), PluginError> {
        if relationship.is_empty() {
            return Err(PluginError::InvalidArgument {
                operation: "disassociate",
                argument: "relationship",
            });
        }
        self.tracer.trace(&format!(
            "Disassociate [{relationship} / {} / {}]",
            target.id, target.logical_name
        ));
        self.perform("Disassociate", || {
            self.service.disassociate(relationship, target, related)
        })
    }

    /// Fetches records of `entity_name` where `attribute` equals `value`.
    pub fn query_by_attribute(
        &self,
        entity_name: &str,
        column_set: ColumnSet,
        attribute: &str,
        value: impl Into<AttributeValue>,
    ) -> Result<Vec<Entity>, PluginError> {
        self.query_by_values(
            entity_name,
            column_set,
            vec![(attribute.to_owned(), value.into())],
        )
    }

    /// Fetches records of `entity_name` matching every filter in `filters`.
    pub fn query_by_values(
        &self,
        entity_name: &str,
        column_set: ColumnSet,
        filters: Vec<(String, AttributeValue)>,
    ) -> Result<Vec<Entity>, PluginError> {
        if entity_name.is_empty() {
            return Err(PluginError::InvalidArgument {
                operation: "query_by_values",
                argument: "entity_name",
            });
        }
        if filters.is_empty() {
            return Err(PluginError::InvalidArgument {
                operation: "query_by_values",
                argument: "filters",
            });
        }

        let rendered: Vec<String> = filters
            .iter()
            .map(|(name, value)| format!("{name} / {value}"))
            .collect();
        self.tracer.trace(&format!(
            "QueryByValue [{entity_name} ({})]",
            rendered.join(", ")
        ));

        let mut query = QueryByAttribute::new(entity_name, column_set);
        for (name, value) in filters {
            query.add_attribute_value(name, value);
        }
        self.perform("QueryByValue", || self.service.retrieve_multiple(&query))
    }

    /// Moves `target` into `queue`, returning the queue item id.
    pub fn add_to_queue(
        &self,
        queue: &EntityReference,
        target: &EntityReference,
    ) -> Result<Uuid, PluginError> {
        self.tracer
            .trace(&format!("AddToQueue [{queue} <- {target}]"));
        self.perform("AddToQueue", || self.service.add_to_queue(queue, target))
    }

    fn perform<T>(
        &self,
        caller: &str,
        call: impl FnOnce() -> Result<T, ServiceError>,
    ) -> Result<T, PluginError> {
        let started = Instant::now();
        let result = call();
        let elapsed_ms = started.elapsed().as_millis();

        match &result {
            Ok(_) => {
                tracing::debug!(caller, elapsed_ms, "organization service call completed");
                if self.timing {
                    self.tracer.trace(&format!("{caller}: {elapsed_ms}ms"));
                }
            }
            Err(fault) => {
                tracing::debug!(caller, %fault, "organization service call faulted");
                self.tracer.trace(&format!("{caller} failed: {fault}"));
            }
        }

        Ok(result?)
    }
}
