//! The host boundary.
//!
//! The platform host hands a plugin one [`ServiceProvider`]. Everything the
//! plugin can see or do flows through it: the [`ExecutionContext`] describing
//! the pipeline event, [`OrganizationService`] handles for data access, and
//! a [`TracingService`] for plugin trace output.

use crate::service::OrganizationService;
use crmkit_types::ParameterBag;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// The pipeline event the host is asking the plugin to handle.
///
/// `stage` is carried as the raw wire integer here; it is narrowed to
/// [`PluginStage`](crate::PluginStage) when the context is unpacked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionContext {
    /// Name of the platform message (e.g. "Create", "Update", "Assign").
    pub message_name: String,

    /// Raw pipeline stage value.
    pub stage: i32,

    /// Call depth: 1 for a direct platform call, incremented for each
    /// nested plugin-triggered call.
    pub depth: u32,

    /// Logical name of the record type the message targets.
    pub primary_entity_name: String,

    /// The user the pipeline is running as.
    pub user_id: Uuid,

    /// The user whose action started the pipeline.
    pub initiating_user_id: Uuid,

    /// Message parameters, keyed by the platform's parameter names.
    #[serde(default)]
    pub input_parameters: ParameterBag,
}

/// Whose privileges an organization service handle should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCaller {
    /// Act as the given user.
    User(Uuid),

    /// Act with system privileges.
    System,
}

/// Per-invocation service lookup, implemented by the host.
///
/// Accessors return `None` when the host does not supply that service for
/// this invocation; the worker decides which absences are fatal.
pub trait ServiceProvider {
    /// The pipeline event being handled.
    fn execution_context(&self) -> Option<&ExecutionContext>;

    /// A data-access handle carrying the given caller's privileges.
    fn organization_service(
        &self,
        caller: ServiceCaller,
    ) -> Option<Arc<dyn OrganizationService>>;

    /// The plugin trace sink for this invocation.
    fn tracing_service(&self) -> Option<Arc<dyn TracingService>>;
}

/// Plugin trace output, surfaced by the platform in execution logs.
pub trait TracingService: Send + Sync {
    fn trace(&self, message: &str);
}
