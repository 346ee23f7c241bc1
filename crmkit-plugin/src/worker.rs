//! Per-invocation plugin state.
//!
//! [`PluginWorker`] gathers everything one pipeline event needs: the typed
//! [`Invocation`], user- and system-privileged service handles, the trace
//! sink, and ready-built [`ServiceHelper`]s. A [`Plugin`] receives a worker
//! per invocation and never touches the raw provider.

use crate::context::{ExecutionContext, ServiceCaller, ServiceProvider, TracingService};
use crate::error::PluginError;
use crate::invocation::Invocation;
use crate::registration::{PluginStage, StepRegistration, verify_registration};
use crate::service::{OrganizationService, ServiceHelper};
use crmkit_types::{Entity, EntityReference, OptionValue};
use std::sync::Arc;
use uuid::Uuid;

/// Everything a plugin needs to handle one pipeline event.
pub struct PluginWorker {
    context: ExecutionContext,
    invocation: Invocation,
    service: Arc<dyn OrganizationService>,
    admin_service: Arc<dyn OrganizationService>,
    tracer: Arc<dyn TracingService>,
    helper: ServiceHelper,
    admin_helper: ServiceHelper,
    prefix: String,
}

impl PluginWorker {
    /// Builds a worker from the host's provider.
    ///
    /// Fails when the provider is missing the execution context, either
    /// service handle, or the trace sink, or when the context's stage is
    /// outside the pipeline's stage set.
    pub fn new(provider: &dyn ServiceProvider) -> Result<Self, PluginError> {
        let context = provider
            .execution_context()
            .ok_or(PluginError::InvalidArgument {
                operation: "PluginWorker::new",
                argument: "execution_context",
            })?
            .clone();

        let invocation = Invocation::from_context(&context)?;

        let service = provider
            .organization_service(ServiceCaller::User(context.user_id))
            .ok_or(PluginError::InvalidArgument {
                operation: "PluginWorker::new",
                argument: "organization_service",
            })?;

        let admin_service = provider
            .organization_service(ServiceCaller::System)
            .ok_or(PluginError::InvalidArgument {
                operation: "PluginWorker::new",
                argument: "admin_organization_service",
            })?;

        let tracer = provider
            .tracing_service()
            .ok_or(PluginError::InvalidArgument {
                operation: "PluginWorker::new",
                argument: "tracing_service",
            })?;

        tracing::debug!(
            message = %context.message_name,
            entity = %context.primary_entity_name,
            stage = context.stage,
            depth = context.depth,
            "plugin worker ready"
        );

        let helper = ServiceHelper::new(Arc::clone(&service), Arc::clone(&tracer));
        let admin_helper = ServiceHelper::new(Arc::clone(&admin_service), Arc::clone(&tracer));

        Ok(Self {
            context,
            invocation,
            service,
            admin_service,
            tracer,
            helper,
            admin_helper,
            prefix: String::new(),
        })
    }

    /// The raw host context, as delivered.
    #[must_use]
    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }

    /// The typed view of the pipeline event.
    #[must_use]
    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    /// Name of the platform message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.invocation.message
    }

    /// Pipeline stage of this event.
    #[must_use]
    pub fn stage(&self) -> PluginStage {
        self.invocation.stage
    }

    /// Call depth of this event.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.invocation.depth
    }

    /// The user the pipeline runs as.
    #[must_use]
    pub fn user_id(&self) -> Uuid {
        self.invocation.user_id
    }

    /// The user whose action started the pipeline.
    #[must_use]
    pub fn initiating_user_id(&self) -> Uuid {
        self.invocation.initiating_user_id
    }

    /// The full target record, when the message carries one.
    #[must_use]
    pub fn target(&self) -> Option<&Entity> {
        self.invocation.target.as_ref()
    }

    /// A pointer to the targeted record, however the message expressed it.
    #[must_use]
    pub fn target_reference(&self) -> Option<&EntityReference> {
        self.invocation.target_reference.as_ref()
    }

    /// The new owner, for ownership messages.
    #[must_use]
    pub fn assignee(&self) -> Option<&EntityReference> {
        self.invocation.assignee.as_ref()
    }

    /// The new state, for state-change messages.
    #[must_use]
    pub fn state(&self) -> Option<OptionValue> {
        self.invocation.state
    }

    /// The new status, for state-change messages.
    #[must_use]
    pub fn status(&self) -> Option<OptionValue> {
        self.invocation.status
    }

    /// The user-privileged service handle.
    #[must_use]
    pub fn service(&self) -> &Arc<dyn OrganizationService> {
        &self.service
    }

    /// The system-privileged service handle.
    #[must_use]
    pub fn admin_service(&self) -> &Arc<dyn OrganizationService> {
        &self.admin_service
    }

    /// Helper over the user-privileged handle.
    #[must_use]
    pub fn service_helper(&self) -> &ServiceHelper {
        &self.helper
    }

    /// Helper over the system-privileged handle.
    #[must_use]
    pub fn admin_service_helper(&self) -> &ServiceHelper {
        &self.admin_helper
    }

    /// Sets the prefix prepended to [`trace_message`](Self::trace_message)
    /// output.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Writes a line to the plugin trace log, prefixed when a prefix is set.
    pub fn trace_message(&self, message: &str) {
        if self.prefix.is_empty() {
            self.tracer.trace(message);
        } else {
            self.tracer.trace(&format!("{} {message}", self.prefix));
        }
    }

    /// Checks this invocation against the plugin's expected steps.
    ///
    /// See [`verify_registration`] for the matching rules.
    pub fn verify_registration(
        &self,
        plugin_name: &str,
        allowed: Option<&[StepRegistration]>,
    ) -> Result<(), PluginError> {
        verify_registration(plugin_name, allowed, &self.invocation)
    }
}

/// A plugin's entry point, called once per pipeline event.
pub trait Plugin {
    fn execute(&self, worker: &mut PluginWorker) -> Result<(), PluginError>;
}

/// Builds a worker from the provider and runs the plugin against it.
pub fn execute_plugin(
    plugin: &dyn Plugin,
    provider: &dyn ServiceProvider,
) -> Result<(), PluginError> {
    let mut worker = PluginWorker::new(provider)?;
    plugin.execute(&mut worker)
}
