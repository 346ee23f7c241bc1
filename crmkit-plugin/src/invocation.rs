//! Typed view of a pipeline event.
//!
//! The host's [`ExecutionContext`] carries message parameters as a loose
//! bag; [`Invocation::from_context`] resolves them into one typed value a
//! plugin can pattern-match without re-probing parameter shapes.

use crate::context::ExecutionContext;
use crate::error::PluginError;
use crate::registration::PluginStage;
use crmkit_types::{Entity, EntityReference, OptionValue};
use uuid::Uuid;

/// A fully unpacked pipeline event.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Name of the platform message.
    pub message: String,

    /// Pipeline stage, narrowed from the wire integer.
    pub stage: PluginStage,

    /// Call depth of this invocation.
    pub depth: u32,

    /// Logical name of the record type the message targets.
    pub primary_entity_name: String,

    /// The user the pipeline runs as.
    pub user_id: Uuid,

    /// The user whose action started the pipeline.
    pub initiating_user_id: Uuid,

    /// The full target record, when the message carries one.
    pub target: Option<Entity>,

    /// A pointer to the targeted record, however the message expressed it.
    pub target_reference: Option<EntityReference>,

    /// The new owner, for ownership messages.
    pub assignee: Option<EntityReference>,

    /// The new state, for state-change messages.
    pub state: Option<OptionValue>,

    /// The new status, for state-change messages.
    pub status: Option<OptionValue>,
}

impl Invocation {
    /// Unpacks the host context into a typed invocation.
    ///
    /// The target is resolved from the first parameter that fits, in
    /// priority order: a full record under `Target`, a reference under
    /// `Target`, a reference under `EntityMoniker`, then a bare id under
    /// `EmailId` (which is by construction an email record). A parameter
    /// present under a non-fitting shape falls through to the next probe.
    /// When the full record is present, the reference is derived from it.
    ///
    /// `Assignee`, `State` and `Status` are unpacked independently; a
    /// missing or differently shaped parameter leaves the field `None`.
    ///
    /// Fails only on a stage value outside the pipeline's stage set.
    pub fn from_context(context: &ExecutionContext) -> Result<Self, PluginError> {
        let stage = PluginStage::try_from(context.stage)?;
        let params = &context.input_parameters;

        let mut target = None;
        let mut target_reference = None;

        if let Some(entity) = params.get_entity("Target") {
            target_reference = Some(entity.to_reference());
            target = Some(entity.clone());
        } else if let Some(reference) = params.get_reference("Target") {
            target_reference = Some(reference.clone());
        } else if let Some(moniker) = params.get_reference("EntityMoniker") {
            target_reference = Some(moniker.clone());
        } else if let Some(email_id) = params.get_id("EmailId") {
            target_reference = Some(EntityReference::new("email", email_id));
        }

        Ok(Self {
            message: context.message_name.clone(),
            stage,
            depth: context.depth,
            primary_entity_name: context.primary_entity_name.clone(),
            user_id: context.user_id,
            initiating_user_id: context.initiating_user_id,
            target,
            target_reference,
            assignee: params.get_reference("Assignee").cloned(),
            state: params.get_option("State"),
            status: params.get_option("Status"),
        })
    }
}
