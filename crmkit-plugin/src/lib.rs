//! Plugin base library for CRM pipeline plugins.
//!
//! A plugin implements [`Plugin`] and receives a [`PluginWorker`] per
//! pipeline event. The worker carries the typed [`Invocation`] (target,
//! assignee, state transitions), user- and system-privileged
//! [`OrganizationService`] handles with [`ServiceHelper`] wrappers, and the
//! plugin trace sink. [`StepRegistration`] lets the plugin assert at runtime
//! that it was wired to the pipeline steps it was written for.
//!
//! ```
//! use crmkit_plugin::{
//!     Plugin, PluginError, PluginStage, PluginWorker, StepRegistration,
//! };
//!
//! struct FollowupPlugin;
//!
//! impl Plugin for FollowupPlugin {
//!     fn execute(&self, worker: &mut PluginWorker) -> Result<(), PluginError> {
//!         worker.verify_registration(
//!             "FollowupPlugin",
//!             Some(&[StepRegistration::new()
//!                 .with_entity("contact")
//!                 .with_message("Create")
//!                 .with_stage(PluginStage::Post)]),
//!         )?;
//!
//!         if let Some(target) = worker.target() {
//!             worker.trace_message(&format!("creating followup for {}", target.id));
//!         }
//!         Ok(())
//!     }
//! }
//! ```

mod activity;
mod context;
mod error;
mod invocation;
mod record_url;
mod registration;
mod service;
mod worker;

pub use activity::{ParticipationType, activity_party, activity_party_list};
pub use context::{ExecutionContext, ServiceCaller, ServiceProvider, TracingService};
pub use error::{PluginError, ServiceError};
pub use invocation::Invocation;
pub use record_url::RecordUrl;
pub use registration::{PluginStage, StepRegistration, verify_registration};
pub use service::{OrganizationService, ServiceHelper};
pub use worker::{Plugin, PluginWorker, execute_plugin};
