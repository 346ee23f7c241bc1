//! Step registration checks.
//!
//! A plugin assembly declares the pipeline steps it expects to be wired to.
//! At runtime the actual invocation is checked against that list, so a step
//! added in an environment the plugin never planned for fails loudly instead
//! of running half-applicable logic.

use crate::error::PluginError;
use crate::invocation::Invocation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage a step can be registered in.
///
/// Values are wire-significant: they match the platform's stage numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PluginStage {
    /// Before the platform's main validation, outside the transaction.
    PreValidation = 10,

    /// Before the core operation, inside the transaction.
    Pre = 20,

    /// After the core operation, inside the transaction.
    Post = 40,
}

impl PluginStage {
    /// Returns the platform's numeric stage value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for PluginStage {
    type Error = PluginError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(Self::PreValidation),
            20 => Ok(Self::Pre),
            40 => Ok(Self::Post),
            other => Err(PluginError::UnknownStage(other)),
        }
    }
}

impl fmt::Display for PluginStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreValidation => write!(f, "PreValidation"),
            Self::Pre => write!(f, "Pre"),
            Self::Post => write!(f, "Post"),
        }
    }
}

fn wildcard() -> i32 {
    -1
}

/// One expected pipeline step.
///
/// Empty strings and `-1` are wildcards: a field left at its wildcard
/// matches any invocation. `maximum_depth` is an upper bound, so a rule
/// with `maximum_depth = 2` also admits a depth-1 invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRegistration {
    /// Logical entity name to match, or empty for any entity.
    #[serde(default)]
    pub entity_name: String,

    /// Message name to match, or empty for any message.
    #[serde(default)]
    pub message: String,

    /// Stage value to match, or -1 for any stage.
    #[serde(default = "wildcard")]
    pub stage: i32,

    /// Highest admitted call depth, or -1 for any depth.
    #[serde(default = "wildcard")]
    pub maximum_depth: i32,
}

impl Default for StepRegistration {
    fn default() -> Self {
        Self {
            entity_name: String::new(),
            message: String::new(),
            stage: wildcard(),
            maximum_depth: wildcard(),
        }
    }
}

impl StepRegistration {
    /// Creates a registration that matches every invocation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the registration to one entity type.
    #[must_use]
    pub fn with_entity(mut self, entity_name: impl Into<String>) -> Self {
        self.entity_name = entity_name.into();
        self
    }

    /// Restricts the registration to one message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Restricts the registration to one pipeline stage.
    #[must_use]
    pub fn with_stage(mut self, stage: PluginStage) -> Self {
        self.stage = stage.value();
        self
    }

    /// Caps the admitted call depth.
    #[must_use]
    pub fn with_maximum_depth(mut self, maximum_depth: i32) -> Self {
        self.maximum_depth = maximum_depth;
        self
    }

    /// Reports whether this registration admits the invocation.
    ///
    /// Entity and message names compare case-insensitively; platform
    /// logical names are ASCII.
    #[must_use]
    pub fn matches(&self, invocation: &Invocation) -> bool {
        (self.entity_name.is_empty()
            || self
                .entity_name
                .eq_ignore_ascii_case(&invocation.primary_entity_name))
            && (self.message.is_empty() || self.message.eq_ignore_ascii_case(&invocation.message))
            && (self.stage == wildcard() || self.stage == invocation.stage.value())
            && (self.maximum_depth == wildcard() || self.maximum_depth >= invocation.depth as i32)
    }
}

/// Checks the invocation against the plugin's expected steps.
///
/// `None` means the plugin declares no expectations and every invocation
/// passes. `Some` with an empty list admits nothing. The two are distinct
/// configurations and are never collapsed into each other.
pub fn verify_registration(
    plugin_name: &str,
    allowed: Option<&[StepRegistration]>,
    invocation: &Invocation,
) -> Result<(), PluginError> {
    let Some(allowed) = allowed else {
        return Ok(());
    };

    if allowed.iter().any(|step| step.matches(invocation)) {
        return Ok(());
    }

    tracing::warn!(
        plugin_name,
        entity = %invocation.primary_entity_name,
        message = %invocation.message,
        stage = invocation.stage.value(),
        depth = invocation.depth,
        "invocation matched no registered step"
    );

    Err(PluginError::RegistrationMismatch {
        plugin_name: plugin_name.to_owned(),
        entity: invocation.primary_entity_name.clone(),
        message: invocation.message.clone(),
        stage: invocation.stage.value(),
        depth: invocation.depth,
    })
}
