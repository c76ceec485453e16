//! Simulation error model.

use thiserror::Error;

use crate::id::InterventionId;

/// Result type used across the simulator crates.
pub type SimResult<T> = Result<T, SimError>;

/// Simulation-level error.
///
/// Every failure here is deterministic: bad caller input, a missing scenario,
/// or a cooperative cancellation. The core performs no I/O, so there is no
/// transient/retryable variant.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// A value failed validation (e.g. an inverted timeframe).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An intervention parameter override did not match its schema.
    #[error("invalid parameter `{key}`: {reason}")]
    InvalidParameter { key: String, reason: String },

    /// The requested intervention type is not part of the catalog.
    #[error("unknown intervention type: {0}")]
    UnknownInterventionType(String),

    /// No intervention with this id exists on the current scenario.
    #[error("unknown intervention: {0}")]
    UnknownIntervention(InterventionId),

    /// A run was requested before any scenario was created.
    #[error("no scenario has been created")]
    NoScenario,

    /// A dotted scenario parameter path could not be resolved or assigned.
    #[error("invalid parameter path: {0}")]
    ParameterPath(String),

    /// The run was cancelled before the given step executed.
    #[error("simulation cancelled before step {step}")]
    Cancelled { step: u32 },

    /// Serialization of an export failed.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl SimError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_parameter(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_type(kind: impl Into<String>) -> Self {
        Self::UnknownInterventionType(kind.into())
    }

    pub fn parameter_path(msg: impl Into<String>) -> Self {
        Self::ParameterPath(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value.to_string())
    }
}
