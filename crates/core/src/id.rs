//! Identifiers for scenarios and the interventions attached to them.
//!
//! Ids label runs and let callers remove an intervention from the current
//! scenario. They are time-ordered UUIDv7 values and never enter the numeric
//! results, so two runs of the same scenario agree step for step.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SimError;

macro_rules! sim_id {
    ($(#[$doc:meta])* $t:ident, $label:literal) => {
        $(#[$doc])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(Uuid);

        impl $t {
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $t {
            type Err = SimError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::from_str(s)
                    .map(Self)
                    .map_err(|e| SimError::validation(format!("invalid {} `{s}`: {e}", $label)))
            }
        }
    };
}

sim_id!(
    /// One configured simulation; replaced when a new scenario is created.
    ScenarioId,
    "scenario id"
);
sim_id!(
    /// One intervention instance. Two instances of the same kind differ by id.
    InterventionId,
    "intervention id"
);
