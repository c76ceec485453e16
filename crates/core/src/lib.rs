//! `laborsim-core`: shared building blocks for the labor-market simulator.
//!
//! This crate contains **pure** primitives (no I/O): the error model, typed
//! identifiers and the overridable demographic coefficient table used by the
//! intervention formulas.

pub mod constants;
pub mod error;
pub mod id;

pub use constants::DemographicConstants;
pub use error::{SimError, SimResult};
pub use id::{InterventionId, ScenarioId};
