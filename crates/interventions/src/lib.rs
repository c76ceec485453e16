//! `laborsim-interventions`: policy intervention catalog and effect formulas.
//!
//! Two tables:
//! - [`catalog`]: human-readable definitions (names, parameter schemas,
//!   qualitative display-only effects, cost-model tags).
//! - [`effects`]: the numeric formula per kind, dispatched by an exhaustive
//!   match on [`InterventionKind`].
//!
//! Everything here is deterministic given parameters and the market view.

pub mod catalog;
pub mod effects;
pub mod kind;
pub mod schema;
pub mod system;

pub use catalog::{CostModel, InterventionDefinition, all_definitions, definition};
pub use effects::{EffectOutcome, MarketView};
pub use kind::InterventionKind;
pub use schema::{ParamKind, ParamSpec, ParamValue, ResolvedParams};
pub use system::{Intervention, InterventionConfig, InterventionDetail, InterventionEffects, InterventionSystem};
