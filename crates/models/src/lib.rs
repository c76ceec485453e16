//! `laborsim-models`: the economic model suite.
//!
//! Five independent models, each a deterministic function of explicit inputs
//! plus a static coefficient table, composed by [`EconomicModelManager`]:
//!
//! - [`SolowGrowthModel`]: three-factor growth accounting (K, K_AI, L).
//! - [`TaskBasedLaborModel`]: task-exposure displacement and reinstatement.
//! - [`SkillBiasedTechModel`]: high/mid/low skill wage and employment effects.
//! - [`RegionalLaborMarketModel`]: regional scaling and migration flows.
//! - [`SectorInterdependencyModel`]: input-output ripple propagation.

pub mod interdependency;
pub mod manager;
pub mod regional;
pub mod skill_biased;
pub mod solow;
pub mod tables;
pub mod task_based;

pub use interdependency::{CascadeRisk, EconomyWideEffects, RippleEffects, SectorInterdependencyModel};
pub use manager::{ComprehensiveImpact, EconomicModelManager, FullImpact, NationalImpact};
pub use regional::{MigrationFlow, RegionalImpact, RegionalLaborMarketModel};
pub use skill_biased::{
    InequalityMetrics, SkillBiasedTechModel, SkillDistribution, SkillPremium, SkillPremiums, SkillTransitions,
    TierEmployment,
};
pub use solow::{CapitalPath, SolowGrowthModel};
pub use tables::{Region, Sector, SkillTier, TaskCategory};
pub use task_based::{Displacement, PolarizationRisk, Reinstatement, TaskBasedLaborModel, TaskImpact};
