//! Per-step simulation state.
//!
//! The sector map sits behind an `Arc` so consecutive results can share it
//! until a step changes it.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use laborsim_models::SkillDistribution;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborMarketState {
    pub total_employment: f64,
    /// Percent, kept within [0, 50].
    pub unemployment_rate: f64,
    pub labor_force_participation: f64,
    /// Never below 1,000,000.
    pub job_openings: f64,
    pub labor_force: f64,
    pub working_age_population: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageState {
    pub average_hourly: f64,
    pub median_weekly: f64,
    pub real_wage_growth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivityState {
    pub growth_rate: f64,
    pub output_per_hour: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorState {
    pub employment: f64,
    pub automation_exposure: f64,
    pub initial_employment: f64,
    pub displaced: f64,
    pub new_jobs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiState {
    pub adoption_rate: f64,
    pub cumulative_displaced: f64,
    pub cumulative_new_jobs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroState {
    pub labor_share: f64,
    pub ai_capital_share: f64,
    pub tfp_growth: f64,
}

/// Intervention effects currently applied to the state, as levels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolicyState {
    pub intervention_jobs: f64,
    pub lfpr_effect: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub labor_market: LaborMarketState,
    pub wages: WageState,
    pub productivity: ProductivityState,
    pub sectors: Arc<BTreeMap<String, SectorState>>,
    pub ai: AiState,
    pub skills: SkillDistribution,
    pub macroeconomic: MacroState,
    pub policy: PolicyState,
}

impl SimulationState {
    pub fn sector_employment(&self) -> BTreeMap<String, f64> {
        self.sectors
            .iter()
            .map(|(id, s)| (id.clone(), s.employment))
            .collect()
    }

    pub fn unemployed(&self) -> f64 {
        (self.labor_market.labor_force - self.labor_market.total_employment).max(0.0)
    }
}
