//! Labor-market impact of one step of AI diffusion.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use laborsim_models::{EconomicModelManager, SkillPremiums};

use crate::scenario::Scenario;
use crate::state::SimulationState;

/// Exposure level at which a sector displaces at the model's nominal rate.
const REFERENCE_EXPOSURE: f64 = 0.5;
const PRODUCTIVITY_PER_AI_SHARE: f64 = 10.0;

/// Where a step sits on the adoption trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepContext {
    pub step: u32,
    pub total_steps: u32,
    pub adoption: f64,
    pub previous_adoption: f64,
    /// Adoption `displacement_lag` months before this step.
    pub lagged_adoption: f64,
    pub previous_lagged_adoption: f64,
    pub baseline_ai_capital_share: f64,
}

impl StepContext {
    /// Share of the economy newly reached by AI this step.
    pub fn increment(&self) -> f64 {
        (self.adoption - self.previous_adoption).max(0.0) / 100.0
    }

    pub fn lagged_increment(&self) -> f64 {
        (self.lagged_adoption - self.previous_lagged_adoption).max(0.0) / 100.0
    }

    pub fn remaining_steps(&self) -> u32 {
        self.total_steps.saturating_sub(self.step) + 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorImpact {
    pub displaced: f64,
    pub new_jobs: f64,
    /// Task-model change plus this sector's share of the target adjustment.
    pub net_change: f64,
    pub routine_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborImpact {
    pub adoption_rate: f64,
    pub sectors: BTreeMap<String, SectorImpact>,
    pub total_displaced: f64,
    pub total_new_jobs: f64,
    pub task_net_change: f64,
    pub target_adjustment: f64,
    pub net_change: f64,
    pub skill_premiums: SkillPremiums,
    pub wage_pressure: f64,
    pub ai_capital_share: f64,
    pub productivity_growth: f64,
    pub polarization_index: f64,
}

pub(crate) fn calculate(
    models: &mut EconomicModelManager,
    state: &SimulationState,
    scenario: &Scenario,
    cx: &StepContext,
) -> LaborImpact {
    let pace = scenario.targets.automation_pace.multiplier();
    let growth_target = scenario.targets.productivity_growth;
    let ai = &scenario.ai_parameters;
    let increment = cx.increment();
    let lagged_increment = cx.lagged_increment();

    let mut sectors = BTreeMap::new();
    let (mut total_displaced, mut total_new_jobs, mut ratio_sum) = (0.0_f64, 0.0_f64, 0.0_f64);

    for (id, sector) in state.sectors.iter() {
        let displacement = models.tasks().displacement_effect(id, cx.lagged_adoption, pace);
        let reinstatement = models.tasks().reinstatement_effect(id, cx.adoption, growth_target);
        let exposure_scale = if ai.sector_variation {
            sector.automation_exposure / REFERENCE_EXPOSURE
        } else {
            1.0
        };

        let displaced = sector.employment * displacement.effective_job_loss * lagged_increment * exposure_scale;
        let new_jobs = sector.employment * reinstatement.total * ai.new_job_multiplier * increment;
        let routine_ratio = displacement.routine_ratio();

        total_displaced += displaced;
        total_new_jobs += new_jobs;
        ratio_sum += routine_ratio;
        sectors.insert(
            id.clone(),
            SectorImpact {
                displaced,
                new_jobs,
                net_change: new_jobs - displaced,
                routine_ratio,
            },
        );
    }
    let task_net_change = total_new_jobs - total_displaced;

    // Nudge toward the target unemployment rate, closing an equal share of the
    // remaining gap each step on top of the task-model change. The gap is
    // measured without the jobs and participation change interventions supply.
    let target_adjustment = counterfactual_gap_jobs(state, scenario.targets.unemployment_rate)
        / f64::from(cx.remaining_steps());

    let sector_total: f64 = state.sectors.values().map(|s| s.employment).sum();
    if sector_total > 0.0 {
        for (id, impact) in sectors.iter_mut() {
            let share = state.sectors.get(id).map_or(0.0, |s| s.employment / sector_total);
            impact.net_change += target_adjustment * share;
        }
    }

    let skill_premiums = models.skills().calculate_skill_premiums(cx.adoption, growth_target);
    let wage_pressure = 0.3 * skill_premiums.high.wage_change
        + 0.4 * skill_premiums.mid.wage_change
        + 0.3 * skill_premiums.low.wage_change;

    let ai_capital_share = models.solow_mut().update_ai_capital_share(cx.adoption);
    let productivity_growth =
        growth_target + (ai_capital_share - cx.baseline_ai_capital_share) * PRODUCTIVITY_PER_AI_SHARE;

    let polarization_index = if sectors.is_empty() {
        0.0
    } else {
        ratio_sum / sectors.len() as f64
    };

    LaborImpact {
        adoption_rate: cx.adoption,
        sectors,
        total_displaced,
        total_new_jobs,
        task_net_change,
        target_adjustment,
        net_change: task_net_change + target_adjustment,
        skill_premiums,
        wage_pressure,
        ai_capital_share,
        productivity_growth,
        polarization_index,
    }
}

/// Jobs to add (negative: remove) for the policy-free labor market to sit at
/// `target_rate`.
fn counterfactual_gap_jobs(state: &SimulationState, target_rate: f64) -> f64 {
    let lm = &state.labor_market;
    let participation = lm.labor_force_participation - state.policy.lfpr_effect;
    let labor_force = lm.working_age_population * participation.max(0.0) / 100.0;
    if labor_force <= 0.0 {
        return 0.0;
    }
    let employed = lm.total_employment - state.policy.intervention_jobs;
    let rate = (labor_force - employed) / labor_force * 100.0;
    labor_force * (rate - target_rate) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PolicyState;
    use crate::{BaselineSnapshot, ScenarioConfig, SimulationEngine};

    fn state_at_rate(rate: f64) -> SimulationState {
        let mut engine = SimulationEngine::new(BaselineSnapshot::reference());
        engine.create_scenario(&ScenarioConfig::default()).unwrap();
        let mut state = engine.initialize_state();
        let lm = &mut state.labor_market;
        lm.total_employment = lm.labor_force * (1.0 - rate / 100.0);
        lm.unemployment_rate = rate;
        state
    }

    #[test]
    fn gap_is_zero_at_target() {
        let state = state_at_rate(8.0);
        assert!(counterfactual_gap_jobs(&state, 8.0).abs() < 1e-3);
    }

    #[test]
    fn gap_ignores_policy_effects() {
        let plain = state_at_rate(6.0);
        let expected = counterfactual_gap_jobs(&plain, 8.0);
        assert!(expected < 0.0);

        // Same market with 500k guaranteed jobs and 0.8 points less participation.
        let mut with_policy = plain.clone();
        with_policy.policy = PolicyState {
            intervention_jobs: 500_000.0,
            lfpr_effect: -0.8,
        };
        let lm = &mut with_policy.labor_market;
        lm.total_employment += 500_000.0;
        lm.labor_force_participation -= 0.8;
        lm.labor_force = lm.working_age_population * lm.labor_force_participation / 100.0;

        assert!((counterfactual_gap_jobs(&with_policy, 8.0) - expected).abs() < 1e-3);
    }
}
