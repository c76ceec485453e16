//! Start-versus-end aggregation of a run.

use serde::{Deserialize, Serialize};

use laborsim_core::{ScenarioId, SimError, SimResult};

use crate::engine::SimulationResult;
use crate::scenario::Scenario;

const AFFECTED_SECTORS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricChange {
    pub start: f64,
    pub end: f64,
    pub change: f64,
    /// `None` when the start value is zero.
    pub percent_change: Option<f64>,
}

impl MetricChange {
    pub fn between(start: f64, end: f64) -> Self {
        let change = end - start;
        Self {
            start,
            end,
            change,
            percent_change: (start != 0.0).then(|| change / start * 100.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorChange {
    pub sector: String,
    pub initial_employment: f64,
    pub final_employment: f64,
    pub change: f64,
    pub percent_change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InterventionTotals {
    /// Annual-equivalent dollars summed over the run.
    pub total_fiscal_cost: f64,
    pub total_economic_impact: f64,
    pub average_job_effect: f64,
    pub average_wage_effect: f64,
    pub average_lfpr_effect: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub scenario_id: ScenarioId,
    pub scenario_name: String,
    pub steps: u32,
    pub unemployment_rate: MetricChange,
    pub total_employment: MetricChange,
    pub ai_adoption: MetricChange,
    pub average_hourly_wage: MetricChange,
    pub productivity_growth: MetricChange,
    pub job_openings: MetricChange,
    pub labor_force_participation: MetricChange,
    pub labor_share: MetricChange,
    pub cumulative_displaced: f64,
    pub cumulative_new_jobs: f64,
    pub net_job_impact: f64,
    pub interventions: InterventionTotals,
    pub most_affected_sectors: Vec<SectorChange>,
    pub least_affected_sectors: Vec<SectorChange>,
}

pub fn summarize(scenario: &Scenario, results: &[SimulationResult]) -> SimResult<SimulationSummary> {
    let (Some(first), Some(last)) = (results.first(), results.last()) else {
        return Err(SimError::validation("cannot summarize an empty run"));
    };
    let (s0, s1) = (&first.state, &last.state);

    // Fiscal figures are monthly; each step covers 12 / steps_per_year months.
    let months_per_step = 12.0 / f64::from(scenario.timeframe.steps_per_year.max(1));
    let stepped: Vec<_> = results.iter().filter(|r| r.step > 0).collect();
    let mut totals = InterventionTotals::default();
    for r in &stepped {
        totals.total_fiscal_cost += r.interventions.fiscal_cost * months_per_step;
        totals.total_economic_impact += r.interventions.economic_impact * months_per_step;
        totals.average_job_effect += r.interventions.job_effect;
        totals.average_wage_effect += r.interventions.wage_effect;
        totals.average_lfpr_effect += r.interventions.lfpr_effect;
    }
    if !stepped.is_empty() {
        let n = stepped.len() as f64;
        totals.average_job_effect /= n;
        totals.average_wage_effect /= n;
        totals.average_lfpr_effect /= n;
    }

    let mut sectors: Vec<SectorChange> = s1
        .sectors
        .iter()
        .map(|(id, s)| {
            let change = s.employment - s.initial_employment;
            SectorChange {
                sector: id.clone(),
                initial_employment: s.initial_employment,
                final_employment: s.employment,
                change,
                percent_change: if s.initial_employment > 0.0 {
                    change / s.initial_employment * 100.0
                } else {
                    0.0
                },
            }
        })
        .collect();
    sectors.sort_by(|a, b| a.percent_change.total_cmp(&b.percent_change));
    let most_affected_sectors: Vec<_> = sectors.iter().take(AFFECTED_SECTORS).cloned().collect();
    let least_affected_sectors: Vec<_> = sectors.iter().rev().take(AFFECTED_SECTORS).cloned().collect();

    Ok(SimulationSummary {
        scenario_id: scenario.id,
        scenario_name: scenario.name.clone(),
        steps: last.step,
        unemployment_rate: MetricChange::between(
            s0.labor_market.unemployment_rate,
            s1.labor_market.unemployment_rate,
        ),
        total_employment: MetricChange::between(s0.labor_market.total_employment, s1.labor_market.total_employment),
        ai_adoption: MetricChange::between(s0.ai.adoption_rate, s1.ai.adoption_rate),
        average_hourly_wage: MetricChange::between(s0.wages.average_hourly, s1.wages.average_hourly),
        productivity_growth: MetricChange::between(s0.productivity.growth_rate, s1.productivity.growth_rate),
        job_openings: MetricChange::between(s0.labor_market.job_openings, s1.labor_market.job_openings),
        labor_force_participation: MetricChange::between(
            s0.labor_market.labor_force_participation,
            s1.labor_market.labor_force_participation,
        ),
        labor_share: MetricChange::between(s0.macroeconomic.labor_share, s1.macroeconomic.labor_share),
        cumulative_displaced: s1.ai.cumulative_displaced,
        cumulative_new_jobs: s1.ai.cumulative_new_jobs,
        net_job_impact: s1.ai.cumulative_new_jobs - s1.ai.cumulative_displaced,
        interventions: totals,
        most_affected_sectors,
        least_affected_sectors,
    })
}
