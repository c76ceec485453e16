//! The simulation engine: scenario lifecycle, step loop and reporting.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use laborsim_core::{DemographicConstants, InterventionId, SimError, SimResult};
use laborsim_interventions::{
    Intervention, InterventionConfig, InterventionEffects, InterventionSystem, MarketView, ParamValue,
};
use laborsim_models::{EconomicModelManager, FullImpact, NationalImpact};

use crate::adoption::adoption_at;
use crate::baseline::BaselineSnapshot;
use crate::cancel::CancellationToken;
use crate::export::{self, ExportFormat};
use crate::impact::{self, LaborImpact, StepContext};
use crate::scenario::{Scenario, ScenarioConfig};
use crate::sensitivity::{SensitivityPoint, with_path};
use crate::state::{
    AiState, LaborMarketState, MacroState, PolicyState, ProductivityState, SectorState, SimulationState, WageState,
};
use crate::summary::{SimulationSummary, summarize};

const MIN_JOB_OPENINGS: f64 = 1_000_000.0;
const MAX_UNEMPLOYMENT: f64 = 50.0;
/// Fractional change in openings per point of unemployment change.
const OPENINGS_SENSITIVITY: f64 = 0.05;

/// One recorded step. Step 0 is the initial state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub step: u32,
    pub year: i32,
    pub month: u32,
    pub progress: f64,
    pub adoption_rate: f64,
    pub state: SimulationState,
    pub labor_impact: Option<LaborImpact>,
    pub interventions: InterventionEffects,
}

pub struct SimulationEngine {
    baseline: BaselineSnapshot,
    models: EconomicModelManager,
    interventions: InterventionSystem,
    scenario: Option<Scenario>,
}

impl SimulationEngine {
    pub fn new(baseline: BaselineSnapshot) -> Self {
        Self::with_components(baseline, EconomicModelManager::new(), InterventionSystem::new())
    }

    pub fn with_constants(baseline: BaselineSnapshot, constants: DemographicConstants) -> Self {
        Self::with_components(
            baseline,
            EconomicModelManager::new(),
            InterventionSystem::with_constants(constants),
        )
    }

    pub fn with_components(
        baseline: BaselineSnapshot,
        models: EconomicModelManager,
        interventions: InterventionSystem,
    ) -> Self {
        Self {
            baseline,
            models,
            interventions,
            scenario: None,
        }
    }

    pub fn baseline(&self) -> &BaselineSnapshot {
        &self.baseline
    }

    pub fn models(&self) -> &EconomicModelManager {
        &self.models
    }

    pub fn intervention_system(&self) -> &InterventionSystem {
        &self.interventions
    }

    pub fn scenario(&self) -> Option<&Scenario> {
        self.scenario.as_ref()
    }

    /// Build a scenario from `config`, make it current and return a copy.
    pub fn create_scenario(&mut self, config: &ScenarioConfig) -> SimResult<Scenario> {
        let scenario = config.build(&self.interventions)?;
        tracing::info!(
            scenario_id = %scenario.id,
            name = %scenario.name,
            steps = scenario.total_steps(),
            interventions = scenario.interventions.len(),
            "scenario created"
        );
        self.scenario = Some(scenario.clone());
        Ok(scenario)
    }

    /// Replace the current scenario with an already-built one.
    pub fn set_scenario(&mut self, scenario: Scenario) -> SimResult<()> {
        scenario.validate()?;
        self.scenario = Some(scenario);
        Ok(())
    }

    pub fn add_intervention(
        &mut self,
        kind_id: &str,
        overrides: &BTreeMap<String, ParamValue>,
        config: InterventionConfig,
    ) -> SimResult<InterventionId> {
        let scenario = self.scenario.as_mut().ok_or(SimError::NoScenario)?;
        let intervention = self.interventions.create_intervention(kind_id, overrides, config)?;
        let id = intervention.id;
        scenario.interventions.push(intervention);
        Ok(id)
    }

    pub fn remove_intervention(&mut self, id: InterventionId) -> SimResult<Intervention> {
        let scenario = self.scenario.as_mut().ok_or(SimError::NoScenario)?;
        let index = scenario
            .interventions
            .iter()
            .position(|i| i.id == id)
            .ok_or(SimError::UnknownIntervention(id))?;
        Ok(scenario.interventions.remove(index))
    }

    /// Initial state derived from the baseline. Resets the AI capital share.
    pub fn initialize_state(&mut self) -> SimulationState {
        let b = &self.baseline;
        let lm = &b.labor_market;

        let employed_share = 1.0 - lm.unemployment_rate / 100.0;
        let labor_force = if employed_share > 0.0 {
            lm.total_employment / employed_share
        } else {
            lm.total_employment
        };
        let working_age_population = if lm.labor_force_participation > 0.0 {
            labor_force / (lm.labor_force_participation / 100.0)
        } else {
            labor_force
        };

        let sectors: BTreeMap<String, SectorState> = b
            .sectors
            .iter()
            .map(|(id, s)| {
                let employment = s.employment as f64;
                (
                    id.clone(),
                    SectorState {
                        employment,
                        automation_exposure: s.automation_exposure,
                        initial_employment: employment,
                        displaced: 0.0,
                        new_jobs: 0.0,
                    },
                )
            })
            .collect();

        let mut skills = self.models.skills().calculate_employment_by_skill(
            lm.total_employment,
            1.0,
            b.ai_adoption,
            b.productivity.growth_rate,
        );
        skills.rescale_to(lm.total_employment);
        let ai_capital_share = self.models.solow_mut().update_ai_capital_share(b.ai_adoption);
        let solow = self.models.solow();

        SimulationState {
            labor_market: LaborMarketState {
                total_employment: lm.total_employment,
                unemployment_rate: lm.unemployment_rate.clamp(0.0, MAX_UNEMPLOYMENT),
                labor_force_participation: lm.labor_force_participation,
                job_openings: lm.job_openings.max(MIN_JOB_OPENINGS),
                labor_force,
                working_age_population,
            },
            wages: WageState {
                average_hourly: b.wages.average_hourly,
                median_weekly: b.wages.median_weekly,
                real_wage_growth: b.wages.real_wage_growth,
            },
            productivity: ProductivityState {
                growth_rate: b.productivity.growth_rate,
                output_per_hour: b.productivity.output_per_hour,
            },
            sectors: Arc::new(sectors),
            ai: AiState {
                adoption_rate: b.ai_adoption.clamp(0.0, 100.0),
                cumulative_displaced: 0.0,
                cumulative_new_jobs: 0.0,
            },
            skills,
            macroeconomic: MacroState {
                labor_share: solow.labor_share(),
                ai_capital_share,
                tfp_growth: b.productivity.growth_rate * (solow.alpha() + ai_capital_share),
            },
            policy: PolicyState::default(),
        }
    }

    pub fn calculate_ai_adoption(&self, progress: f64, scenario: &Scenario) -> f64 {
        adoption_at(
            scenario.ai_parameters.adoption_curve,
            self.baseline.ai_adoption,
            scenario.targets.ai_adoption_rate,
            progress,
        )
    }

    pub fn calculate_labor_impact(
        &mut self,
        state: &SimulationState,
        scenario: &Scenario,
        cx: &StepContext,
    ) -> LaborImpact {
        impact::calculate(&mut self.models, state, scenario, cx)
    }

    /// Apply one step's impact and intervention effects to `state`.
    pub fn update_state(
        &self,
        state: &SimulationState,
        impact: &LaborImpact,
        effects: &InterventionEffects,
        scenario: &Scenario,
        skill_strength: f64,
    ) -> SimulationState {
        let steps_per_year = f64::from(scenario.timeframe.steps_per_year.max(1));
        let mut next = state.clone();

        // Intervention effects are levels; apply only the change since last step.
        let job_delta = effects.job_effect - state.policy.intervention_jobs;
        let lfpr_delta = effects.lfpr_effect - state.policy.lfpr_effect;
        next.policy = PolicyState {
            intervention_jobs: effects.job_effect,
            lfpr_effect: effects.lfpr_effect,
        };

        let lm = &mut next.labor_market;
        lm.labor_force_participation = (lm.labor_force_participation + lfpr_delta).clamp(0.0, 100.0);
        lm.labor_force = lm.working_age_population * lm.labor_force_participation / 100.0;
        lm.total_employment = (lm.total_employment + impact.net_change + job_delta).max(0.0);

        let previous_rate = state.labor_market.unemployment_rate;
        let raw_rate = if lm.labor_force > 0.0 {
            (lm.labor_force - lm.total_employment) / lm.labor_force * 100.0
        } else {
            previous_rate
        };
        lm.unemployment_rate = raw_rate.clamp(0.0, MAX_UNEMPLOYMENT);
        if lm.unemployment_rate != raw_rate {
            tracing::warn!(raw_rate, clamped = lm.unemployment_rate, "unemployment rate clamped");
        }

        let rate_change = lm.unemployment_rate - previous_rate;
        lm.job_openings = (lm.job_openings * (1.0 - rate_change * OPENINGS_SENSITIVITY)).max(MIN_JOB_OPENINGS);

        let real_growth = self.baseline.wages.real_wage_growth + impact.wage_pressure + effects.wage_effect;
        let nominal_growth = real_growth + scenario.economic_parameters.inflation;
        let wage_factor = 1.0 + nominal_growth / 100.0 / steps_per_year;
        next.wages.average_hourly *= wage_factor;
        next.wages.median_weekly *= wage_factor;
        next.wages.real_wage_growth = real_growth;

        next.productivity.growth_rate = impact.productivity_growth;
        next.productivity.output_per_hour *= 1.0 + impact.productivity_growth / 100.0 / steps_per_year;

        if !impact.sectors.is_empty() {
            let sectors = Arc::make_mut(&mut next.sectors);
            for (id, change) in &impact.sectors {
                if let Some(sector) = sectors.get_mut(id) {
                    sector.employment = (sector.employment + change.net_change).max(0.0);
                    sector.displaced += change.displaced;
                    sector.new_jobs += change.new_jobs;
                }
            }
        }

        next.ai.adoption_rate = impact.adoption_rate.clamp(0.0, 100.0);
        next.ai.cumulative_displaced += impact.total_displaced;
        next.ai.cumulative_new_jobs += impact.total_new_jobs;

        let transitions = self.models.skills().calculate_skill_transitions(
            &state.skills,
            impact.adoption_rate,
            skill_strength,
            1.0 / steps_per_year,
        );
        next.skills = transitions.distribution;
        next.skills.rescale_to(next.labor_market.total_employment);
        for tier in [&mut next.skills.high, &mut next.skills.mid, &mut next.skills.low] {
            tier.avg_wage *= wage_factor;
        }

        let alpha = self.models.solow().alpha();
        next.macroeconomic = MacroState {
            labor_share: 1.0 - alpha - impact.ai_capital_share,
            ai_capital_share: impact.ai_capital_share,
            tfp_growth: impact.productivity_growth * (alpha + impact.ai_capital_share),
        };

        next
    }

    /// Run the current scenario and collect every step.
    pub fn run_simulation(&mut self) -> SimResult<Vec<SimulationResult>> {
        let mut results = Vec::new();
        self.run_streaming(&CancellationToken::new(), |result| results.push(result))?;
        Ok(results)
    }

    /// Run the current scenario, handing each step to `on_step` as it is
    /// produced. Returns the number of steps delivered.
    pub fn run_streaming<F>(&mut self, cancel: &CancellationToken, mut on_step: F) -> SimResult<u32>
    where
        F: FnMut(SimulationResult),
    {
        let scenario = self.scenario.clone().ok_or(SimError::NoScenario)?;
        let total_steps = scenario.total_steps();
        let steps_per_year = scenario.timeframe.steps_per_year.max(1);
        let lag_steps = (f64::from(scenario.ai_parameters.displacement_lag) * f64::from(steps_per_year) / 12.0)
            .round() as i64;

        tracing::info!(
            scenario_id = %scenario.id,
            total_steps,
            lag_steps,
            "simulation started"
        );

        let mut state = self.initialize_state();
        let baseline_ai_capital_share = state.macroeconomic.ai_capital_share;
        let adoption_at_step = |engine: &Self, step: i64| {
            let progress = if total_steps == 0 {
                1.0
            } else {
                step as f64 / f64::from(total_steps)
            };
            engine.calculate_ai_adoption(progress, &scenario)
        };

        on_step(SimulationResult {
            step: 0,
            year: scenario.timeframe.start_year,
            month: 1,
            progress: 0.0,
            adoption_rate: state.ai.adoption_rate,
            state: state.clone(),
            labor_impact: None,
            interventions: InterventionEffects::default(),
        });

        for step in 1..=total_steps {
            if cancel.is_cancelled() {
                tracing::info!(step, "simulation cancelled");
                return Err(SimError::Cancelled { step });
            }

            let s = i64::from(step);
            let cx = StepContext {
                step,
                total_steps,
                adoption: adoption_at_step(self, s),
                previous_adoption: adoption_at_step(self, s - 1),
                lagged_adoption: adoption_at_step(self, s - lag_steps),
                previous_lagged_adoption: adoption_at_step(self, s - lag_steps - 1),
                baseline_ai_capital_share,
            };
            let year = scenario.timeframe.start_year + (step / steps_per_year) as i32;
            let month = (step % steps_per_year) * 12 / steps_per_year + 1;

            let impact = self.calculate_labor_impact(&state, &scenario, &cx);
            let sector_employment = state.sector_employment();
            let market = MarketView {
                employment: state.labor_market.total_employment,
                labor_force: state.labor_market.labor_force,
                participation_rate: state.labor_market.labor_force_participation,
                average_hourly_wage: state.wages.average_hourly,
                adoption_rate: cx.adoption,
                cumulative_displaced: state.ai.cumulative_displaced + impact.total_displaced,
                step_displaced: impact.total_displaced,
                sector_employment: &sector_employment,
                steps_per_year,
            };
            let effects = self.interventions.calculate_effects(&scenario.interventions, &market, year);
            let strength = self
                .interventions
                .skill_transition_strength(&scenario.interventions, year);

            state = self.update_state(&state, &impact, &effects, &scenario, strength);
            tracing::debug!(
                step,
                year,
                adoption = cx.adoption,
                unemployment = state.labor_market.unemployment_rate,
                displaced = impact.total_displaced,
                new_jobs = impact.total_new_jobs,
                "step complete"
            );

            on_step(SimulationResult {
                step,
                year,
                month,
                progress: if total_steps == 0 { 1.0 } else { f64::from(step) / f64::from(total_steps) },
                adoption_rate: cx.adoption,
                state: state.clone(),
                labor_impact: Some(impact),
                interventions: effects,
            });
        }

        tracing::info!(
            scenario_id = %scenario.id,
            final_unemployment = state.labor_market.unemployment_rate,
            cumulative_displaced = state.ai.cumulative_displaced,
            cumulative_new_jobs = state.ai.cumulative_new_jobs,
            "simulation finished"
        );
        Ok(total_steps)
    }

    pub fn generate_summary(&self, results: &[SimulationResult]) -> SimResult<SimulationSummary> {
        let scenario = self.scenario.as_ref().ok_or(SimError::NoScenario)?;
        summarize(scenario, results)
    }

    /// Re-run the current scenario once per value with `path` overridden.
    ///
    /// The current scenario is restored afterwards, whether or not every run
    /// succeeded.
    pub fn run_sensitivity_analysis(&mut self, path: &str, values: &[Value]) -> SimResult<Vec<SensitivityPoint>> {
        let original = self.scenario.clone().ok_or(SimError::NoScenario)?;
        tracing::info!(path, values = values.len(), "sensitivity analysis started");

        let outcome = self.sweep(&original, path, values);
        self.scenario = Some(original);
        outcome
    }

    fn sweep(&mut self, original: &Scenario, path: &str, values: &[Value]) -> SimResult<Vec<SensitivityPoint>> {
        let mut points = Vec::with_capacity(values.len());
        for value in values {
            self.scenario = Some(with_path(original, path, value)?);
            let results = self.run_simulation()?;
            let summary = self.generate_summary(&results)?;
            points.push(SensitivityPoint {
                path: path.to_string(),
                value: value.clone(),
                summary,
            });
        }
        Ok(points)
    }

    pub fn export(&self, results: &[SimulationResult], format: ExportFormat) -> SimResult<String> {
        let scenario = self.scenario.as_ref().ok_or(SimError::NoScenario)?;
        match format {
            ExportFormat::Json => {
                let summary = summarize(scenario, results)?;
                export::to_json(scenario, results, &summary)
            }
            ExportFormat::Csv => export::to_csv(scenario, results),
        }
    }

    /// Regional and input-output layering of the run's net sector changes.
    pub fn full_impact(&self, results: &[SimulationResult]) -> SimResult<FullImpact> {
        let (Some(first), Some(last)) = (results.first(), results.last()) else {
            return Err(SimError::validation("full impact needs at least one result"));
        };
        let sector_net_change = last
            .state
            .sectors
            .iter()
            .map(|(id, s)| {
                let start = first.state.sectors.get(id).map_or(s.initial_employment, |f| f.employment);
                (id.clone(), s.employment - start)
            })
            .collect();
        let national = NationalImpact {
            sector_net_change,
            total_employment: last.state.labor_market.total_employment,
        };
        Ok(self
            .models
            .calculate_full_impact(&national, &last.state.sector_employment()))
    }
}
