//! Creating interventions and folding their effects for a simulated year.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use laborsim_core::{DemographicConstants, InterventionId, SimResult};

use crate::catalog::{CostModel, definition};
use crate::effects::{EffectContext, MarketView, evaluate};
use crate::kind::InterventionKind;
use crate::schema::{ParamValue, ResolvedParams};

/// A configured policy intervention attached to a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intervention {
    pub id: InterventionId,
    pub kind: InterventionKind,
    pub name: String,
    pub parameters: ResolvedParams,
    /// Qualitative, display-only annotations copied from the catalog.
    pub effects: BTreeMap<String, String>,
    pub cost_model: CostModel,
    pub active: bool,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

impl Intervention {
    /// Active and inside its (inclusive) year window. Missing bounds are open.
    pub fn is_active_in(&self, year: i32) -> bool {
        self.active
            && self.start_year.is_none_or(|start| year >= start)
            && self.end_year.is_none_or(|end| year <= end)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterventionConfig {
    pub name: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionDetail {
    pub id: InterventionId,
    pub kind: InterventionKind,
    pub name: String,
    pub job_effect: f64,
    pub wage_effect: f64,
    pub lfpr_effect: f64,
    pub fiscal_cost: f64,
    pub economic_impact: f64,
    pub participants: f64,
}

/// Aggregate effect of all interventions active in one step.
///
/// `fiscal_cost` and `economic_impact` are dollars per month.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InterventionEffects {
    pub job_effect: f64,
    pub wage_effect: f64,
    pub lfpr_effect: f64,
    pub fiscal_cost: f64,
    pub economic_impact: f64,
    pub details: Vec<InterventionDetail>,
}

#[derive(Debug, Clone, Default)]
pub struct InterventionSystem {
    constants: DemographicConstants,
}

impl InterventionSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constants(constants: DemographicConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &DemographicConstants {
        &self.constants
    }

    pub fn create_intervention(
        &self,
        kind_id: &str,
        overrides: &BTreeMap<String, ParamValue>,
        config: InterventionConfig,
    ) -> SimResult<Intervention> {
        let kind: InterventionKind = kind_id.parse()?;
        let def = definition(kind);
        let parameters = ResolvedParams::resolve(def.parameters, overrides)?;

        let intervention = Intervention {
            id: InterventionId::new(),
            kind,
            name: config.name.unwrap_or_else(|| def.name.to_string()),
            parameters,
            effects: def
                .effects
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            cost_model: def.cost_model,
            active: config.active.unwrap_or(true),
            start_year: config.start_year,
            end_year: config.end_year,
        };

        tracing::info!(
            intervention_id = %intervention.id,
            kind = %kind,
            start_year = ?intervention.start_year,
            end_year = ?intervention.end_year,
            "intervention created"
        );
        Ok(intervention)
    }

    pub fn calculate_effects(
        &self,
        interventions: &[Intervention],
        market: &MarketView<'_>,
        year: i32,
    ) -> InterventionEffects {
        let mut totals = InterventionEffects::default();

        for intervention in interventions.iter().filter(|i| i.is_active_in(year)) {
            let years_active = intervention
                .start_year
                .map_or(0, |start| (year - start).max(0));
            let cx = EffectContext {
                market,
                constants: &self.constants,
                params: &intervention.parameters,
                years_active: f64::from(years_active),
            };
            let outcome = evaluate(intervention.kind, &cx);

            let detail = InterventionDetail {
                id: intervention.id,
                kind: intervention.kind,
                name: intervention.name.clone(),
                job_effect: outcome.job_effect,
                wage_effect: outcome.wage_effect,
                lfpr_effect: outcome.lfpr_effect,
                fiscal_cost: outcome.annual_cost / 12.0,
                economic_impact: outcome.economic_impact_annual / 12.0,
                participants: outcome.participants,
            };

            totals.job_effect += detail.job_effect;
            totals.wage_effect += detail.wage_effect;
            totals.lfpr_effect += detail.lfpr_effect;
            totals.fiscal_cost += detail.fiscal_cost;
            totals.economic_impact += detail.economic_impact;
            totals.details.push(detail);
        }

        if !totals.details.is_empty() {
            tracing::debug!(
                year,
                active = totals.details.len(),
                job_effect = totals.job_effect,
                fiscal_cost = totals.fiscal_cost,
                "intervention effects"
            );
        }
        totals
    }

    /// Strongest upward skill-mobility preset among interventions active in `year`.
    pub fn skill_transition_strength(&self, interventions: &[Intervention], year: i32) -> f64 {
        interventions
            .iter()
            .filter(|i| i.is_active_in(year))
            .map(|i| i.kind.skill_transition_strength())
            .fold(1.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use laborsim_core::SimError;

    fn market(sectors: &BTreeMap<String, f64>) -> MarketView<'_> {
        MarketView {
            employment: 160_000_000.0,
            labor_force: 166_840_000.0,
            participation_rate: 62.5,
            average_hourly_wage: 34.5,
            adoption_rate: 35.0,
            cumulative_displaced: 0.0,
            step_displaced: 0.0,
            sector_employment: sectors,
            steps_per_year: 12,
        }
    }

    fn ubi(system: &InterventionSystem, config: InterventionConfig) -> Intervention {
        let overrides = BTreeMap::from([("monthly_amount".to_string(), ParamValue::Number(1000.0))]);
        system.create_intervention("ubi", &overrides, config).unwrap()
    }

    #[test]
    fn created_intervention_carries_every_schema_key() {
        let system = InterventionSystem::new();
        let i = ubi(&system, InterventionConfig::default());
        assert_eq!(i.name, "Universal Basic Income");
        assert_eq!(i.cost_model, CostModel::Transfer);
        assert_eq!(i.parameters.iter().count(), definition(InterventionKind::Ubi).parameters.len());
        assert_eq!(i.parameters.choice("funding_mechanism"), "progressive_tax");
        assert!(i.active);
        assert!(i.effects.contains_key("poverty"));
    }

    #[test]
    fn unknown_type_and_bad_parameters_fail() {
        let system = InterventionSystem::new();
        let err = system
            .create_intervention("robot_dividend", &BTreeMap::new(), InterventionConfig::default())
            .unwrap_err();
        assert_eq!(err, SimError::UnknownInterventionType("robot_dividend".to_string()));

        let overrides = BTreeMap::from([("monthly_amount".to_string(), ParamValue::Number(-5.0))]);
        let err = system
            .create_intervention("ubi", &overrides, InterventionConfig::default())
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter { .. }));
    }

    #[test]
    fn ubi_raises_cost_and_lowers_participation() {
        let system = InterventionSystem::new();
        let sectors = BTreeMap::new();
        let market = market(&sectors);

        let none = system.calculate_effects(&[], &market, 2026);
        let with = system.calculate_effects(&[ubi(&system, InterventionConfig::default())], &market, 2026);

        assert!(with.fiscal_cost > none.fiscal_cost);
        assert!(with.lfpr_effect < none.lfpr_effect);
        assert_eq!(with.details.len(), 1);
        // Monthly dollars.
        assert!((with.fiscal_cost - 163_800_000.0 * 1000.0).abs() < 1.0);
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let system = InterventionSystem::new();
        let sectors = BTreeMap::new();
        let market = market(&sectors);
        let windowed = ubi(
            &system,
            InterventionConfig {
                start_year: Some(2027),
                end_year: Some(2028),
                ..Default::default()
            },
        );
        let inactive = ubi(
            &system,
            InterventionConfig {
                active: Some(false),
                ..Default::default()
            },
        );
        let all = [windowed, inactive];

        assert!(system.calculate_effects(&all, &market, 2026).details.is_empty());
        assert_eq!(system.calculate_effects(&all, &market, 2027).details.len(), 1);
        assert_eq!(system.calculate_effects(&all, &market, 2028).details.len(), 1);
        assert!(system.calculate_effects(&all, &market, 2029).details.is_empty());
    }

    #[test]
    fn skill_strength_takes_the_strongest_active_preset() {
        let system = InterventionSystem::new();
        let none = BTreeMap::new();
        let retraining = system
            .create_intervention(
                "job_retraining",
                &none,
                InterventionConfig {
                    start_year: Some(2027),
                    ..Default::default()
                },
            )
            .unwrap();
        let education = system
            .create_intervention("education_subsidy", &none, InterventionConfig::default())
            .unwrap();
        let all = [retraining, education];

        assert_eq!(system.skill_transition_strength(&[], 2026), 1.0);
        assert_eq!(system.skill_transition_strength(&all, 2026), 1.3);
        assert_eq!(system.skill_transition_strength(&all, 2027), 1.5);
    }
}
