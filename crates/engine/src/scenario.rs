//! Scenario definition and its JSON-facing configuration.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use laborsim_core::{ScenarioId, SimError, SimResult};
use laborsim_interventions::{Intervention, InterventionConfig, InterventionSystem, ParamValue};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutomationPace {
    Slow,
    #[default]
    Moderate,
    Fast,
    Accelerating,
}

impl AutomationPace {
    pub fn multiplier(self) -> f64 {
        match self {
            AutomationPace::Slow => 0.5,
            AutomationPace::Moderate => 1.0,
            AutomationPace::Fast => 1.5,
            AutomationPace::Accelerating => 2.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdoptionCurve {
    Linear,
    Exponential,
    #[default]
    SCurve,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timeframe {
    pub start_year: i32,
    pub end_year: i32,
    pub steps_per_year: u32,
}

impl Timeframe {
    pub fn total_steps(&self) -> u32 {
        let years = u32::try_from(self.end_year - self.start_year).unwrap_or(0);
        years.saturating_mul(self.steps_per_year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Targets {
    pub unemployment_rate: f64,
    pub ai_adoption_rate: f64,
    pub productivity_growth: f64,
    pub automation_pace: AutomationPace,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiParameters {
    pub adoption_curve: AdoptionCurve,
    pub sector_variation: bool,
    /// Months between adoption and the displacement it causes.
    pub displacement_lag: u32,
    pub new_job_multiplier: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicParameters {
    pub gdp_growth: f64,
    pub inflation: f64,
    pub interest_rate: f64,
    pub labor_elasticity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub timeframe: Timeframe,
    pub targets: Targets,
    pub ai_parameters: AiParameters,
    pub economic_parameters: EconomicParameters,
    pub interventions: Vec<Intervention>,
}

impl Scenario {
    pub fn validate(&self) -> SimResult<()> {
        let tf = &self.timeframe;
        if tf.end_year < tf.start_year {
            return Err(SimError::validation(format!(
                "end_year {} is before start_year {}",
                tf.end_year, tf.start_year
            )));
        }
        if tf.steps_per_year == 0 {
            return Err(SimError::validation("steps_per_year must be at least 1"));
        }
        let t = &self.targets;
        if !(0.0..=50.0).contains(&t.unemployment_rate) {
            return Err(SimError::validation(format!(
                "target unemployment {} is outside [0, 50]",
                t.unemployment_rate
            )));
        }
        if !(0.0..=100.0).contains(&t.ai_adoption_rate) {
            return Err(SimError::validation(format!(
                "target AI adoption {} is outside [0, 100]",
                t.ai_adoption_rate
            )));
        }
        if !t.productivity_growth.is_finite() {
            return Err(SimError::validation("productivity_growth must be finite"));
        }
        let m = self.ai_parameters.new_job_multiplier;
        if !(m.is_finite() && m >= 0.0) {
            return Err(SimError::validation("new_job_multiplier must be a non-negative number"));
        }
        Ok(())
    }

    pub fn total_steps(&self) -> u32 {
        self.timeframe.total_steps()
    }
}

/// One intervention as written in a scenario file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterventionRequest {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, ParamValue>,
    #[serde(flatten)]
    pub config: InterventionConfig,
}

/// Caller-facing scenario input. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub steps_per_year: Option<u32>,
    pub target_unemployment: Option<f64>,
    pub ai_adoption_rate: Option<f64>,
    pub productivity_growth: Option<f64>,
    pub automation_pace: Option<AutomationPace>,
    pub adoption_curve: Option<AdoptionCurve>,
    pub sector_variation: Option<bool>,
    pub displacement_lag: Option<u32>,
    pub new_job_multiplier: Option<f64>,
    pub gdp_growth: Option<f64>,
    pub inflation: Option<f64>,
    pub interest_rate: Option<f64>,
    pub labor_elasticity: Option<f64>,
    pub interventions: Vec<InterventionRequest>,
}

impl ScenarioConfig {
    /// Fill defaults, build interventions and validate.
    pub fn build(&self, system: &InterventionSystem) -> SimResult<Scenario> {
        let start_year = self.start_year.unwrap_or(2025);
        let interventions = self
            .interventions
            .iter()
            .map(|req| system.create_intervention(&req.kind, &req.parameters, req.config.clone()))
            .collect::<SimResult<Vec<_>>>()?;

        let scenario = Scenario {
            id: ScenarioId::new(),
            name: self.name.clone().unwrap_or_else(|| "AI Impact Scenario".to_string()),
            description: self.description.clone().unwrap_or_default(),
            created_at: Utc::now(),
            timeframe: Timeframe {
                start_year,
                end_year: self.end_year.unwrap_or(start_year + 5),
                steps_per_year: self.steps_per_year.unwrap_or(12),
            },
            targets: Targets {
                unemployment_rate: self.target_unemployment.unwrap_or(6.0),
                ai_adoption_rate: self.ai_adoption_rate.unwrap_or(70.0),
                productivity_growth: self.productivity_growth.unwrap_or(2.0),
                automation_pace: self.automation_pace.unwrap_or_default(),
            },
            ai_parameters: AiParameters {
                adoption_curve: self.adoption_curve.unwrap_or_default(),
                sector_variation: self.sector_variation.unwrap_or(true),
                displacement_lag: self.displacement_lag.unwrap_or(6),
                new_job_multiplier: self.new_job_multiplier.unwrap_or(1.0),
            },
            economic_parameters: EconomicParameters {
                gdp_growth: self.gdp_growth.unwrap_or(2.0),
                inflation: self.inflation.unwrap_or(2.5),
                interest_rate: self.interest_rate.unwrap_or(4.5),
                labor_elasticity: self.labor_elasticity.unwrap_or(0.5),
            },
            interventions,
        };
        scenario.validate()?;
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_gets_documented_defaults() {
        let scenario = ScenarioConfig::default().build(&InterventionSystem::new()).unwrap();
        assert_eq!(scenario.name, "AI Impact Scenario");
        assert_eq!(scenario.timeframe.end_year, 2030);
        assert_eq!(scenario.total_steps(), 60);
        assert_eq!(scenario.targets.automation_pace, AutomationPace::Moderate);
        assert_eq!(scenario.ai_parameters.adoption_curve, AdoptionCurve::SCurve);
        assert_eq!(scenario.ai_parameters.displacement_lag, 6);
        assert!(scenario.interventions.is_empty());
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let system = InterventionSystem::new();
        let inverted = ScenarioConfig {
            start_year: Some(2030),
            end_year: Some(2025),
            ..Default::default()
        };
        assert!(matches!(inverted.build(&system), Err(SimError::Validation(_))));

        let no_steps = ScenarioConfig {
            steps_per_year: Some(0),
            ..Default::default()
        };
        assert!(matches!(no_steps.build(&system), Err(SimError::Validation(_))));

        let adoption = ScenarioConfig {
            ai_adoption_rate: Some(120.0),
            ..Default::default()
        };
        assert!(adoption.build(&system).is_err());
    }

    #[test]
    fn config_parses_from_json_with_interventions() {
        let json = r#"{
            "name": "UBI test",
            "target_unemployment": 8.0,
            "automation_pace": "fast",
            "adoption_curve": "s_curve",
            "interventions": [
                { "type": "ubi", "parameters": { "monthly_amount": 1000 }, "start_year": 2026 }
            ]
        }"#;
        let config: ScenarioConfig = serde_json::from_str(json).unwrap();
        let scenario = config.build(&InterventionSystem::new()).unwrap();
        assert_eq!(scenario.targets.automation_pace, AutomationPace::Fast);
        assert_eq!(scenario.interventions.len(), 1);
        assert_eq!(scenario.interventions[0].start_year, Some(2026));
        assert_eq!(scenario.interventions[0].parameters.number("monthly_amount"), 1000.0);
    }

    #[test]
    fn unknown_intervention_type_fails_the_build() {
        let config = ScenarioConfig {
            interventions: vec![InterventionRequest {
                kind: "robot_dividend".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(matches!(
            config.build(&InterventionSystem::new()),
            Err(SimError::UnknownInterventionType(_))
        ));
    }
}
