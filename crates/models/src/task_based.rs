//! Task-based displacement / reinstatement accounting per sector.
//!
//! Rates returned here are fractions of sector employment; callers decide how
//! much of a rate materializes in a given period.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tables::{TaskCategory, task_shares_for};

/// Fraction of technically exposed work that is actually automated.
const PARTIAL_AUTOMATION_PASS_THROUGH: f64 = 0.6;
/// Historical rate at which automation creates new task categories.
const HISTORICAL_REINSTATEMENT_RATE: f64 = 0.4;
const PRODUCTIVITY_REINSTATEMENT: f64 = 0.02;
const NEW_TASK_REINSTATEMENT: f64 = 0.1;

const HIGH_POLARIZATION_RATIO: f64 = 3.0;
const MEDIUM_POLARIZATION_RATIO: f64 = 1.5;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolarizationRisk {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Displacement {
    pub by_task: BTreeMap<TaskCategory, f64>,
    pub total_displacement: f64,
    pub effective_job_loss: f64,
}

impl Displacement {
    /// Routine displacement divided by non-routine displacement.
    ///
    /// No non-routine displacement at all yields the high-risk threshold when
    /// routine work is displaced, 0 otherwise.
    pub fn routine_ratio(&self) -> f64 {
        let (routine, non_routine) = self.by_task.iter().fold((0.0_f64, 0.0_f64), |(r, n), (task, d)| {
            if task.is_routine() { (r + d, n) } else { (r, n + d) }
        });
        if non_routine > 0.0 {
            routine / non_routine
        } else if routine > 0.0 {
            HIGH_POLARIZATION_RATIO
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reinstatement {
    pub new_ai_roles: f64,
    pub complementary_tasks: f64,
    pub ai_maintenance: f64,
    pub productivity_driven: f64,
    pub creative_expansion: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskImpact {
    pub sector: String,
    pub displacement: Displacement,
    pub reinstatement: Reinstatement,
    pub net_impact: f64,
    pub routine_ratio: f64,
    pub polarization_risk: PolarizationRisk,
}

#[derive(Debug, Clone, Default)]
pub struct TaskBasedLaborModel;

impl TaskBasedLaborModel {
    pub fn new() -> Self {
        Self
    }

    pub fn displacement_effect(&self, sector: &str, adoption_rate: f64, automation_pace: f64) -> Displacement {
        let shares = task_shares_for(sector);
        let adoption = adoption_rate / 100.0;

        let by_task: BTreeMap<TaskCategory, f64> = TaskCategory::ALL
            .into_iter()
            .map(|task| {
                let d = shares[task as usize] * task.ai_exposure() * adoption * automation_pace;
                (task, d)
            })
            .collect();
        let total_displacement: f64 = by_task.values().sum();

        Displacement {
            by_task,
            total_displacement,
            effective_job_loss: total_displacement * PARTIAL_AUTOMATION_PASS_THROUGH,
        }
    }

    pub fn reinstatement_effect(&self, sector: &str, adoption_rate: f64, productivity_growth: f64) -> Reinstatement {
        let shares = task_shares_for(sector);
        let base = HISTORICAL_REINSTATEMENT_RATE * (adoption_rate / 100.0);
        let productivity_driven = productivity_growth * PRODUCTIVITY_REINSTATEMENT;
        let new_task_share = shares[TaskCategory::Creative as usize]
            + 0.5 * shares[TaskCategory::NonRoutineInterpersonal as usize];
        let creative_expansion = new_task_share * NEW_TASK_REINSTATEMENT;

        Reinstatement {
            new_ai_roles: base * 0.5,
            complementary_tasks: base * 0.3,
            ai_maintenance: base * 0.2,
            productivity_driven,
            creative_expansion,
            total: base + productivity_driven + creative_expansion,
        }
    }

    pub fn net_impact(
        &self,
        sector: &str,
        adoption_rate: f64,
        automation_pace: f64,
        productivity_growth: f64,
    ) -> TaskImpact {
        let displacement = self.displacement_effect(sector, adoption_rate, automation_pace);
        let reinstatement = self.reinstatement_effect(sector, adoption_rate, productivity_growth);
        let routine_ratio = displacement.routine_ratio();

        TaskImpact {
            sector: sector.to_string(),
            net_impact: reinstatement.total - displacement.effective_job_loss,
            routine_ratio,
            polarization_risk: polarization_risk(routine_ratio),
            displacement,
            reinstatement,
        }
    }
}

pub fn polarization_risk(routine_ratio: f64) -> PolarizationRisk {
    if routine_ratio > HIGH_POLARIZATION_RATIO {
        PolarizationRisk::High
    } else if routine_ratio > MEDIUM_POLARIZATION_RATIO {
        PolarizationRisk::Medium
    } else {
        PolarizationRisk::Low
    }
}
