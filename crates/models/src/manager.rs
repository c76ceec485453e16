//! Composition root for the model suite.
//!
//! The manager owns one instance of each model; callers construct it
//! explicitly and pass it where needed (there is no shared global instance).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::interdependency::{EconomyWideEffects, SectorInterdependencyModel};
use crate::regional::{MigrationFlow, RegionalImpact, RegionalLaborMarketModel};
use crate::skill_biased::{InequalityMetrics, SkillBiasedTechModel, SkillDistribution, SkillPremiums};
use crate::solow::SolowGrowthModel;
use crate::task_based::{TaskBasedLaborModel, TaskImpact};

/// National employment change per sector, the input to regional and
/// interdependency layering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NationalImpact {
    pub sector_net_change: BTreeMap<String, f64>,
    pub total_employment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveImpact {
    pub task: TaskImpact,
    pub skill_premiums: SkillPremiums,
    pub employment_by_skill: SkillDistribution,
    pub inequality: InequalityMetrics,
    pub ai_capital_share: f64,
    pub labor_share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullImpact {
    pub national: NationalImpact,
    pub regional: Vec<RegionalImpact>,
    pub migration_flows: Vec<MigrationFlow>,
    pub divergence_index: f64,
    pub vulnerability_index: f64,
    pub interdependency: EconomyWideEffects,
}

#[derive(Debug, Clone, Default)]
pub struct EconomicModelManager {
    solow: SolowGrowthModel,
    tasks: TaskBasedLaborModel,
    skills: SkillBiasedTechModel,
    regional: RegionalLaborMarketModel,
    interdependency: SectorInterdependencyModel,
}

impl EconomicModelManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_solow(mut self, solow: SolowGrowthModel) -> Self {
        self.solow = solow;
        self
    }

    pub fn solow(&self) -> &SolowGrowthModel {
        &self.solow
    }

    pub fn solow_mut(&mut self) -> &mut SolowGrowthModel {
        &mut self.solow
    }

    pub fn tasks(&self) -> &TaskBasedLaborModel {
        &self.tasks
    }

    pub fn skills(&self) -> &SkillBiasedTechModel {
        &self.skills
    }

    pub fn regional(&self) -> &RegionalLaborMarketModel {
        &self.regional
    }

    pub fn interdependency(&self) -> &SectorInterdependencyModel {
        &self.interdependency
    }

    /// Task-based net impact, skill effects and growth-accounting shares for
    /// one sector. Updates the Solow AI-capital share as a side effect.
    pub fn calculate_comprehensive_impact(
        &mut self,
        sector: &str,
        adoption_rate: f64,
        total_employment: f64,
        productivity_growth: f64,
        automation_pace: f64,
    ) -> ComprehensiveImpact {
        let task = self
            .tasks
            .net_impact(sector, adoption_rate, automation_pace, productivity_growth);
        let skill_premiums = self.skills.calculate_skill_premiums(adoption_rate, productivity_growth);
        let employment_by_skill =
            self.skills
                .calculate_employment_by_skill(total_employment, 1.0, adoption_rate, productivity_growth);
        let inequality = self.skills.calculate_inequality_metrics(&employment_by_skill);
        let ai_capital_share = self.solow.update_ai_capital_share(adoption_rate);

        ComprehensiveImpact {
            task,
            skill_premiums,
            employment_by_skill,
            inequality,
            ai_capital_share,
            labor_share: self.solow.labor_share(),
        }
    }

    /// Layer regional and input-output effects on top of a national impact.
    ///
    /// `sector_employment` restricts the interdependency shock to sectors
    /// that exist in the simulated economy.
    pub fn calculate_full_impact(
        &self,
        national: &NationalImpact,
        sector_employment: &BTreeMap<String, f64>,
    ) -> FullImpact {
        let regional = self.regional.calculate_all_regions(national);
        let migration_flows = self.regional.calculate_migration_flows(&regional);
        let divergence_index = self.regional.divergence_index(&regional);
        let vulnerability_index = self.regional.vulnerability_index(&regional);

        let direct: BTreeMap<String, f64> = national
            .sector_net_change
            .iter()
            .filter(|(id, _)| sector_employment.contains_key(*id))
            .map(|(id, net)| (id.clone(), *net))
            .collect();
        let interdependency = self.interdependency.calculate_economy_wide_effects(&direct);

        tracing::debug!(
            regions = regional.len(),
            flows = migration_flows.len(),
            divergence_index,
            "computed full impact"
        );

        FullImpact {
            national: national.clone(),
            regional,
            migration_flows,
            divergence_index,
            vulnerability_index,
            interdependency,
        }
    }
}
