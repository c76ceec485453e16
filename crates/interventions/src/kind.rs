use core::str::FromStr;

use serde::{Deserialize, Serialize};

use laborsim_core::SimError;

/// Closed set of policy interventions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionKind {
    Ubi,
    JobRetraining,
    WageSubsidy,
    ReducedWorkweek,
    AutomationTax,
    EducationSubsidy,
    JobGuarantee,
    PortableBenefits,
    TransitionAssistance,
    NegativeIncomeTax,
    SectoralBargaining,
    AiLicensing,
    UniversalBasicServices,
    WorkerOwnership,
    GigEconomyRegulation,
    SkillsImmigration,
    PublicPrivatePartnership,
}

impl InterventionKind {
    pub const ALL: [InterventionKind; 17] = [
        InterventionKind::Ubi,
        InterventionKind::JobRetraining,
        InterventionKind::WageSubsidy,
        InterventionKind::ReducedWorkweek,
        InterventionKind::AutomationTax,
        InterventionKind::EducationSubsidy,
        InterventionKind::JobGuarantee,
        InterventionKind::PortableBenefits,
        InterventionKind::TransitionAssistance,
        InterventionKind::NegativeIncomeTax,
        InterventionKind::SectoralBargaining,
        InterventionKind::AiLicensing,
        InterventionKind::UniversalBasicServices,
        InterventionKind::WorkerOwnership,
        InterventionKind::GigEconomyRegulation,
        InterventionKind::SkillsImmigration,
        InterventionKind::PublicPrivatePartnership,
    ];

    /// Stable snake_case identifier (matches the serde representation).
    pub fn id(self) -> &'static str {
        match self {
            InterventionKind::Ubi => "ubi",
            InterventionKind::JobRetraining => "job_retraining",
            InterventionKind::WageSubsidy => "wage_subsidy",
            InterventionKind::ReducedWorkweek => "reduced_workweek",
            InterventionKind::AutomationTax => "automation_tax",
            InterventionKind::EducationSubsidy => "education_subsidy",
            InterventionKind::JobGuarantee => "job_guarantee",
            InterventionKind::PortableBenefits => "portable_benefits",
            InterventionKind::TransitionAssistance => "transition_assistance",
            InterventionKind::NegativeIncomeTax => "negative_income_tax",
            InterventionKind::SectoralBargaining => "sectoral_bargaining",
            InterventionKind::AiLicensing => "ai_licensing",
            InterventionKind::UniversalBasicServices => "universal_basic_services",
            InterventionKind::WorkerOwnership => "worker_ownership",
            InterventionKind::GigEconomyRegulation => "gig_economy_regulation",
            InterventionKind::SkillsImmigration => "skills_immigration",
            InterventionKind::PublicPrivatePartnership => "public_private_partnership",
        }
    }

    /// Multiplier on upward skill mobility while this intervention is active.
    pub fn skill_transition_strength(self) -> f64 {
        match self {
            InterventionKind::JobRetraining => 1.5,
            InterventionKind::PublicPrivatePartnership => 1.4,
            InterventionKind::EducationSubsidy => 1.3,
            InterventionKind::TransitionAssistance => 1.2,
            InterventionKind::JobGuarantee => 1.1,
            _ => 1.0,
        }
    }
}

impl core::fmt::Display for InterventionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for InterventionKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InterventionKind::ALL
            .into_iter()
            .find(|k| k.id() == s)
            .ok_or_else(|| SimError::unknown_type(s))
    }
}
