//! Human-readable intervention catalog.
//!
//! The `effects` entries are qualitative annotations for display only; the
//! numbers the simulation uses come from [`crate::effects`].

use serde::{Deserialize, Serialize};

use crate::kind::InterventionKind;
use crate::schema::{ParamKind, ParamSpec};

/// How an intervention's fiscal cost arises.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostModel {
    /// Direct cash transfers to households.
    Transfer,
    /// Budgeted program spending.
    Program,
    /// Subsidy paid through employers or institutions.
    Subsidy,
    /// Mostly administrative cost; effects come from rules.
    Regulatory,
    /// Net revenue raiser.
    Revenue,
    /// In-kind public services.
    Service,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct InterventionDefinition {
    pub kind: InterventionKind,
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [ParamSpec],
    pub effects: &'static [(&'static str, &'static str)],
    pub cost_model: CostModel,
}

const SECTORS: &[&str] = &[
    "manufacturing",
    "retail",
    "healthcare",
    "finance",
    "technology",
    "education",
    "construction",
    "transportation",
];

const fn number(key: &'static str, label: &'static str, default: f64, min: f64, max: f64) -> ParamSpec {
    ParamSpec {
        key,
        label,
        kind: ParamKind::Number { default, min, max },
    }
}

const fn select(
    key: &'static str,
    label: &'static str,
    options: &'static [&'static str],
    default: &'static str,
) -> ParamSpec {
    ParamSpec {
        key,
        label,
        kind: ParamKind::Select { options, default },
    }
}

const fn multiselect(
    key: &'static str,
    label: &'static str,
    options: &'static [&'static str],
    default: &'static [&'static str],
) -> ParamSpec {
    ParamSpec {
        key,
        label,
        kind: ParamKind::MultiSelect { options, default },
    }
}

const fn boolean(key: &'static str, label: &'static str, default: bool) -> ParamSpec {
    ParamSpec {
        key,
        label,
        kind: ParamKind::Boolean { default },
    }
}

pub fn definition(kind: InterventionKind) -> InterventionDefinition {
    match kind {
        InterventionKind::Ubi => InterventionDefinition {
            kind,
            name: "Universal Basic Income",
            description: "Unconditional monthly cash payment to every adult.",
            parameters: const {
                &[
                    number("monthly_amount", "Monthly payment (USD)", 1000.0, 0.0, 5000.0),
                    number("coverage_percent", "Adult coverage (%)", 100.0, 0.0, 100.0),
                    select(
                        "funding_mechanism",
                        "Funding mechanism",
                        &["progressive_tax", "vat", "carbon_tax", "deficit"],
                        "progressive_tax",
                    ),
                    boolean("income_phase_out", "Phase out with income", false),
                ]
            },
            effects: &[
                ("poverty", "significant_decrease"),
                ("labor_force_participation", "slight_decrease"),
                ("consumer_spending", "increase"),
                ("fiscal_balance", "large_cost"),
            ],
            cost_model: CostModel::Transfer,
        },
        InterventionKind::JobRetraining => InterventionDefinition {
            kind,
            name: "Job Retraining Program",
            description: "Funded retraining for workers displaced by automation.",
            parameters: const {
                &[
                    number("annual_budget_billions", "Annual budget ($B)", 10.0, 1.0, 100.0),
                    number("program_duration_months", "Program duration (months)", 12.0, 3.0, 36.0),
                    number("success_rate", "Placement success rate (%)", 65.0, 10.0, 95.0),
                    boolean("target_displaced_only", "Target displaced workers only", true),
                ]
            },
            effects: &[
                ("reemployment", "increase"),
                ("skill_mismatch", "decrease"),
                ("wages", "slight_increase"),
            ],
            cost_model: CostModel::Program,
        },
        InterventionKind::WageSubsidy => InterventionDefinition {
            kind,
            name: "Wage Subsidy",
            description: "Government pays part of the wage for low-wage jobs.",
            parameters: const {
                &[
                    number("subsidy_percent", "Subsidy (% of wage)", 20.0, 5.0, 50.0),
                    number("wage_cap_hourly", "Eligible wage cap ($/hour)", 20.0, 10.0, 40.0),
                    multiselect("target_sectors", "Target sectors", SECTORS, &[]),
                ]
            },
            effects: &[
                ("employment", "increase"),
                ("low_wage_income", "increase"),
                ("fiscal_balance", "moderate_cost"),
            ],
            cost_model: CostModel::Subsidy,
        },
        InterventionKind::ReducedWorkweek => InterventionDefinition {
            kind,
            name: "Reduced Workweek",
            description: "Shorter standard workweek to share available work.",
            parameters: const {
                &[
                    number("target_hours", "Standard weekly hours", 32.0, 28.0, 40.0),
                    number("wage_maintenance_percent", "Pay maintained (%)", 100.0, 80.0, 100.0),
                    number("phase_in_years", "Phase-in (years)", 2.0, 1.0, 5.0),
                    boolean("exempt_small_business", "Exempt small business", true),
                ]
            },
            effects: &[
                ("employment", "increase"),
                ("work_life_balance", "increase"),
                ("output", "slight_decrease"),
            ],
            cost_model: CostModel::Regulatory,
        },
        InterventionKind::AutomationTax => InterventionDefinition {
            kind,
            name: "Automation Tax",
            description: "Tax on labor cost replaced by automation (robot tax).",
            parameters: const {
                &[
                    number("tax_rate", "Tax rate (%)", 10.0, 1.0, 50.0),
                    select(
                        "revenue_use",
                        "Revenue use",
                        &["retraining", "ubi", "general_fund"],
                        "retraining",
                    ),
                ]
            },
            effects: &[
                ("automation_pace", "decrease"),
                ("fiscal_balance", "revenue"),
                ("investment", "slight_decrease"),
            ],
            cost_model: CostModel::Revenue,
        },
        InterventionKind::EducationSubsidy => InterventionDefinition {
            kind,
            name: "Education Subsidy",
            description: "Tuition support for post-secondary education.",
            parameters: const {
                &[
                    number("tuition_coverage_percent", "Tuition covered (%)", 50.0, 10.0, 100.0),
                    boolean("stem_focus", "STEM focus", true),
                    number("income_cap_thousands", "Household income cap ($K)", 125.0, 50.0, 250.0),
                ]
            },
            effects: &[
                ("skill_levels", "increase"),
                ("long_term_wages", "increase"),
                ("short_term_participation", "slight_decrease"),
            ],
            cost_model: CostModel::Subsidy,
        },
        InterventionKind::JobGuarantee => InterventionDefinition {
            kind,
            name: "Federal Job Guarantee",
            description: "Public employment offer at a fixed wage for anyone seeking work.",
            parameters: const {
                &[
                    number("wage_hourly", "Wage ($/hour)", 15.0, 10.0, 25.0),
                    number("hours_per_week", "Hours per week", 35.0, 20.0, 40.0),
                    boolean("include_benefits", "Include benefits", true),
                    select(
                        "eligibility",
                        "Eligibility",
                        &["unemployed_only", "all_seekers"],
                        "unemployed_only",
                    ),
                ]
            },
            effects: &[
                ("unemployment", "significant_decrease"),
                ("wage_floor", "increase"),
                ("fiscal_balance", "large_cost"),
            ],
            cost_model: CostModel::Program,
        },
        InterventionKind::PortableBenefits => InterventionDefinition {
            kind,
            name: "Portable Benefits",
            description: "Benefits attached to workers rather than employers.",
            parameters: const {
                &[
                    number("employer_contribution_percent", "Employer contribution (%)", 5.0, 1.0, 15.0),
                    number("government_match_percent", "Government match (%)", 2.0, 0.0, 10.0),
                    boolean("covers_gig_workers", "Covers gig workers", true),
                ]
            },
            effects: &[
                ("worker_security", "increase"),
                ("labor_mobility", "increase"),
                ("employer_costs", "slight_increase"),
            ],
            cost_model: CostModel::Subsidy,
        },
        InterventionKind::TransitionAssistance => InterventionDefinition {
            kind,
            name: "Transition Assistance",
            description: "Income support and relocation help for displaced workers.",
            parameters: const {
                &[
                    number("monthly_benefit", "Monthly benefit (USD)", 1500.0, 500.0, 4000.0),
                    number("duration_months", "Benefit duration (months)", 12.0, 3.0, 36.0),
                    boolean("relocation_assistance", "Relocation assistance", false),
                    number("relocation_amount", "Relocation grant (USD)", 5000.0, 0.0, 20000.0),
                ]
            },
            effects: &[
                ("displaced_hardship", "decrease"),
                ("job_matching", "increase"),
                ("regional_mobility", "increase"),
            ],
            cost_model: CostModel::Transfer,
        },
        InterventionKind::NegativeIncomeTax => InterventionDefinition {
            kind,
            name: "Negative Income Tax",
            description: "Income top-up for earners below a threshold.",
            parameters: const {
                &[
                    number("income_threshold_thousands", "Income threshold ($K)", 40.0, 20.0, 80.0),
                    number("nit_rate", "Top-up rate (%)", 50.0, 20.0, 75.0),
                ]
            },
            effects: &[
                ("poverty", "decrease"),
                ("work_incentives", "slight_decrease"),
                ("fiscal_balance", "moderate_cost"),
            ],
            cost_model: CostModel::Transfer,
        },
        InterventionKind::SectoralBargaining => InterventionDefinition {
            kind,
            name: "Sectoral Bargaining",
            description: "Industry-wide wage floors negotiated by sector councils.",
            parameters: const {
                &[
                    number("coverage_percent", "Worker coverage (%)", 50.0, 10.0, 100.0),
                    multiselect("target_sectors", "Target sectors", SECTORS, &[]),
                    number("wage_floor_increase", "Wage floor increase (%)", 10.0, 0.0, 30.0),
                ]
            },
            effects: &[
                ("wages", "increase"),
                ("inequality", "decrease"),
                ("employment", "slight_decrease"),
            ],
            cost_model: CostModel::Regulatory,
        },
        InterventionKind::AiLicensing => InterventionDefinition {
            kind,
            name: "AI Licensing & Revenue Sharing",
            description: "License fee on commercial AI deployment with worker revenue sharing.",
            parameters: const {
                &[
                    number("license_fee_percent", "License fee (% of AI value)", 2.0, 0.5, 10.0),
                    boolean("worker_impact_assessment", "Require worker impact assessment", true),
                    number("revenue_sharing_percent", "Revenue shared with workers (%)", 50.0, 0.0, 100.0),
                ]
            },
            effects: &[
                ("displacement", "slight_decrease"),
                ("fiscal_balance", "revenue"),
                ("ai_investment", "slight_decrease"),
            ],
            cost_model: CostModel::Revenue,
        },
        InterventionKind::UniversalBasicServices => InterventionDefinition {
            kind,
            name: "Universal Basic Services",
            description: "Free provision of essential services.",
            parameters: const {
                &[
                    multiselect(
                        "services",
                        "Services provided",
                        &["healthcare", "housing", "transportation", "education", "internet"],
                        &["healthcare", "housing", "transportation", "education", "internet"],
                    ),
                    number("coverage_percent", "Population coverage (%)", 100.0, 10.0, 100.0),
                ]
            },
            effects: &[
                ("cost_of_living", "decrease"),
                ("public_employment", "increase"),
                ("fiscal_balance", "large_cost"),
            ],
            cost_model: CostModel::Service,
        },
        InterventionKind::WorkerOwnership => InterventionDefinition {
            kind,
            name: "Worker Ownership Incentives",
            description: "Tax incentives for conversion to employee ownership.",
            parameters: const {
                &[
                    number("tax_incentive_percent", "Tax incentive (%)", 20.0, 5.0, 50.0),
                    select("target_firm_size", "Target firm size", &["small", "medium", "all"], "all"),
                    number("conversion_rate_target", "Firms converting (%)", 5.0, 1.0, 20.0),
                ]
            },
            effects: &[
                ("job_retention", "increase"),
                ("wealth_inequality", "decrease"),
                ("productivity", "slight_increase"),
            ],
            cost_model: CostModel::Subsidy,
        },
        InterventionKind::GigEconomyRegulation => InterventionDefinition {
            kind,
            name: "Gig Economy Regulation",
            description: "Minimum earnings and classification rules for platform work.",
            parameters: const {
                &[
                    number("minimum_earnings_hourly", "Minimum earnings ($/hour)", 18.0, 12.0, 30.0),
                    boolean("benefits_required", "Benefits required", true),
                    select(
                        "classification_test",
                        "Classification test",
                        &["abc_test", "economic_realities", "status_quo"],
                        "economic_realities",
                    ),
                ]
            },
            effects: &[
                ("gig_worker_income", "increase"),
                ("gig_employment", "slight_decrease"),
                ("worker_security", "increase"),
            ],
            cost_model: CostModel::Regulatory,
        },
        InterventionKind::SkillsImmigration => InterventionDefinition {
            kind,
            name: "Skills-Based Immigration",
            description: "Visas targeted at skills complementary to AI adoption.",
            parameters: const {
                &[
                    number("annual_visas", "Visas per year", 100_000.0, 0.0, 500_000.0),
                    select("skill_threshold", "Skill threshold", &["high", "mid", "all"], "high"),
                    multiselect("target_sectors", "Target sectors", SECTORS, &[]),
                ]
            },
            effects: &[
                ("skill_shortages", "decrease"),
                ("innovation", "increase"),
                ("native_wages", "mixed"),
            ],
            cost_model: CostModel::Revenue,
        },
        InterventionKind::PublicPrivatePartnership => InterventionDefinition {
            kind,
            name: "Public-Private Retraining Partnership",
            description: "Employer co-funded retraining with apprenticeships.",
            parameters: const {
                &[
                    number("public_funding_billions", "Public funding ($B)", 5.0, 1.0, 50.0),
                    number("private_match_ratio", "Private match ratio", 1.0, 0.0, 3.0),
                    multiselect("industry_focus", "Industry focus", SECTORS, &[]),
                    boolean("apprenticeship_component", "Apprenticeship component", true),
                ]
            },
            effects: &[
                ("reemployment", "increase"),
                ("employer_engagement", "increase"),
                ("skill_mismatch", "decrease"),
            ],
            cost_model: CostModel::Program,
        },
    }
}

/// Every catalog entry in declaration order.
pub fn all_definitions() -> Vec<InterventionDefinition> {
    InterventionKind::ALL.into_iter().map(definition).collect()
}
