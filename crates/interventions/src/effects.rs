//! Numeric effect formulas, one per [`InterventionKind`].
//!
//! Units of an [`EffectOutcome`]:
//! - `job_effect`: jobs, as a level relative to no intervention;
//! - `wage_effect`: annual percent added to wage growth;
//! - `lfpr_effect`: percentage points of participation, as a level;
//! - `annual_cost` / `economic_impact_annual`: dollars per year (negative
//!   cost means net revenue).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use laborsim_core::DemographicConstants;

use crate::kind::InterventionKind;
use crate::schema::ResolvedParams;

/// Read-only slice of the simulated labor market the formulas need.
#[derive(Debug, Clone, Copy)]
pub struct MarketView<'a> {
    pub employment: f64,
    pub labor_force: f64,
    pub participation_rate: f64,
    pub average_hourly_wage: f64,
    pub adoption_rate: f64,
    pub cumulative_displaced: f64,
    /// Workers displaced during the current step.
    pub step_displaced: f64,
    pub sector_employment: &'a BTreeMap<String, f64>,
    pub steps_per_year: u32,
}

impl MarketView<'_> {
    pub fn unemployed(&self) -> f64 {
        (self.labor_force - self.employment).max(0.0)
    }

    /// Employment summed over the named sectors; unknown ids count as zero.
    pub fn employment_in(&self, sectors: &[String]) -> f64 {
        sectors
            .iter()
            .filter_map(|s| self.sector_employment.get(s))
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectOutcome {
    pub job_effect: f64,
    pub wage_effect: f64,
    pub lfpr_effect: f64,
    pub annual_cost: f64,
    pub economic_impact_annual: f64,
    pub participants: f64,
}

pub(crate) struct EffectContext<'a> {
    pub market: &'a MarketView<'a>,
    pub constants: &'a DemographicConstants,
    pub params: &'a ResolvedParams,
    /// Whole years since the intervention started, never negative.
    pub years_active: f64,
}

impl EffectContext<'_> {
    fn n(&self, key: &str) -> f64 {
        self.params.number(key)
    }

    fn pct(&self, key: &str) -> f64 {
        self.params.number(key) / 100.0
    }

    fn adults(&self) -> f64 {
        self.constants.adult_population()
    }

    fn annual_wage(&self) -> f64 {
        self.market.average_hourly_wage * self.constants.annual_hours
    }

    /// Employment of the listed sectors, or the whole economy when none are listed.
    fn covered_employment(&self, key: &str) -> f64 {
        let sectors = self.params.list(key);
        if sectors.is_empty() {
            self.market.employment
        } else {
            self.market.employment_in(sectors)
        }
    }

    fn share_of_adults(&self, people: f64) -> f64 {
        let adults = self.adults();
        if adults > 0.0 { people / adults * 100.0 } else { 0.0 }
    }
}

pub(crate) fn evaluate(kind: InterventionKind, cx: &EffectContext<'_>) -> EffectOutcome {
    match kind {
        InterventionKind::Ubi => ubi(cx),
        InterventionKind::JobRetraining => job_retraining(cx),
        InterventionKind::WageSubsidy => wage_subsidy(cx),
        InterventionKind::ReducedWorkweek => reduced_workweek(cx),
        InterventionKind::AutomationTax => automation_tax(cx),
        InterventionKind::EducationSubsidy => education_subsidy(cx),
        InterventionKind::JobGuarantee => job_guarantee(cx),
        InterventionKind::PortableBenefits => portable_benefits(cx),
        InterventionKind::TransitionAssistance => transition_assistance(cx),
        InterventionKind::NegativeIncomeTax => negative_income_tax(cx),
        InterventionKind::SectoralBargaining => sectoral_bargaining(cx),
        InterventionKind::AiLicensing => ai_licensing(cx),
        InterventionKind::UniversalBasicServices => universal_basic_services(cx),
        InterventionKind::WorkerOwnership => worker_ownership(cx),
        InterventionKind::GigEconomyRegulation => gig_economy_regulation(cx),
        InterventionKind::SkillsImmigration => skills_immigration(cx),
        InterventionKind::PublicPrivatePartnership => public_private_partnership(cx),
    }
}

fn ubi(cx: &EffectContext<'_>) -> EffectOutcome {
    let c = cx.constants;
    let amount = cx.n("monthly_amount");
    let coverage = cx.pct("coverage_percent");
    let phase_out = cx.params.flag("income_phase_out");

    let participants = cx.adults() * coverage * if phase_out { 0.7 } else { 1.0 };
    let annual_cost = participants * amount * 12.0;
    // Share of spending that is net new demand after the funding source.
    let net_stimulus = match cx.params.choice("funding_mechanism") {
        "deficit" => 1.0,
        "vat" => 0.35,
        "carbon_tax" => 0.5,
        _ => 0.45,
    };
    let economic_impact_annual = annual_cost * c.mpc_general * c.fiscal_multiplier * net_stimulus;

    EffectOutcome {
        job_effect: economic_impact_annual / c.cost_per_job * 0.1,
        wage_effect: amount / 1000.0 * 0.5 * coverage,
        lfpr_effect: -(amount / 1000.0) * 0.8 * coverage * if phase_out { 0.6 } else { 1.0 },
        annual_cost,
        economic_impact_annual,
        participants,
    }
}

fn job_retraining(cx: &EffectContext<'_>) -> EffectOutcome {
    let budget = cx.n("annual_budget_billions") * 1e9;
    let cost_per_participant = 8_000.0 * cx.n("program_duration_months") / 12.0;
    let success = cx.pct("success_rate");

    let unemployed = cx.market.unemployed();
    let pool = if cx.params.flag("target_displaced_only") {
        cx.market.cumulative_displaced.max(0.1 * unemployed)
    } else {
        unemployed
    };
    let funded = if cost_per_participant > 0.0 { budget / cost_per_participant } else { 0.0 };
    let participants = funded.min(pool);
    let annual_cost = participants * cost_per_participant;

    EffectOutcome {
        job_effect: participants * success * 0.6,
        wage_effect: success * 0.3,
        lfpr_effect: cx.share_of_adults(participants) * 0.3,
        annual_cost,
        economic_impact_annual: annual_cost * cx.constants.fiscal_multiplier,
        participants,
    }
}

fn wage_subsidy(cx: &EffectContext<'_>) -> EffectOutcome {
    let percent = cx.n("subsidy_percent");
    let rate = percent / 100.0;
    let eligible = cx.covered_employment("target_sectors") * 0.3;
    let participants = eligible * 0.6;
    let subsidized_wage = cx.market.average_hourly_wage.min(cx.n("wage_cap_hourly"));
    let annual_cost = participants * subsidized_wage * cx.constants.annual_hours * rate;

    EffectOutcome {
        job_effect: participants * rate * 0.1,
        wage_effect: percent * 0.05,
        lfpr_effect: percent * 0.01,
        annual_cost,
        economic_impact_annual: annual_cost * cx.constants.fiscal_multiplier,
        participants,
    }
}

fn reduced_workweek(cx: &EffectContext<'_>) -> EffectOutcome {
    let reduction = ((40.0 - cx.n("target_hours")) / 40.0).max(0.0);
    let maintenance = cx.pct("wage_maintenance_percent");
    let phase_in = cx.n("phase_in_years").max(1.0);
    let phase = ((cx.years_active + 1.0) / phase_in).min(1.0);
    let coverage = if cx.params.flag("exempt_small_business") { 0.7 } else { 1.0 };

    let covered = cx.market.employment * coverage;
    let wage_bill = covered * cx.annual_wage();

    EffectOutcome {
        job_effect: covered * reduction * 0.1 * phase,
        wage_effect: reduction * maintenance * 2.0 * phase,
        lfpr_effect: reduction * 0.5 * phase,
        // Public support for maintained pay above 80%.
        annual_cost: wage_bill * reduction * (maintenance - 0.8).max(0.0) * 0.1 * phase,
        economic_impact_annual: -wage_bill * reduction * 0.05 * phase,
        participants: covered * phase,
    }
}

fn automation_tax(cx: &EffectContext<'_>) -> EffectOutcome {
    let c = cx.constants;
    let percent = cx.n("tax_rate");
    let rate = percent / 100.0;
    let displaced = cx.market.cumulative_displaced;
    let revenue = displaced * cx.annual_wage() * 0.5 * rate;

    let use_of_revenue = cx.params.choice("revenue_use");
    let recycled_jobs = match use_of_revenue {
        "retraining" => revenue / 8_000.0 * 0.65 * 0.6,
        "ubi" => revenue * c.mpc_low_income * c.fiscal_multiplier / c.cost_per_job,
        _ => 0.0,
    };
    let general_fund = use_of_revenue == "general_fund";
    let spent_back = if general_fund { 0.0 } else { revenue * 0.8 * c.fiscal_multiplier * 0.5 };

    EffectOutcome {
        // Slower automation retains a share of the displaced.
        job_effect: displaced * rate * 0.5 + recycled_jobs,
        wage_effect: percent * 0.02,
        lfpr_effect: if use_of_revenue == "retraining" { 0.05 } else { 0.0 },
        annual_cost: -revenue * if general_fund { 1.0 } else { 0.2 },
        economic_impact_annual: -revenue * 0.3 + spent_back,
        participants: displaced,
    }
}

fn education_subsidy(cx: &EffectContext<'_>) -> EffectOutcome {
    let c = cx.constants;
    let coverage = cx.pct("tuition_coverage_percent");
    let students = c.postsecondary_students * (cx.n("income_cap_thousands") / 175.0).min(1.0);
    let annual_cost = students * c.average_tuition * coverage;
    // Graduates enter the market gradually over a four-year cycle.
    let ramp = (cx.years_active / 4.0 + 0.25).min(1.0);
    let maturity = (cx.years_active / 4.0).min(1.0);
    let premium = if cx.params.flag("stem_focus") { 0.4 } else { 0.25 };

    EffectOutcome {
        job_effect: students * coverage * 0.25 * ramp * 0.3,
        wage_effect: coverage * premium * maturity,
        lfpr_effect: -coverage * 0.1,
        annual_cost,
        economic_impact_annual: annual_cost * c.fiscal_multiplier * 0.8,
        participants: students,
    }
}

fn job_guarantee(cx: &EffectContext<'_>) -> EffectOutcome {
    let c = cx.constants;
    let wage = cx.n("wage_hourly");
    let all_seekers = cx.params.choice("eligibility") == "all_seekers";
    let participants = cx.market.unemployed() * if all_seekers { 1.3 } else { 1.0 } * 0.5;

    let benefits = if cx.params.flag("include_benefits") { 1.25 } else { 1.0 };
    let per_participant = wage * cx.n("hours_per_week") * 52.0 * benefits + 3_000.0;
    let annual_cost = participants * per_participant;

    EffectOutcome {
        job_effect: participants,
        wage_effect: (wage - 12.0).max(0.0) / 12.0 * 2.0,
        lfpr_effect: cx.share_of_adults(participants) * 0.4 * if all_seekers { 1.5 } else { 1.0 },
        annual_cost,
        economic_impact_annual: annual_cost * c.mpc_low_income * c.fiscal_multiplier,
        participants,
    }
}

fn portable_benefits(cx: &EffectContext<'_>) -> EffectOutcome {
    let c = cx.constants;
    let employer = cx.n("employer_contribution_percent");
    let government = cx.n("government_match_percent");
    let gig = if cx.params.flag("covers_gig_workers") { c.gig_workers } else { 0.0 };
    let covered = gig + 0.1 * cx.market.employment;
    let annual_cost = covered * 30_000.0 * government / 100.0;

    EffectOutcome {
        job_effect: covered * 0.01 - covered * employer / 100.0 * 0.05,
        wage_effect: -employer * 0.05,
        lfpr_effect: (employer + government) * 0.02,
        annual_cost,
        economic_impact_annual: annual_cost * c.mpc_general * c.fiscal_multiplier,
        participants: covered,
    }
}

fn transition_assistance(cx: &EffectContext<'_>) -> EffectOutcome {
    let c = cx.constants;
    let relocation = cx.params.flag("relocation_assistance");
    let monthly_inflow = cx.market.step_displaced * f64::from(cx.market.steps_per_year) / 12.0;
    let recipients = cx
        .market
        .cumulative_displaced
        .min(monthly_inflow * cx.n("duration_months"))
        * 0.8;

    let relocation_cost = if relocation { recipients * 0.2 * cx.n("relocation_amount") } else { 0.0 };
    let annual_cost = recipients * cx.n("monthly_benefit") * 12.0 + relocation_cost;

    EffectOutcome {
        job_effect: recipients * if relocation { 0.1 } else { 0.05 },
        wage_effect: if relocation { 0.15 } else { 0.1 },
        lfpr_effect: cx.share_of_adults(recipients) * 0.5,
        annual_cost,
        economic_impact_annual: annual_cost * c.mpc_low_income * c.fiscal_multiplier,
        participants: recipients,
    }
}

fn negative_income_tax(cx: &EffectContext<'_>) -> EffectOutcome {
    let c = cx.constants;
    let threshold = cx.n("income_threshold_thousands");
    let percent = cx.n("nit_rate");
    let eligible = (c.low_income_adults() * threshold / 40.0).min(cx.adults());
    let benefit = threshold * 1_000.0 * 0.4 * percent / 100.0;
    let annual_cost = eligible * benefit;
    let economic_impact_annual = annual_cost * c.mpc_low_income * c.fiscal_multiplier;

    EffectOutcome {
        job_effect: economic_impact_annual / c.cost_per_job * 0.15,
        wage_effect: percent * 0.005,
        lfpr_effect: -(percent / 100.0) * 0.5,
        annual_cost,
        economic_impact_annual,
        participants: eligible,
    }
}

fn sectoral_bargaining(cx: &EffectContext<'_>) -> EffectOutcome {
    let increase = cx.n("wage_floor_increase");
    let covered = cx.covered_employment("target_sectors") * cx.pct("coverage_percent");
    let employment = cx.market.employment;
    let wage_effect = if employment > 0.0 { increase * covered / employment * 0.5 } else { 0.0 };

    EffectOutcome {
        job_effect: -covered * increase / 100.0 * 0.1,
        wage_effect,
        lfpr_effect: increase * 0.01,
        // Administration of the sector councils.
        annual_cost: covered * 20.0,
        economic_impact_annual: covered * cx.annual_wage() * increase / 100.0 * 0.3 * cx.constants.mpc_general,
        participants: covered,
    }
}

fn ai_licensing(cx: &EffectContext<'_>) -> EffectOutcome {
    let fee = cx.pct("license_fee_percent");
    let share = cx.pct("revenue_sharing_percent");
    let wage_bill = cx.market.employment * cx.annual_wage();
    let ai_value = wage_bill * cx.market.adoption_rate / 100.0 * 0.05;
    let revenue = ai_value * fee;
    let redistributed = revenue * share;
    let assessment = if cx.params.flag("worker_impact_assessment") { 2.0 } else { 1.0 };

    EffectOutcome {
        job_effect: cx.market.cumulative_displaced * fee * assessment * 0.5,
        wage_effect: if wage_bill > 0.0 { redistributed / wage_bill * 100.0 } else { 0.0 },
        lfpr_effect: 0.0,
        annual_cost: -(revenue - redistributed),
        economic_impact_annual: -revenue * 0.2 + redistributed * cx.constants.mpc_general,
        participants: 0.0,
    }
}

/// Annual per-capita cost of each provided service.
fn service_cost(service: &str) -> f64 {
    match service {
        "healthcare" => 3_000.0,
        "housing" => 2_400.0,
        "transportation" => 600.0,
        "education" => 800.0,
        "internet" => 300.0,
        _ => 0.0,
    }
}

fn universal_basic_services(cx: &EffectContext<'_>) -> EffectOutcome {
    let c = cx.constants;
    let services = cx.params.list("services");
    let coverage = cx.pct("coverage_percent");
    let per_capita: f64 = services.iter().map(|s| service_cost(s)).sum();
    let participants = cx.adults() * coverage;
    let annual_cost = participants * per_capita;
    let count = services.len() as f64;

    EffectOutcome {
        job_effect: annual_cost / c.cost_per_job * 0.2,
        wage_effect: count * 0.05 * coverage,
        lfpr_effect: count * 0.1 * coverage,
        annual_cost,
        economic_impact_annual: annual_cost * c.fiscal_multiplier,
        participants,
    }
}

fn worker_ownership(cx: &EffectContext<'_>) -> EffectOutcome {
    let c = cx.constants;
    let small = c.small_firms * c.small_firm_size;
    let medium = c.medium_firms * c.medium_firm_size;
    let firm_employment = match cx.params.choice("target_firm_size") {
        "small" => small,
        "medium" => medium,
        _ => small + medium,
    };
    let conversion = cx.n("conversion_rate_target");
    let incentive = cx.n("tax_incentive_percent");
    let ramp = ((cx.years_active + 1.0) / 5.0).min(1.0);
    let covered = firm_employment * conversion / 100.0 * ramp;

    EffectOutcome {
        job_effect: covered * 0.03,
        wage_effect: conversion * 0.05 * incentive / 20.0,
        lfpr_effect: 0.0,
        annual_cost: covered * cx.annual_wage() * 0.05 * incentive / 100.0,
        economic_impact_annual: covered * cx.annual_wage() * 0.04,
        participants: covered,
    }
}

fn gig_economy_regulation(cx: &EffectContext<'_>) -> EffectOutcome {
    let c = cx.constants;
    let minimum = cx.n("minimum_earnings_hourly");
    let floor_increase = (minimum - 15.0).max(0.0) / 15.0;
    let reclassified = match cx.params.choice("classification_test") {
        "abc_test" => 0.4,
        "status_quo" => 0.0,
        _ => 0.25,
    };
    let benefits = if cx.params.flag("benefits_required") { 0.05 } else { 0.02 };
    let employment = cx.market.employment;
    let wage_effect = if employment > 0.0 {
        floor_increase * 100.0 * c.gig_workers / employment * 0.5
    } else {
        0.0
    };

    EffectOutcome {
        job_effect: -c.gig_workers * floor_increase * 0.1 - c.gig_workers * reclassified * benefits,
        wage_effect,
        lfpr_effect: floor_increase * 0.2 + reclassified * 0.1,
        annual_cost: 5e8,
        economic_impact_annual: c.gig_workers * 1_000.0 * minimum * floor_increase * c.mpc_general,
        participants: c.gig_workers,
    }
}

fn skills_immigration(cx: &EffectContext<'_>) -> EffectOutcome {
    let visas = cx.n("annual_visas");
    let workers = visas * (cx.years_active + 1.0).min(5.0);
    let threshold = cx.params.choice("skill_threshold");
    let complementarity = match threshold {
        "high" => 1.2,
        "mid" => 1.0,
        _ => 0.9,
    };
    let targeted = if cx.params.list("target_sectors").is_empty() { 1.0 } else { 1.1 };
    let annual_wage = cx.annual_wage();

    EffectOutcome {
        job_effect: workers * complementarity * targeted,
        wage_effect: -visas / 100_000.0 * 0.05 + if threshold == "high" { 0.05 } else { 0.0 },
        lfpr_effect: cx.share_of_adults(workers) * 0.7,
        // Tax paid by the new workers.
        annual_cost: -workers * annual_wage * 0.2,
        economic_impact_annual: workers * annual_wage * 1.2,
        participants: workers,
    }
}

fn public_private_partnership(cx: &EffectContext<'_>) -> EffectOutcome {
    let public = cx.n("public_funding_billions") * 1e9;
    let total = public * (1.0 + cx.n("private_match_ratio"));
    let participants = total / 10_000.0;
    let placement = if cx.params.flag("apprenticeship_component") { 0.85 } else { 0.75 };
    let focus = if cx.params.list("industry_focus").is_empty() { 1.0 } else { 1.2 };

    EffectOutcome {
        job_effect: participants * placement * 0.6,
        wage_effect: 0.25 * focus,
        lfpr_effect: cx.share_of_adults(participants) * 0.3,
        annual_cost: public,
        economic_impact_annual: total * cx.constants.fiscal_multiplier,
        participants,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::definition;
    use crate::schema::ParamValue;

    fn sectors() -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("manufacturing".to_string(), 12_000_000.0),
            ("finance".to_string(), 6_000_000.0),
        ])
    }

    fn market(sector_employment: &BTreeMap<String, f64>) -> MarketView<'_> {
        MarketView {
            employment: 160_000_000.0,
            labor_force: 166_840_000.0,
            participation_rate: 62.5,
            average_hourly_wage: 34.5,
            adoption_rate: 40.0,
            cumulative_displaced: 2_000_000.0,
            step_displaced: 50_000.0,
            sector_employment,
            steps_per_year: 12,
        }
    }

    fn outcome(kind: InterventionKind, overrides: &[(&str, ParamValue)], years_active: f64) -> EffectOutcome {
        let overrides = overrides.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
        let params = ResolvedParams::resolve(definition(kind).parameters, &overrides).unwrap();
        let sectors = sectors();
        let market = market(&sectors);
        let constants = DemographicConstants::default();
        let cx = EffectContext {
            market: &market,
            constants: &constants,
            params: &params,
            years_active,
        };
        evaluate(kind, &cx)
    }

    #[test]
    fn ubi_costs_money_and_lowers_participation() {
        let o = outcome(InterventionKind::Ubi, &[], 0.0);
        // 210M * 0.78 adults * $12,000 a year.
        assert!((o.annual_cost - 163_800_000.0 * 12_000.0).abs() < 1.0);
        assert!((o.lfpr_effect + 0.8).abs() < 1e-12);
        assert!(o.job_effect > 0.0);

        let deficit = outcome(InterventionKind::Ubi, &[("funding_mechanism", "deficit".into())], 0.0);
        assert!(deficit.economic_impact_annual > o.economic_impact_annual);
    }

    #[test]
    fn zero_ubi_is_inert() {
        let o = outcome(InterventionKind::Ubi, &[("monthly_amount", ParamValue::Number(0.0))], 0.0);
        assert_eq!(o.annual_cost, 0.0);
        assert_eq!(o.job_effect, 0.0);
        assert_eq!(o.lfpr_effect, 0.0);
    }

    #[test]
    fn retraining_is_bounded_by_budget() {
        let o = outcome(InterventionKind::JobRetraining, &[], 0.0);
        // $10B at $8,000 per participant funds 1.25M, below the 2M displaced pool.
        assert!((o.participants - 1_250_000.0).abs() < 1e-6);
        assert!((o.job_effect - 1_250_000.0 * 0.65 * 0.6).abs() < 1e-6);
    }

    #[test]
    fn revenue_raisers_have_negative_cost() {
        for kind in [InterventionKind::AutomationTax, InterventionKind::AiLicensing, InterventionKind::SkillsImmigration] {
            let o = outcome(kind, &[], 1.0);
            assert!(o.annual_cost < 0.0, "{kind} should raise revenue");
        }
    }

    #[test]
    fn phased_programs_ramp_with_time() {
        let early = outcome(InterventionKind::ReducedWorkweek, &[], 0.0);
        let later = outcome(InterventionKind::ReducedWorkweek, &[], 3.0);
        assert!(later.job_effect > early.job_effect);

        let first = outcome(InterventionKind::SkillsImmigration, &[], 0.0);
        let capped = outcome(InterventionKind::SkillsImmigration, &[], 10.0);
        assert!((capped.participants - 5.0 * first.participants).abs() < 1e-6);
    }

    #[test]
    fn wage_subsidy_targets_listed_sectors() {
        let all = outcome(InterventionKind::WageSubsidy, &[], 0.0);
        let targeted = outcome(
            InterventionKind::WageSubsidy,
            &[("target_sectors", ParamValue::List(vec!["finance".to_string()]))],
            0.0,
        );
        assert!((targeted.participants - 6_000_000.0 * 0.3 * 0.6).abs() < 1e-6);
        assert!(targeted.annual_cost < all.annual_cost);
    }

    #[test]
    fn basic_services_scale_with_selection() {
        let none = outcome(InterventionKind::UniversalBasicServices, &[("services", ParamValue::List(vec![]))], 0.0);
        assert_eq!(none.annual_cost, 0.0);
        let health = outcome(
            InterventionKind::UniversalBasicServices,
            &[("services", ParamValue::List(vec!["healthcare".to_string()]))],
            0.0,
        );
        assert!((health.annual_cost - 163_800_000.0 * 3_000.0).abs() < 1.0);
    }

    #[test]
    fn every_kind_yields_finite_values_at_defaults() {
        for kind in InterventionKind::ALL {
            let o = outcome(kind, &[], 2.0);
            for v in [o.job_effect, o.wage_effect, o.lfpr_effect, o.annual_cost, o.economic_impact_annual] {
                assert!(v.is_finite(), "{kind} produced {v}");
            }
        }
    }

    mod proptest_tests {
        use super::*;
        use crate::schema::ParamKind;
        use proptest::prelude::*;

        proptest! {
            /// Property: every kind stays finite anywhere inside its numeric bounds.
            #[test]
            fn outcomes_are_finite_across_parameter_ranges(
                kind in prop::sample::select(InterventionKind::ALL.to_vec()),
                fractions in prop::collection::vec(0.0f64..=1.0, 8),
                years_active in 0.0f64..15.0,
            ) {
                let overrides: Vec<(&str, ParamValue)> = definition(kind)
                    .parameters
                    .iter()
                    .zip(fractions.iter().cycle())
                    .filter_map(|(spec, t)| match spec.kind {
                        ParamKind::Number { min, max, .. } => {
                            Some((spec.key, ParamValue::Number((min + t * (max - min)).clamp(min, max))))
                        }
                        _ => None,
                    })
                    .collect();
                let o = outcome(kind, &overrides, years_active);
                for v in [o.job_effect, o.wage_effect, o.lfpr_effect, o.annual_cost, o.economic_impact_annual, o.participants] {
                    prop_assert!(v.is_finite(), "{} produced {}", kind, v);
                }
                prop_assert!(o.participants >= 0.0);
            }
        }
    }
}
