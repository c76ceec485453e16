//! Demographic and behavioral coefficients used by intervention formulas.
//!
//! These are region-specific assumptions (US-like reference values). They are
//! collected in one table so callers can override them from configuration
//! instead of editing formulas.

use serde::{Deserialize, Serialize};

/// Overridable coefficient table.
///
/// Deserializes with `#[serde(default)]`, so a partial JSON object only
/// replaces the fields it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemographicConstants {
    /// Total resident population.
    pub population: f64,
    /// Share of the population aged 18+.
    pub adult_share: f64,
    /// Share of adults in low-income households.
    pub low_income_share: f64,
    /// Marginal propensity to consume for low-income transfers.
    pub mpc_low_income: f64,
    /// Marginal propensity to consume for broad-based transfers.
    pub mpc_general: f64,
    /// Government spending multiplier.
    pub fiscal_multiplier: f64,
    /// Annual demand (USD) that supports one job.
    pub cost_per_job: f64,
    /// Paid hours per full-time year.
    pub annual_hours: f64,
    /// Enrolled post-secondary students.
    pub postsecondary_students: f64,
    /// Average annual tuition (USD).
    pub average_tuition: f64,
    /// Workers whose primary income is platform/gig work.
    pub gig_workers: f64,
    /// Number of small firms (< 50 employees).
    pub small_firms: f64,
    /// Average employees per small firm.
    pub small_firm_size: f64,
    /// Number of medium firms (50-499 employees).
    pub medium_firms: f64,
    /// Average employees per medium firm.
    pub medium_firm_size: f64,
}

impl DemographicConstants {
    /// Adult (18+) population.
    pub fn adult_population(&self) -> f64 {
        self.population * self.adult_share
    }

    /// Adults in low-income households.
    pub fn low_income_adults(&self) -> f64 {
        self.adult_population() * self.low_income_share
    }
}

impl Default for DemographicConstants {
    fn default() -> Self {
        Self {
            population: 210_000_000.0,
            adult_share: 0.78,
            low_income_share: 0.20,
            mpc_low_income: 0.90,
            mpc_general: 0.65,
            fiscal_multiplier: 1.5,
            cost_per_job: 85_000.0,
            annual_hours: 2_080.0,
            postsecondary_students: 19_000_000.0,
            average_tuition: 12_000.0,
            gig_workers: 16_000_000.0,
            small_firms: 5_500_000.0,
            small_firm_size: 10.0,
            medium_firms: 100_000.0,
            medium_firm_size: 200.0,
        }
    }
}
