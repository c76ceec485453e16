//! Extended Solow growth accounting with a separate AI-capital factor.
//!
//! Production: `Y = TFP · K^α · K_AI^β · L^(1-α-β)`.
//!
//! - α (physical capital share) is fixed for the lifetime of the model.
//! - β (AI capital share) is the only mutable state and follows adoption via
//!   [`SolowGrowthModel::update_ai_capital_share`].

use serde::{Deserialize, Serialize};

const DEFAULT_ALPHA: f64 = 0.30;
const DEFAULT_BETA: f64 = 0.08;
const BETA_FLOOR: f64 = 0.03;
const BETA_SLOPE: f64 = 0.20;
const BETA_CAP: f64 = 0.25;

#[derive(Debug, Clone, PartialEq)]
pub struct SolowGrowthModel {
    alpha: f64,
    beta: f64,
}

/// One period of a capital-accumulation projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapitalPath {
    pub period: u32,
    pub capital: f64,
    pub output: f64,
}

impl Default for SolowGrowthModel {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA, DEFAULT_BETA)
    }
}

impl SolowGrowthModel {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn ai_capital_share(&self) -> f64 {
        self.beta
    }

    /// Share of output paid to labor.
    pub fn labor_share(&self) -> f64 {
        1.0 - self.alpha - self.beta
    }

    /// Saturating monotone map from adoption (0..100) to β; returns the new β.
    pub fn update_ai_capital_share(&mut self, adoption_rate: f64) -> f64 {
        self.beta = (BETA_FLOOR + adoption_rate / 100.0 * BETA_SLOPE).min(BETA_CAP);
        self.beta
    }

    pub fn output(&self, tfp: f64, capital: f64, ai_capital: f64, labor: f64) -> f64 {
        tfp * capital.powf(self.alpha) * ai_capital.powf(self.beta) * labor.powf(self.labor_share())
    }

    /// Output per unit of labor.
    pub fn productivity(&self, tfp: f64, capital: f64, ai_capital: f64, labor: f64) -> f64 {
        if labor <= 0.0 {
            return 0.0;
        }
        self.output(tfp, capital, ai_capital, labor) / labor
    }

    /// `k* = (s / (δ + n + g))^(1 / (1 - α - β))`.
    pub fn steady_state_capital_ratio(
        &self,
        savings_rate: f64,
        depreciation: f64,
        population_growth: f64,
        tech_growth: f64,
    ) -> f64 {
        let effective = depreciation + population_growth + tech_growth;
        let labor_share = self.labor_share();
        if effective <= 0.0 || labor_share <= 0.0 {
            return 0.0;
        }
        (savings_rate / effective).powf(1.0 / labor_share)
    }

    pub fn marginal_product_labor(&self, output: f64, labor: f64) -> f64 {
        if labor <= 0.0 {
            return 0.0;
        }
        self.labor_share() * output / labor
    }

    pub fn marginal_product_ai_capital(&self, output: f64, ai_capital: f64) -> f64 {
        if ai_capital <= 0.0 {
            return 0.0;
        }
        self.beta * output / ai_capital
    }

    /// Project `K(t+1) = (1-δ)K(t) + sY(t)`, output compounding at `tech_growth`.
    ///
    /// The first entry is the initial condition (period 0).
    pub fn project_capital_accumulation(
        &self,
        initial_capital: f64,
        initial_output: f64,
        savings_rate: f64,
        depreciation: f64,
        tech_growth: f64,
        periods: u32,
    ) -> Vec<CapitalPath> {
        let mut path = Vec::with_capacity(periods as usize + 1);
        let mut capital = initial_capital;
        let mut output = initial_output;
        path.push(CapitalPath {
            period: 0,
            capital,
            output,
        });
        for period in 1..=periods {
            capital = (1.0 - depreciation) * capital + savings_rate * output;
            output *= 1.0 + tech_growth;
            path.push(CapitalPath {
                period,
                capital,
                output,
            });
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ai_capital_share_saturates() {
        let mut m = SolowGrowthModel::default();
        assert!((m.update_ai_capital_share(0.0) - 0.03).abs() < 1e-12);
        assert!((m.update_ai_capital_share(35.0) - 0.10).abs() < 1e-12);
        assert!((m.update_ai_capital_share(100.0) - 0.23).abs() < 1e-12);
        m = SolowGrowthModel::new(0.30, 0.08);
        assert_eq!(m.update_ai_capital_share(500.0), 0.25);
        assert!((m.labor_share() - 0.45).abs() < 1e-12);
    }

    #[test]
    fn output_is_constant_returns_to_scale() {
        let m = SolowGrowthModel::default();
        let y1 = m.output(1.0, 100.0, 10.0, 50.0);
        let y2 = m.output(1.0, 200.0, 20.0, 100.0);
        assert!((y2 / y1 - 2.0).abs() < 1e-9);
    }

    #[test]
    fn marginal_products_split_output_by_share() {
        let m = SolowGrowthModel::default();
        let y = m.output(1.2, 300.0, 20.0, 100.0);
        let labor_income = m.marginal_product_labor(y, 100.0) * 100.0;
        let ai_income = m.marginal_product_ai_capital(y, 20.0) * 20.0;
        assert!((labor_income / y - m.labor_share()).abs() < 1e-9);
        assert!((ai_income / y - m.ai_capital_share()).abs() < 1e-9);
        assert_eq!(m.marginal_product_labor(y, 0.0), 0.0);
    }

    #[test]
    fn steady_state_matches_closed_form() {
        let m = SolowGrowthModel::new(0.3, 0.1);
        let k = m.steady_state_capital_ratio(0.2, 0.05, 0.01, 0.02);
        let expected = (0.2f64 / 0.08).powf(1.0 / 0.6);
        assert!((k - expected).abs() < 1e-9);
        assert_eq!(m.steady_state_capital_ratio(0.2, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn capital_projection_follows_recurrence() {
        let m = SolowGrowthModel::default();
        let path = m.project_capital_accumulation(100.0, 50.0, 0.2, 0.05, 0.02, 3);
        assert_eq!(path.len(), 4);
        assert!((path[1].capital - (95.0 + 10.0)).abs() < 1e-9);
        assert!((path[1].output - 51.0).abs() < 1e-9);
        assert!((path[2].capital - (0.95 * 105.0 + 0.2 * 51.0)).abs() < 1e-9);
    }
}
