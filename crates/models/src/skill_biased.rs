//! Skill-biased technical change across high/mid/low skill tiers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tables::SkillTier;

const P90_MULTIPLIER: f64 = 1.25;
const P10_MULTIPLIER: f64 = 0.7;

// Annual transition rates between tiers.
const LOW_TO_MID: f64 = 0.03;
const MID_TO_HIGH: f64 = 0.02;
const MID_TO_LOW: f64 = 0.015;
const HIGH_TO_MID: f64 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillPremium {
    /// Net productivity effect before elasticity.
    pub effect: f64,
    /// Wage change in percent.
    pub wage_change: f64,
    /// Employment change as a fraction.
    pub employment_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillPremiums {
    pub high: SkillPremium,
    pub mid: SkillPremium,
    pub low: SkillPremium,
}

impl SkillPremiums {
    pub fn get(&self, tier: SkillTier) -> &SkillPremium {
        match tier {
            SkillTier::High => &self.high,
            SkillTier::Mid => &self.mid,
            SkillTier::Low => &self.low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierEmployment {
    pub employment: f64,
    pub share: f64,
    /// Average annual wage (USD).
    pub avg_wage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDistribution {
    pub high: TierEmployment,
    pub mid: TierEmployment,
    pub low: TierEmployment,
}

impl SkillDistribution {
    pub fn get(&self, tier: SkillTier) -> &TierEmployment {
        match tier {
            SkillTier::High => &self.high,
            SkillTier::Mid => &self.mid,
            SkillTier::Low => &self.low,
        }
    }

    pub fn get_mut(&mut self, tier: SkillTier) -> &mut TierEmployment {
        match tier {
            SkillTier::High => &mut self.high,
            SkillTier::Mid => &mut self.mid,
            SkillTier::Low => &mut self.low,
        }
    }

    pub fn total_employment(&self) -> f64 {
        self.high.employment + self.mid.employment + self.low.employment
    }

    /// Recompute shares from employment counts.
    pub fn renormalize(&mut self) {
        let total = self.total_employment();
        for tier in SkillTier::ALL {
            let t = self.get_mut(tier);
            t.share = if total > 0.0 { t.employment / total } else { 0.0 };
        }
    }

    /// Scale every tier so the total matches `total_employment`, keeping shares.
    pub fn rescale_to(&mut self, total_employment: f64) {
        for tier in SkillTier::ALL {
            let t = self.get_mut(tier);
            t.employment = total_employment.max(0.0) * t.share;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InequalityMetrics {
    pub ratio_90_10: f64,
    pub ratio_90_50: f64,
    pub ratio_50_10: f64,
    /// High-skill wage premium over mid-skill, in percent.
    pub skill_premium: f64,
    /// `(high_share + low_share) / (2 · mid_share)`; 1.0 means balanced.
    pub polarization_index: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTransitions {
    /// Workers moved between tiers, keyed `"<from>_to_<to>"`.
    pub flows: BTreeMap<String, f64>,
    pub distribution: SkillDistribution,
}

#[derive(Debug, Clone, Default)]
pub struct SkillBiasedTechModel;

impl SkillBiasedTechModel {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_skill_premiums(&self, adoption_rate: f64, productivity_growth: f64) -> SkillPremiums {
        let factor = adoption_rate / 100.0;
        let premium = |tier: SkillTier| {
            let p = tier.profile();
            let effect = p.ai_complementarity * factor * productivity_growth
                - p.ai_substitutability * factor * p.substitution_decay;
            SkillPremium {
                effect,
                wage_change: effect * p.wage_elasticity,
                employment_change: p.employment_sensitivity * factor,
            }
        };

        SkillPremiums {
            high: premium(SkillTier::High),
            mid: premium(SkillTier::Mid),
            low: premium(SkillTier::Low),
        }
    }

    /// Employment and wages per tier for an economy of `total_employment`.
    ///
    /// `wage_scale` rescales the tier reference wages (1.0 = table values).
    pub fn calculate_employment_by_skill(
        &self,
        total_employment: f64,
        wage_scale: f64,
        adoption_rate: f64,
        productivity_growth: f64,
    ) -> SkillDistribution {
        let premiums = self.calculate_skill_premiums(adoption_rate, productivity_growth);
        let tier = |t: SkillTier| {
            let p = t.profile();
            let change = premiums.get(t);
            TierEmployment {
                employment: total_employment * p.workforce_share * (1.0 + change.employment_change),
                share: p.workforce_share,
                avg_wage: p.avg_wage * wage_scale * (1.0 + change.wage_change / 100.0),
            }
        };

        let mut distribution = SkillDistribution {
            high: tier(SkillTier::High),
            mid: tier(SkillTier::Mid),
            low: tier(SkillTier::Low),
        };
        distribution.renormalize();
        distribution
    }

    pub fn calculate_inequality_metrics(&self, distribution: &SkillDistribution) -> InequalityMetrics {
        let p90 = distribution.high.avg_wage * P90_MULTIPLIER;
        let p50 = distribution.mid.avg_wage;
        let p10 = distribution.low.avg_wage * P10_MULTIPLIER;
        let ratio = |a: f64, b: f64| if b > 0.0 { a / b } else { 0.0 };

        InequalityMetrics {
            ratio_90_10: ratio(p90, p10),
            ratio_90_50: ratio(p90, p50),
            ratio_50_10: ratio(p50, p10),
            skill_premium: ratio(distribution.high.avg_wage - p50, p50) * 100.0,
            polarization_index: ratio(
                distribution.high.share + distribution.low.share,
                2.0 * distribution.mid.share,
            ),
        }
    }

    /// Move workers between tiers over `period_fraction` of a year.
    ///
    /// Upward mobility scales with `intervention_strength`; downgrading
    /// scales with adoption. Total employment is conserved.
    pub fn calculate_skill_transitions(
        &self,
        distribution: &SkillDistribution,
        adoption_rate: f64,
        intervention_strength: f64,
        period_fraction: f64,
    ) -> SkillTransitions {
        let factor = adoption_rate / 100.0;
        let high = distribution.high.employment;
        let mid = distribution.mid.employment;
        let low = distribution.low.employment;

        let low_to_mid = low * LOW_TO_MID * intervention_strength * period_fraction;
        let mid_to_high = mid * MID_TO_HIGH * intervention_strength * period_fraction;
        let mid_to_low = mid * MID_TO_LOW * factor * period_fraction;
        let high_to_mid = high * HIGH_TO_MID * factor * period_fraction;

        let mut next = distribution.clone();
        next.high.employment = high + mid_to_high - high_to_mid;
        next.mid.employment = mid + low_to_mid + high_to_mid - mid_to_high - mid_to_low;
        next.low.employment = low + mid_to_low - low_to_mid;
        next.renormalize();

        let flows = BTreeMap::from([
            ("low_to_mid".to_string(), low_to_mid),
            ("mid_to_high".to_string(), mid_to_high),
            ("mid_to_low".to_string(), mid_to_low),
            ("high_to_mid".to_string(), high_to_mid),
        ]);

        SkillTransitions {
            flows,
            distribution: next,
        }
    }
}
