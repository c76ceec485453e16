//! Input-output ripple propagation of sector employment shocks.
//!
//! Upstream (supplier) effects follow the source row of [`INPUT_OUTPUT`];
//! downstream (customer) effects follow the source column.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tables::{INPUT_OUTPUT, Sector};

const SUPPLIER_PASS_THROUGH: f64 = 0.5;
const CUSTOMER_PASS_THROUGH: f64 = 0.3;
/// Effects at or below this many jobs are dropped as noise.
const MIN_EFFECT_JOBS: f64 = 100.0;

const HIGH_CASCADE_SHARE: f64 = 0.75;
const MEDIUM_CASCADE_SHARE: f64 = 0.5;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CascadeRisk {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RippleEffects {
    pub source: Sector,
    pub direct: f64,
    pub indirect: BTreeMap<Sector, f64>,
    pub induced: BTreeMap<Sector, f64>,
    pub total_indirect: f64,
    pub total_induced: f64,
    pub multiplier: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomyWideEffects {
    pub ripples: Vec<RippleEffects>,
    /// Direct shock plus every ripple received, per sector id.
    pub sector_effects: BTreeMap<String, f64>,
    pub total_direct: f64,
    pub total_indirect: f64,
    pub total_induced: f64,
    pub total_effect: f64,
    /// Output change in $M implied by sector employment intensity.
    pub output_impact_millions: f64,
    pub cascade_risk: CascadeRisk,
}

#[derive(Debug, Clone, Default)]
pub struct SectorInterdependencyModel;

impl SectorInterdependencyModel {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_ripple_effects(&self, source: Sector, direct_impact: f64) -> RippleEffects {
        let row = source as usize;
        let mut indirect = BTreeMap::new();
        let mut induced = BTreeMap::new();

        for target in Sector::ALL {
            let col = target as usize;
            let upstream = direct_impact * INPUT_OUTPUT[row][col] * SUPPLIER_PASS_THROUGH;
            if upstream.abs() > MIN_EFFECT_JOBS {
                indirect.insert(target, upstream);
            }
            let downstream = direct_impact * INPUT_OUTPUT[col][row] * CUSTOMER_PASS_THROUGH;
            if downstream.abs() > MIN_EFFECT_JOBS {
                induced.insert(target, downstream);
            }
        }

        let total_indirect: f64 = indirect.values().sum();
        let total_induced: f64 = induced.values().sum();
        let multiplier = source.ripple_multiplier();

        RippleEffects {
            source,
            direct: direct_impact,
            indirect,
            induced,
            total_indirect,
            total_induced,
            multiplier,
            total: (direct_impact + total_indirect + total_induced) * multiplier,
        }
    }

    /// Aggregate ripples for every shocked sector.
    ///
    /// Sector ids without an input-output row contribute their direct impact
    /// only.
    pub fn calculate_economy_wide_effects(&self, direct_by_sector: &BTreeMap<String, f64>) -> EconomyWideEffects {
        let mut ripples = Vec::new();
        let mut sector_effects: BTreeMap<String, f64> = BTreeMap::new();
        let mut total_effect = 0.0;
        let mut output_impact_millions = 0.0;

        for (id, direct) in direct_by_sector {
            *sector_effects.entry(id.clone()).or_default() += direct;
            match Sector::from_id(id) {
                Some(source) => {
                    let ripple = self.calculate_ripple_effects(source, *direct);
                    for (target, effect) in ripple.indirect.iter().chain(ripple.induced.iter()) {
                        *sector_effects.entry(target.id().to_string()).or_default() += effect;
                        output_impact_millions += effect / target.employment_intensity();
                    }
                    output_impact_millions += direct / source.employment_intensity();
                    total_effect += ripple.total;
                    ripples.push(ripple);
                }
                None => total_effect += direct,
            }
        }

        let total_direct: f64 = direct_by_sector.values().sum();
        let total_indirect: f64 = ripples.iter().map(|r| r.total_indirect).sum();
        let total_induced: f64 = ripples.iter().map(|r| r.total_induced).sum();

        EconomyWideEffects {
            cascade_risk: cascade_risk(&ripples),
            ripples,
            sector_effects,
            total_direct,
            total_indirect,
            total_induced,
            total_effect,
            output_impact_millions,
        }
    }
}

/// Share of negative magnitude among all indirect and induced effects.
fn cascade_risk(ripples: &[RippleEffects]) -> CascadeRisk {
    let (negative, magnitude) = ripples
        .iter()
        .flat_map(|r| r.indirect.values().chain(r.induced.values()))
        .fold((0.0_f64, 0.0_f64), |(neg, mag), e| {
            (if *e < 0.0 { neg - e } else { neg }, mag + e.abs())
        });
    if magnitude == 0.0 {
        return CascadeRisk::Low;
    }
    let share = negative / magnitude;
    if share > HIGH_CASCADE_SHARE {
        CascadeRisk::High
    } else if share > MEDIUM_CASCADE_SHARE {
        CascadeRisk::Medium
    } else {
        CascadeRisk::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_splits_upstream_and_downstream() {
        let model = SectorInterdependencyModel::new();
        let r = model.calculate_ripple_effects(Sector::Manufacturing, -100_000.0);
        // Manufacturing buys 8% from transportation.
        assert!((r.indirect[&Sector::Transportation] + 100_000.0 * 0.08 * 0.5).abs() < 1e-6);
        // Construction buys 35% from manufacturing.
        assert!((r.induced[&Sector::Construction] + 100_000.0 * 0.35 * 0.3).abs() < 1e-6);
        let expected = (r.direct + r.total_indirect + r.total_induced) * 1.8;
        assert!((r.total - expected).abs() < 1e-6);
    }

    #[test]
    fn small_effects_are_filtered() {
        let model = SectorInterdependencyModel::new();
        let r = model.calculate_ripple_effects(Sector::Education, -5_000.0);
        assert!(r.indirect.values().all(|e| e.abs() > 100.0));
        assert!(r.induced.values().all(|e| e.abs() > 100.0));
        // 5,000 * 0.02 * 0.3 = 30 jobs into finance is noise.
        assert!(!r.induced.contains_key(&Sector::Finance));
    }

    #[test]
    fn economy_wide_cascade_risk() {
        let model = SectorInterdependencyModel::new();
        let all_negative = BTreeMap::from([
            ("manufacturing".to_string(), -200_000.0),
            ("retail".to_string(), -150_000.0),
        ]);
        let e = model.calculate_economy_wide_effects(&all_negative);
        assert_eq!(e.cascade_risk, CascadeRisk::High);
        assert!(e.total_effect < e.total_direct);
        assert!(e.output_impact_millions < 0.0);

        let mixed = BTreeMap::from([
            ("manufacturing".to_string(), -200_000.0),
            ("technology".to_string(), 200_000.0),
        ]);
        assert_ne!(model.calculate_economy_wide_effects(&mixed).cascade_risk, CascadeRisk::High);

        let empty = model.calculate_economy_wide_effects(&BTreeMap::new());
        assert_eq!(empty.cascade_risk, CascadeRisk::Low);
    }

    #[test]
    fn unknown_sectors_pass_through_direct() {
        let model = SectorInterdependencyModel::new();
        let e = model.calculate_economy_wide_effects(&BTreeMap::from([("mining".to_string(), -1_000.0)]));
        assert!(e.ripples.is_empty());
        assert_eq!(e.total_effect, -1_000.0);
        assert_eq!(e.sector_effects["mining"], -1_000.0);
    }
}
