//! Regional distribution of a national impact, plus inter-region migration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::manager::NationalImpact;
use crate::tables::Region;

const WAGE_PULL_WEIGHT: f64 = 0.3;
const JOB_PULL_WEIGHT: f64 = 0.4;
const BASE_MOBILITY_RATE: f64 = 0.02;
const MOVING_COST_FRICTION: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalImpact {
    pub region: Region,
    pub sector_impacts: BTreeMap<String, f64>,
    pub net_change: f64,
    pub employment: f64,
    /// Net change as a percent of regional employment.
    pub impact_pct: f64,
    pub vulnerability_index: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationFlow {
    pub origin: Region,
    pub destination: Region,
    pub pull_factor: f64,
    pub workers: f64,
}

#[derive(Debug, Clone, Default)]
pub struct RegionalLaborMarketModel;

impl RegionalLaborMarketModel {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_regional_impact(&self, national: &NationalImpact, region: Region) -> RegionalImpact {
        let profile = region.profile();
        let sector_impacts: BTreeMap<String, f64> = national
            .sector_net_change
            .iter()
            .map(|(sector, net)| {
                let scaled =
                    net * profile.concentration(sector) * profile.adoption_speed * profile.employment_share;
                (sector.clone(), scaled)
            })
            .collect();

        let net_change: f64 = sector_impacts.values().sum();
        let employment = national.total_employment * profile.employment_share;
        let impact_pct = if employment > 0.0 {
            net_change / employment * 100.0
        } else {
            0.0
        };

        RegionalImpact {
            region,
            sector_impacts,
            net_change,
            employment,
            impact_pct,
            vulnerability_index: (1.0 - profile.tech_concentration) * (-impact_pct).max(0.0),
        }
    }

    pub fn calculate_all_regions(&self, national: &NationalImpact) -> Vec<RegionalImpact> {
        Region::ALL
            .into_iter()
            .map(|r| self.calculate_regional_impact(national, r))
            .collect()
    }

    /// Worker flows between every ordered region pair with a positive pull,
    /// largest first.
    pub fn calculate_migration_flows(&self, impacts: &[RegionalImpact]) -> Vec<MigrationFlow> {
        let mut flows = Vec::new();
        for origin in impacts {
            for destination in impacts {
                if origin.region == destination.region {
                    continue;
                }
                let wage_diff =
                    destination.region.profile().real_wage_index() - origin.region.profile().real_wage_index();
                let job_diff = (destination.impact_pct - origin.impact_pct) / 100.0;
                let pull_factor = wage_diff * WAGE_PULL_WEIGHT + job_diff * JOB_PULL_WEIGHT;
                if pull_factor <= 0.0 {
                    continue;
                }
                flows.push(MigrationFlow {
                    origin: origin.region,
                    destination: destination.region,
                    pull_factor,
                    workers: origin.employment * BASE_MOBILITY_RATE * pull_factor * (1.0 - MOVING_COST_FRICTION),
                });
            }
        }
        flows.sort_by(|a, b| b.workers.total_cmp(&a.workers));
        flows
    }

    /// Coefficient of variation of regional net change (0 when the mean is 0).
    pub fn divergence_index(&self, impacts: &[RegionalImpact]) -> f64 {
        if impacts.is_empty() {
            return 0.0;
        }
        let n = impacts.len() as f64;
        let mean = impacts.iter().map(|r| r.net_change).sum::<f64>() / n;
        if mean == 0.0 {
            return 0.0;
        }
        let variance = impacts.iter().map(|r| (r.net_change - mean).powi(2)).sum::<f64>() / n;
        variance.sqrt() / mean.abs()
    }

    /// Employment-weighted mean vulnerability across regions.
    pub fn vulnerability_index(&self, impacts: &[RegionalImpact]) -> f64 {
        let employment: f64 = impacts.iter().map(|r| r.employment).sum();
        if employment <= 0.0 {
            return 0.0;
        }
        impacts.iter().map(|r| r.vulnerability_index * r.employment).sum::<f64>() / employment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn national(net: f64) -> NationalImpact {
        NationalImpact {
            sector_net_change: BTreeMap::from([
                ("manufacturing".to_string(), net),
                ("technology".to_string(), net / 2.0),
            ]),
            total_employment: 160_000_000.0,
        }
    }

    #[test]
    fn regional_impact_scales_by_concentration_speed_and_share() {
        let model = RegionalLaborMarketModel::new();
        let r = model.calculate_regional_impact(&national(-100_000.0), Region::Midwest);
        let expected_mfg = -100_000.0 * 1.4 * 0.90 * 0.21;
        assert!((r.sector_impacts["manufacturing"] - expected_mfg).abs() < 1e-6);
        assert!(r.vulnerability_index > 0.0);
        assert!((r.employment - 160_000_000.0 * 0.21).abs() < 1e-3);
    }

    #[test]
    fn migration_flows_are_positive_and_sorted() {
        let model = RegionalLaborMarketModel::new();
        let impacts = model.calculate_all_regions(&national(-500_000.0));
        let flows = model.calculate_migration_flows(&impacts);
        assert!(!flows.is_empty());
        assert!(flows.iter().all(|f| f.workers > 0.0 && f.origin != f.destination));
        assert!(flows.windows(2).all(|w| w[0].workers >= w[1].workers));
    }

    #[test]
    fn divergence_guards_zero_mean() {
        let model = RegionalLaborMarketModel::new();
        let impacts = model.calculate_all_regions(&national(0.0));
        assert_eq!(model.divergence_index(&impacts), 0.0);

        let impacts = model.calculate_all_regions(&national(-250_000.0));
        assert!(model.divergence_index(&impacts) > 0.0);
    }
}
