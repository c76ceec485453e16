//! Baseline labor-market snapshot and its normalization from provider JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use laborsim_core::SimResult;

const DEFAULT_AI_ADOPTION: f64 = 35.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaborMarketSnapshot {
    pub total_employment: f64,
    pub unemployment_rate: f64,
    pub labor_force_participation: f64,
    pub job_openings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WageSnapshot {
    pub average_hourly: f64,
    pub median_weekly: f64,
    pub real_wage_growth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductivitySnapshot {
    pub growth_rate: f64,
    pub output_per_hour: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorSnapshot {
    pub employment: u64,
    /// Share of the sector's work that is automatable, 0..1.
    pub automation_exposure: f64,
}

/// Canonical baseline the engine reads from. Never mutated by a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineSnapshot {
    pub labor_market: LaborMarketSnapshot,
    pub wages: WageSnapshot,
    pub productivity: ProductivitySnapshot,
    pub sectors: BTreeMap<String, SectorSnapshot>,
    pub ai_adoption: f64,
}

/// AI adoption indicator in any of the shapes data providers emit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AiIndicator {
    Flat(f64),
    Current { current_rate: f64 },
    Rate { rate: f64 },
}

impl AiIndicator {
    pub fn rate(self) -> f64 {
        match self {
            AiIndicator::Flat(rate) | AiIndicator::Current { current_rate: rate } | AiIndicator::Rate { rate } => rate,
        }
    }
}

/// Baseline as delivered by a provider, before normalization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawBaselineSnapshot {
    pub labor_market: LaborMarketSnapshot,
    pub wages: WageSnapshot,
    pub productivity: ProductivitySnapshot,
    #[serde(default)]
    pub sectors: BTreeMap<String, SectorSnapshot>,
    #[serde(default)]
    pub ai_adoption: Option<AiIndicator>,
}

impl From<RawBaselineSnapshot> for BaselineSnapshot {
    fn from(raw: RawBaselineSnapshot) -> Self {
        let ai_adoption = match raw.ai_adoption {
            Some(indicator) => indicator.rate().clamp(0.0, 100.0),
            None => {
                tracing::warn!(default = DEFAULT_AI_ADOPTION, "baseline has no AI adoption indicator, using default");
                DEFAULT_AI_ADOPTION
            }
        };
        Self {
            labor_market: raw.labor_market,
            wages: raw.wages,
            productivity: raw.productivity,
            sectors: raw.sectors,
            ai_adoption,
        }
    }
}

impl BaselineSnapshot {
    /// Parse provider JSON and normalize it.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let raw: RawBaselineSnapshot = serde_json::from_str(json)?;
        Ok(raw.into())
    }

    /// Built-in US-like reference baseline.
    pub fn reference() -> Self {
        let sector = |employment: u64, automation_exposure: f64| SectorSnapshot {
            employment,
            automation_exposure,
        };
        Self {
            labor_market: LaborMarketSnapshot {
                total_employment: 160_000_000.0,
                unemployment_rate: 4.1,
                labor_force_participation: 62.5,
                job_openings: 8_500_000.0,
            },
            wages: WageSnapshot {
                average_hourly: 34.5,
                median_weekly: 1_150.0,
                real_wage_growth: 1.2,
            },
            productivity: ProductivitySnapshot {
                growth_rate: 1.5,
                output_per_hour: 75.0,
            },
            sectors: BTreeMap::from([
                ("manufacturing".to_string(), sector(12_900_000, 0.55)),
                ("retail".to_string(), sector(15_500_000, 0.60)),
                ("healthcare".to_string(), sector(21_000_000, 0.30)),
                ("finance".to_string(), sector(9_000_000, 0.50)),
                ("technology".to_string(), sector(6_000_000, 0.45)),
                ("education".to_string(), sector(13_500_000, 0.25)),
                ("construction".to_string(), sector(8_000_000, 0.25)),
                ("transportation".to_string(), sector(6_600_000, 0.60)),
            ]),
            ai_adoption: DEFAULT_AI_ADOPTION,
        }
    }

    pub fn sector_employment(&self) -> BTreeMap<String, f64> {
        self.sectors
            .iter()
            .map(|(id, s)| (id.clone(), s.employment as f64))
            .collect()
    }
}
