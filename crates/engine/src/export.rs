//! JSON and CSV renderings of a run.

use core::str::FromStr;

use serde::Serialize;

use laborsim_core::{SimError, SimResult};

use crate::engine::SimulationResult;
use crate::scenario::Scenario;
use crate::summary::SimulationSummary;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(SimError::validation(format!("unsupported export format `{other}`"))),
        }
    }
}

#[derive(Serialize)]
struct FullExport<'a> {
    scenario: &'a Scenario,
    results: &'a [SimulationResult],
    summary: &'a SimulationSummary,
}

#[derive(Serialize)]
struct CsvRow {
    year: f64,
    ai_adoption_pct: f64,
    unemployment_pct: f64,
    total_employment: f64,
    job_openings: f64,
    avg_hourly_wage: f64,
    productivity_growth_pct: f64,
    cumulative_displaced: f64,
    cumulative_new_jobs: f64,
}

pub(crate) fn to_json(
    scenario: &Scenario,
    results: &[SimulationResult],
    summary: &SimulationSummary,
) -> SimResult<String> {
    Ok(serde_json::to_string_pretty(&FullExport {
        scenario,
        results,
        summary,
    })?)
}

/// One row per step; `year` is fractional (start year plus elapsed steps).
pub(crate) fn to_csv(scenario: &Scenario, results: &[SimulationResult]) -> SimResult<String> {
    let steps_per_year = f64::from(scenario.timeframe.steps_per_year.max(1));
    let mut writer = csv::Writer::from_writer(Vec::new());

    for r in results {
        let s = &r.state;
        writer
            .serialize(CsvRow {
                year: f64::from(scenario.timeframe.start_year) + f64::from(r.step) / steps_per_year,
                ai_adoption_pct: s.ai.adoption_rate,
                unemployment_pct: s.labor_market.unemployment_rate,
                total_employment: s.labor_market.total_employment,
                job_openings: s.labor_market.job_openings,
                avg_hourly_wage: s.wages.average_hourly,
                productivity_growth_pct: s.productivity.growth_rate,
                cumulative_displaced: s.ai.cumulative_displaced,
                cumulative_new_jobs: s.ai.cumulative_new_jobs,
            })
            .map_err(|e| SimError::serialization(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SimError::serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SimError::serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_parse_case_insensitively() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
