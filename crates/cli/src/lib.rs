//! File-driven simulation runs for the `laborsim` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, bail};

use laborsim_core::DemographicConstants;
use laborsim_engine::{BaselineSnapshot, ExportFormat, ScenarioConfig, SimulationEngine};

/// What the binary prints to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Output {
    Summary,
    Export(ExportFormat),
}

impl FromStr for Output {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "summary" => Ok(Output::Summary),
            "json" => Ok(Output::Export(ExportFormat::Json)),
            "csv" => Ok(Output::Export(ExportFormat::Csv)),
            other => bail!("LABORSIM_FORMAT must be summary, json or csv (got `{other}`)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Invocation {
    pub scenario_path: PathBuf,
    /// Provider baseline; the built-in reference baseline when absent.
    pub baseline_path: Option<PathBuf>,
    /// Partial JSON override of the demographic constants.
    pub constants_path: Option<PathBuf>,
    pub output: Output,
}

fn read(path: &Path, what: &str) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {what} from {}", path.display()))
}

/// Run one scenario end to end and render the requested output.
pub fn run(invocation: &Invocation) -> anyhow::Result<String> {
    let config: ScenarioConfig = serde_json::from_str(&read(&invocation.scenario_path, "scenario")?)
        .with_context(|| format!("invalid scenario in {}", invocation.scenario_path.display()))?;

    let baseline = match &invocation.baseline_path {
        Some(path) => BaselineSnapshot::from_json(&read(path, "baseline")?)
            .with_context(|| format!("invalid baseline in {}", path.display()))?,
        None => {
            tracing::warn!("no baseline file given; using the built-in reference baseline");
            BaselineSnapshot::reference()
        }
    };

    let constants = match &invocation.constants_path {
        Some(path) => serde_json::from_str(&read(path, "constants")?)
            .with_context(|| format!("invalid constants in {}", path.display()))?,
        None => DemographicConstants::default(),
    };

    let mut engine = SimulationEngine::with_constants(baseline, constants);
    let scenario = engine.create_scenario(&config).context("scenario rejected")?;
    let results = engine.run_simulation().context("simulation failed")?;
    tracing::info!(scenario_id = %scenario.id, steps = results.len(), "run complete");

    let rendered = match invocation.output {
        Output::Summary => {
            let summary = engine.generate_summary(&results)?;
            serde_json::to_string_pretty(&summary)?
        }
        Output::Export(format) => engine.export(&results, format)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("laborsim-cli-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn output_names_parse() {
        assert_eq!("summary".parse::<Output>().unwrap(), Output::Summary);
        assert_eq!("CSV".parse::<Output>().unwrap(), Output::Export(ExportFormat::Csv));
        assert!("yaml".parse::<Output>().is_err());
    }

    #[test]
    fn runs_a_scenario_file_against_the_reference_baseline() {
        let scenario = write_temp(
            "scenario.json",
            r#"{ "end_year": 2026, "target_unemployment": 5.0,
                 "interventions": [{ "type": "job_retraining" }] }"#,
        );
        let rendered = run(&Invocation {
            scenario_path: scenario.clone(),
            baseline_path: None,
            constants_path: None,
            output: Output::Summary,
        })
        .unwrap();
        let summary: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(summary["steps"], 12);

        let csv = run(&Invocation {
            scenario_path: scenario,
            baseline_path: None,
            constants_path: None,
            output: Output::Export(ExportFormat::Csv),
        })
        .unwrap();
        assert_eq!(csv.lines().count(), 14);
    }

    #[test]
    fn missing_files_report_their_path() {
        let err = run(&Invocation {
            scenario_path: PathBuf::from("/nonexistent/scenario.json"),
            baseline_path: None,
            constants_path: None,
            output: Output::Summary,
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/scenario.json"));
    }
}
