//! Dotted-path parameter sweeps over a scenario.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use laborsim_core::{SimError, SimResult};

use crate::scenario::Scenario;
use crate::summary::SimulationSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub path: String,
    pub value: Value,
    pub summary: SimulationSummary,
}

/// Copy of `scenario` with the field at `path` (e.g. `targets.ai_adoption_rate`
/// or `interventions.0.parameters.monthly_amount`) replaced by `value`.
///
/// The copy is validated; a path that does not exist is an error rather than
/// a silent insert.
pub fn with_path(scenario: &Scenario, path: &str, value: &Value) -> SimResult<Scenario> {
    let mut tree = serde_json::to_value(scenario)?;
    let slot = path
        .split('.')
        .try_fold(&mut tree, |node, segment| match node {
            Value::Object(map) => map.get_mut(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get_mut(i)),
            _ => None,
        })
        .ok_or_else(|| SimError::parameter_path(format!("`{path}` does not exist in the scenario")))?;
    *slot = value.clone();

    let modified: Scenario = serde_json::from_value(tree)
        .map_err(|e| SimError::parameter_path(format!("`{path}` = {value}: {e}")))?;
    modified.validate()?;
    Ok(modified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioConfig;
    use laborsim_interventions::InterventionSystem;
    use serde_json::json;

    fn scenario() -> Scenario {
        ScenarioConfig::default().build(&InterventionSystem::new()).unwrap()
    }

    #[test]
    fn sets_nested_fields() {
        let base = scenario();
        let modified = with_path(&base, "targets.ai_adoption_rate", &json!(90.0)).unwrap();
        assert_eq!(modified.targets.ai_adoption_rate, 90.0);
        assert_eq!(base.targets.ai_adoption_rate, 70.0);
        assert_eq!(modified.id, base.id);
    }

    #[test]
    fn rejects_missing_paths_and_bad_values() {
        let base = scenario();
        assert!(matches!(
            with_path(&base, "targets.nope", &json!(1)),
            Err(SimError::ParameterPath(_))
        ));
        assert!(matches!(
            with_path(&base, "targets.ai_adoption_rate", &json!("high")),
            Err(SimError::ParameterPath(_))
        ));
        assert!(matches!(
            with_path(&base, "targets.ai_adoption_rate", &json!(150.0)),
            Err(SimError::Validation(_))
        ));
    }
}
