use std::collections::BTreeMap;

use laborsim_core::SimError;
use laborsim_engine::{
    AdoptionCurve, AutomationPace, BaselineSnapshot, InterventionRequest, ScenarioConfig, SimulationEngine,
    SimulationResult,
};
use laborsim_interventions::{InterventionConfig, ParamValue};
use proptest::prelude::*;
use serde_json::json;

fn engine() -> SimulationEngine {
    SimulationEngine::new(BaselineSnapshot::reference())
}

fn baseline_scenario() -> ScenarioConfig {
    ScenarioConfig {
        name: Some("Moderate adoption".to_string()),
        start_year: Some(2025),
        end_year: Some(2030),
        target_unemployment: Some(8.0),
        ai_adoption_rate: Some(70.0),
        automation_pace: Some(AutomationPace::Moderate),
        adoption_curve: Some(AdoptionCurve::SCurve),
        ..Default::default()
    }
}

fn ubi_request(start_year: Option<i32>, end_year: Option<i32>) -> InterventionRequest {
    InterventionRequest {
        kind: "ubi".to_string(),
        parameters: BTreeMap::from([("monthly_amount".to_string(), ParamValue::Number(1000.0))]),
        config: InterventionConfig {
            start_year,
            end_year,
            ..Default::default()
        },
    }
}

fn assert_bounded(results: &[SimulationResult]) {
    for pair in results.windows(2) {
        let (a, b) = (&pair[0].state, &pair[1].state);
        assert!(b.ai.cumulative_displaced >= a.ai.cumulative_displaced);
        assert!(b.ai.cumulative_new_jobs >= a.ai.cumulative_new_jobs);
    }
    for r in results {
        let s = &r.state;
        assert!((0.0..=50.0).contains(&s.labor_market.unemployment_rate), "step {}", r.step);
        assert!((0.0..=100.0).contains(&s.ai.adoption_rate));
        assert!(s.labor_market.job_openings >= 1_000_000.0);
        assert!(s.labor_market.total_employment >= 0.0);
        assert!(s.sectors.values().all(|sector| sector.employment >= 0.0));
        if let Some(impact) = &r.labor_impact {
            for (id, sector) in &impact.sectors {
                assert!(sector.displaced >= 0.0, "{id} displaced at step {}", r.step);
                assert!(sector.new_jobs >= 0.0, "{id} new jobs at step {}", r.step);
            }
        }
    }
}

fn run(config: ScenarioConfig) -> Vec<SimulationResult> {
    let mut engine = engine();
    engine.create_scenario(&config).unwrap();
    engine.run_simulation().unwrap()
}

fn unemployment_at(results: &[SimulationResult], step: usize) -> f64 {
    results[step].state.labor_market.unemployment_rate
}

#[test]
fn moderate_adoption_reaches_target_unemployment() {
    let mut engine = engine();
    engine.create_scenario(&baseline_scenario()).unwrap();
    let results = engine.run_simulation().unwrap();

    assert_eq!(results.len(), 61);
    assert_eq!(results[0].step, 0);
    assert!(results[0].labor_impact.is_none());

    let summary = engine.generate_summary(&results).unwrap();
    assert!((summary.unemployment_rate.end - 8.0).abs() <= 0.5, "{}", summary.unemployment_rate.end);
    assert!((summary.unemployment_rate.start - 4.1).abs() < 1e-9);
    assert!(summary.cumulative_displaced > 0.0);
    assert!(summary.cumulative_new_jobs > 0.0);
    assert!(
        (summary.net_job_impact - (summary.cumulative_new_jobs - summary.cumulative_displaced)).abs() < 1e-6
    );
    assert!((summary.ai_adoption.end - 70.0).abs() < 1e-9);
    assert_eq!(summary.most_affected_sectors.len(), 3);
    assert_eq!(summary.least_affected_sectors.len(), 3);
    assert!(summary.labor_share.end < summary.labor_share.start);
    assert_bounded(&results);
}

#[test]
fn ubi_costs_more_and_lowers_participation() {
    let mut without = engine();
    without.create_scenario(&baseline_scenario()).unwrap();
    let plain = without.run_simulation().unwrap();
    let plain = without.generate_summary(&plain).unwrap();

    let mut with = engine();
    with.create_scenario(&ScenarioConfig {
        interventions: vec![ubi_request(None, None)],
        ..baseline_scenario()
    })
    .unwrap();
    let results = with.run_simulation().unwrap();
    let ubi = with.generate_summary(&results).unwrap();

    assert!(ubi.interventions.total_fiscal_cost > plain.interventions.total_fiscal_cost);
    assert!(ubi.interventions.average_lfpr_effect < plain.interventions.average_lfpr_effect);
    assert!(ubi.labor_force_participation.end < plain.labor_force_participation.end);
    assert_bounded(&results);

    // Lower participation must not cost jobs on the way to the target.
    let plain_results = run(baseline_scenario());
    for (with_ubi, without_ubi) in results.iter().zip(&plain_results) {
        let (a, b) = (&with_ubi.state.labor_market, &without_ubi.state.labor_market);
        assert!(a.total_employment >= b.total_employment - 1e-3, "step {}", with_ubi.step);
    }
}

#[test]
fn automation_pace_moves_the_unemployment_path() {
    let slow = run(ScenarioConfig {
        automation_pace: Some(AutomationPace::Slow),
        ..baseline_scenario()
    });
    let accelerating = run(ScenarioConfig {
        automation_pace: Some(AutomationPace::Accelerating),
        ..baseline_scenario()
    });

    let (slow_end, fast_end) = (slow.last().unwrap(), accelerating.last().unwrap());
    assert!(fast_end.state.ai.cumulative_displaced > slow_end.state.ai.cumulative_displaced);
    assert!(unemployment_at(&accelerating, 30) > unemployment_at(&slow, 30) + 0.1);
    assert_ne!(
        fast_end.state.labor_market.total_employment,
        slow_end.state.labor_market.total_employment
    );
    // Both still finish near the target.
    for end in [slow_end, fast_end] {
        assert!((end.state.labor_market.unemployment_rate - 8.0).abs() <= 0.5);
    }
}

#[test]
fn new_job_multiplier_moves_the_unemployment_path() {
    let none = run(ScenarioConfig {
        new_job_multiplier: Some(0.0),
        ..baseline_scenario()
    });
    let triple = run(ScenarioConfig {
        new_job_multiplier: Some(3.0),
        ..baseline_scenario()
    });

    assert_eq!(none.last().unwrap().state.ai.cumulative_new_jobs, 0.0);
    assert!(triple.last().unwrap().state.ai.cumulative_new_jobs > 0.0);
    assert!(unemployment_at(&triple, 30) < unemployment_at(&none, 30));
    assert_ne!(
        triple.last().unwrap().state.labor_market.total_employment,
        none.last().unwrap().state.labor_market.total_employment
    );
}

#[test]
fn identical_inputs_give_identical_runs() {
    let mut engine = engine();
    engine
        .create_scenario(&ScenarioConfig {
            interventions: vec![ubi_request(Some(2026), None)],
            ..baseline_scenario()
        })
        .unwrap();
    let first = engine.run_simulation().unwrap();
    let second = engine.run_simulation().unwrap();
    assert_eq!(first, second);
}

#[test]
fn interventions_apply_only_inside_their_window() {
    let mut engine = engine();
    engine
        .create_scenario(&ScenarioConfig {
            interventions: vec![ubi_request(Some(2027), Some(2028))],
            ..baseline_scenario()
        })
        .unwrap();
    let results = engine.run_simulation().unwrap();

    for r in results.iter().filter(|r| r.step > 0) {
        let inside = (2027..=2028).contains(&r.year);
        assert_eq!(!r.interventions.details.is_empty(), inside, "year {}", r.year);
        if inside {
            assert!(r.interventions.fiscal_cost > 0.0, "year {}", r.year);
            assert!(r.interventions.lfpr_effect < 0.0, "year {}", r.year);
        } else {
            assert_eq!(r.interventions.fiscal_cost, 0.0, "year {}", r.year);
            assert_eq!(r.interventions.lfpr_effect, 0.0, "year {}", r.year);
        }
    }
    // Participation recovers once the level effect is withdrawn.
    let last = results.last().unwrap();
    assert!(last.state.policy.lfpr_effect.abs() < 1e-12);
}

#[test]
fn adoption_curves_hit_both_endpoints() {
    for curve in [AdoptionCurve::Linear, AdoptionCurve::Exponential, AdoptionCurve::SCurve] {
        let mut engine = engine();
        engine
            .create_scenario(&ScenarioConfig {
                adoption_curve: Some(curve),
                ..baseline_scenario()
            })
            .unwrap();
        let results = engine.run_simulation().unwrap();
        let first = results.first().unwrap();
        let last = results.last().unwrap();
        assert!((first.adoption_rate - 35.0).abs() < 1e-9, "{curve:?}");
        assert!((last.adoption_rate - 70.0).abs() < 1e-9, "{curve:?}");
    }
}

#[test]
fn sensitivity_analysis_restores_the_scenario() {
    let mut engine = engine();
    let original = engine.create_scenario(&baseline_scenario()).unwrap();

    let points = engine
        .run_sensitivity_analysis("targets.ai_adoption_rate", &[json!(50.0), json!(90.0)])
        .unwrap();
    assert_eq!(points.len(), 2);
    assert!(points[1].summary.cumulative_displaced > points[0].summary.cumulative_displaced);
    assert_eq!(engine.scenario(), Some(&original));

    let err = engine
        .run_sensitivity_analysis("targets.missing", &[json!(1.0)])
        .unwrap_err();
    assert!(matches!(err, SimError::ParameterPath(_)));
    assert_eq!(engine.scenario(), Some(&original));
}

#[test]
fn streaming_delivers_every_step() {
    let mut engine = engine();
    engine
        .create_scenario(&ScenarioConfig {
            end_year: Some(2026),
            ..baseline_scenario()
        })
        .unwrap();
    let mut steps = Vec::new();
    let delivered = engine
        .run_streaming(&laborsim_engine::CancellationToken::new(), |r| steps.push(r.step))
        .unwrap();
    assert_eq!(delivered, 12);
    assert_eq!(steps, (0..=12).collect::<Vec<_>>());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Property: state invariants hold for any pace, curve and target.
    #[test]
    fn state_invariants_hold(
        target_unemployment in 0.0f64..20.0,
        adoption in 0.0f64..100.0,
        pace in prop::sample::select(vec![
            AutomationPace::Slow,
            AutomationPace::Moderate,
            AutomationPace::Fast,
            AutomationPace::Accelerating,
        ]),
        curve in prop::sample::select(vec![AdoptionCurve::Linear, AdoptionCurve::Exponential, AdoptionCurve::SCurve]),
        guarantee in any::<bool>(),
    ) {
        let interventions = if guarantee {
            vec![InterventionRequest { kind: "job_guarantee".to_string(), ..Default::default() }]
        } else {
            Vec::new()
        };
        let mut engine = engine();
        engine.create_scenario(&ScenarioConfig {
            end_year: Some(2027),
            target_unemployment: Some(target_unemployment),
            ai_adoption_rate: Some(adoption),
            automation_pace: Some(pace),
            adoption_curve: Some(curve),
            interventions,
            ..Default::default()
        }).unwrap();
        let results = engine.run_simulation().unwrap();
        prop_assert_eq!(results.len(), 25);
        assert_bounded(&results);
    }
}
