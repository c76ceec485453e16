//! AI adoption trajectories between the baseline and target rates.

use crate::scenario::AdoptionCurve;

const S_CURVE_MIDPOINT: f64 = 0.5;
const S_CURVE_STEEPNESS: f64 = 10.0;

fn logistic(p: f64) -> f64 {
    1.0 / (1.0 + (-S_CURVE_STEEPNESS * (p - S_CURVE_MIDPOINT)).exp())
}

/// Adoption rate (0..100) at `progress` (0..1) along `curve`.
///
/// Every curve starts exactly at `initial` and ends exactly at `target`.
pub fn adoption_at(curve: AdoptionCurve, initial: f64, target: f64, progress: f64) -> f64 {
    let p = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    let linear = || initial + (target - initial) * p;

    let rate = match curve {
        AdoptionCurve::Linear => linear(),
        AdoptionCurve::Exponential if initial <= 0.0 => linear(),
        AdoptionCurve::Exponential => initial * (target / initial).powf(p),
        AdoptionCurve::SCurve => {
            let (lo, hi) = (logistic(0.0), logistic(1.0));
            let normalized = (logistic(p) - lo) / (hi - lo);
            initial + (target - initial) * normalized
        }
    };
    rate.clamp(0.0, 100.0)
}
