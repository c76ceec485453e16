//! `laborsim-engine`: scenario lifecycle and the step loop.
//!
//! The engine owns the baseline, the model suite and the intervention system
//! it was constructed with. Runs are synchronous and deterministic; results
//! can be collected or streamed to a callback.

pub mod adoption;
pub mod baseline;
pub mod cancel;
pub mod engine;
pub mod export;
pub mod impact;
pub mod scenario;
pub mod sensitivity;
pub mod state;
pub mod summary;

pub use baseline::{AiIndicator, BaselineSnapshot, RawBaselineSnapshot, SectorSnapshot};
pub use cancel::CancellationToken;
pub use engine::{SimulationEngine, SimulationResult};
pub use export::ExportFormat;
pub use impact::{LaborImpact, SectorImpact, StepContext};
pub use scenario::{
    AdoptionCurve, AiParameters, AutomationPace, EconomicParameters, InterventionRequest, Scenario, ScenarioConfig,
    Targets, Timeframe,
};
pub use sensitivity::SensitivityPoint;
pub use state::{SectorState, SimulationState};
pub use summary::{InterventionTotals, MetricChange, SectorChange, SimulationSummary};
