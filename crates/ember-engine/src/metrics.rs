//! Per-step metrics for the simulation engine.
//!
//! [`StepMetrics`] captures timing and population-delta data for a
//! single step. The engine populates it after each `step()` call;
//! embedders poll the most recent values for telemetry or HUDs.

/// Timing and population metrics collected during a single step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Queued edits applied before the generation was computed.
    pub edits_applied: usize,
    /// Cells alive now that were dead last generation.
    pub births: usize,
    /// Cells alive in both generations.
    pub survivors: usize,
    /// Cells alive last generation that are now dead.
    pub deaths: usize,
    /// Cells alive after the step.
    pub alive: usize,
}
