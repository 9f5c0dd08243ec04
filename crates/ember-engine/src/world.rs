//! The single-threaded world orchestrator.
//!
//! [`LifeWorld`] wires the grid, transition rule, fade tracker, and
//! edit queue into the call surface the external driver owns: `step()`
//! when its tick counter trips, `update_fade(dt)` once per rendered
//! frame, and direct edits whenever input arrives.

use std::time::Instant;

use ember_core::{GenerationId, Position};
use ember_grid::{GridDims, GridState};

use crate::config::{ConfigError, WorldConfig};
use crate::edits::{Edit, EditQueue};
use crate::fade::FadeTracker;
use crate::metrics::StepMetrics;
use crate::{rule, seed};

/// A complete simulation world: grid, rule, fade state, edit queue.
///
/// Single-threaded and synchronous. No operation blocks, and every
/// call is bounded by the number of currently-alive cells — there is
/// no full-grid scan regardless of grid size. Edits and steps
/// interleave in whatever order the driver invokes them; queued edits
/// are the exception and always apply at the next step boundary.
pub struct LifeWorld {
    grid: GridState,
    fade: FadeTracker,
    edits: EditQueue,
    generation: GenerationId,
    last_metrics: StepMetrics,
}

impl LifeWorld {
    /// Construct a world from a configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] reported by
    /// [`WorldConfig::validate`].
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut fade = FadeTracker::new(config.fade_duration)?;
        fade.set_enabled(config.fade_enabled);
        Ok(Self {
            grid: GridState::new(GridDims::new(config.width, config.height)),
            fade,
            edits: EditQueue::new(),
            generation: GenerationId::default(),
            last_metrics: StepMetrics::default(),
        })
    }

    // ── Stepping ────────────────────────────────────────────────

    /// Advance one generation.
    ///
    /// Queued edits are drained and applied first, in submission
    /// order. The next generation is then computed in full and swapped
    /// in wholesale, so no reader ever observes a partial transition.
    pub fn step(&mut self) -> &StepMetrics {
        let started = Instant::now();

        let drained = self.edits.drain();
        let edits_applied = drained.len();
        for edit in drained {
            self.apply_edit(edit);
        }

        let next = rule::next_generation(self.grid.cells(), self.grid.dims());
        let births = next.difference(self.grid.cells()).count();
        let deaths = self.grid.cells().difference(&next).count();
        let survivors = next.len() - births;
        let alive = next.len();
        self.grid.replace(next);
        self.generation = GenerationId(self.generation.0 + 1);

        self.last_metrics = StepMetrics {
            total_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
            edits_applied,
            births,
            survivors,
            deaths,
            alive,
        };
        &self.last_metrics
    }

    /// The number of completed generations.
    pub fn generation(&self) -> GenerationId {
        self.generation
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    // ── Edits ───────────────────────────────────────────────────

    /// Defer an edit until the next step boundary.
    pub fn queue_edit(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    fn apply_edit(&mut self, edit: Edit) {
        match edit {
            Edit::Add(pos) => self.grid.add(pos),
            Edit::Remove(pos) => self.grid.remove(pos),
            Edit::Clear => self.grid.clear(),
            Edit::Load(cells) => self.grid.load(cells),
        }
    }

    /// Insert one cell now. Idempotent and bounds-unchecked; see
    /// [`GridState::add`].
    pub fn add(&mut self, pos: Position) {
        self.grid.add(pos);
    }

    /// Remove one cell now if present.
    pub fn remove(&mut self, pos: Position) {
        self.grid.remove(pos);
    }

    /// Remove every cell now. Extents and fade state are untouched.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Whether `pos` is currently alive.
    pub fn contains(&self, pos: Position) -> bool {
        self.grid.contains(pos)
    }

    /// Replace the grid extents. Stranded cells are not clipped; see
    /// [`GridState::resize`].
    pub fn resize(&mut self, width: u32, height: u32) {
        self.grid.resize(width, height);
    }

    /// Atomically replace the alive set with an externally supplied
    /// pattern; see [`GridState::load`].
    pub fn load_pattern<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Position>,
    {
        self.grid.load(cells);
    }

    /// Replace the alive set with a random soup; see
    /// [`seed::random_pattern`].
    pub fn seed_random(&mut self, probability: f64, seed: u64) {
        self.grid
            .load(seed::random_pattern(self.grid.dims(), probability, seed));
    }

    /// Read-only view of the grid.
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    // ── Fade ────────────────────────────────────────────────────

    /// Advance fade state by `dt` seconds against the current alive
    /// set.
    ///
    /// Frame-rate driven: call once per rendered frame, independently
    /// of the simulation tick.
    pub fn update_fade(&mut self, dt: f64) {
        self.fade.update(self.grid.cells(), dt);
    }

    /// Render alpha for `pos`.
    ///
    /// With fading enabled this is the tracker's decay value — alive
    /// cells read 1.0 once tracked, because every update pins them at
    /// full duration. With fading disabled, alive cells are fully
    /// opaque and everything else is invisible.
    pub fn cell_alpha(&self, pos: Position) -> f64 {
        if self.fade.is_enabled() {
            self.fade.alpha(pos)
        } else if self.grid.contains(pos) {
            1.0
        } else {
            0.0
        }
    }

    /// Read-only view of the fade tracker.
    pub fn fade(&self) -> &FadeTracker {
        &self.fade
    }

    /// Enable or disable fading. Disabling discards all decay state.
    pub fn set_fade_enabled(&mut self, enabled: bool) {
        self.fade.set_enabled(enabled);
    }

    /// Replace the fade duration; see [`FadeTracker::set_duration`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFadeDuration`] for a non-finite
    /// or non-positive duration; the current duration is kept.
    pub fn set_fade_duration(&mut self, duration: f64) -> Result<(), ConfigError> {
        self.fade.set_duration(duration)
    }
}
