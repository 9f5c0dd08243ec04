//! Per-cell afterglow decay driven by successive alive-sets and frame
//! time.

use crate::config::ConfigError;
use ember_core::{AliveSet, Position};
use indexmap::IndexMap;

/// Converts discrete alive/dead transitions plus wall-clock deltas into
/// a continuous per-cell decay value for rendering.
///
/// Every cell present in the alive set is pinned at the full duration
/// on each [`update`](FadeTracker::update): there is no distinct birth
/// state, and no decay ever occurs while a cell remains alive. A cell
/// that disappears starts decaying on the first update after its last
/// alive frame and is dropped once its remaining time reaches zero.
///
/// Remaining times always stay within `[0, duration]`.
#[derive(Clone, Debug)]
pub struct FadeTracker {
    duration: f64,
    enabled: bool,
    remaining: IndexMap<Position, f64>,
}

impl FadeTracker {
    /// Create an enabled tracker with the given fade duration in
    /// seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFadeDuration`] unless `duration`
    /// is finite and positive. The alpha query divides by the
    /// duration, so the rejection happens here at configuration time,
    /// never inside [`update`](FadeTracker::update).
    pub fn new(duration: f64) -> Result<Self, ConfigError> {
        check_duration(duration)?;
        Ok(Self {
            duration,
            enabled: true,
            remaining: IndexMap::new(),
        })
    }

    /// Advance decay state by `dt` seconds against the current alive
    /// set.
    ///
    /// With fading disabled this clears all decay state and returns.
    /// Otherwise every tracked cell not alive this call decays by
    /// `dt` (and is dropped at zero), then every alive cell is set to
    /// the full duration — refreshing long-lived cells and creating
    /// newborn ones at full brightness alike.
    pub fn update(&mut self, alive: &AliveSet, dt: f64) {
        if !self.enabled {
            self.remaining.clear();
            return;
        }

        self.remaining.retain(|pos, remaining| {
            if alive.contains(pos) {
                true
            } else {
                *remaining -= dt;
                *remaining > 0.0
            }
        });

        for &pos in alive {
            self.remaining.insert(pos, self.duration);
        }
    }

    /// Render alpha for `pos`: remaining time over duration, clamped
    /// to `[0, 1]`. Cells with no remaining glow read 0.0.
    pub fn alpha(&self, pos: Position) -> f64 {
        self.remaining
            .get(&pos)
            .map_or(0.0, |remaining| (remaining / self.duration).clamp(0.0, 1.0))
    }

    /// Iterate `(position, alpha)` over every glowing cell, in a
    /// deterministic order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, f64)> + '_ {
        self.remaining
            .iter()
            .map(|(&pos, &remaining)| (pos, (remaining / self.duration).clamp(0.0, 1.0)))
    }

    /// Enable or disable fading. Disabling discards all decay state
    /// immediately.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.remaining.clear();
        }
    }

    /// Whether fading is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The configured fade duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Replace the fade duration.
    ///
    /// Entries above the new duration are clamped down so remaining
    /// times stay within `[0, duration]`.
    ///
    /// # Errors
    ///
    /// Same validation as [`new`](FadeTracker::new).
    pub fn set_duration(&mut self, duration: f64) -> Result<(), ConfigError> {
        check_duration(duration)?;
        self.duration = duration;
        for remaining in self.remaining.values_mut() {
            *remaining = remaining.min(duration);
        }
        Ok(())
    }
}

fn check_duration(duration: f64) -> Result<(), ConfigError> {
    if duration.is_finite() && duration > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidFadeDuration { value: duration })
    }
}
