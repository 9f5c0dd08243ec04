//! World configuration and construction-time validation.
//!
//! [`WorldConfig`] is the builder-input for constructing a
//! [`LifeWorld`](crate::world::LifeWorld).
//! [`validate()`](WorldConfig::validate) checks structural invariants
//! once at startup; every runtime operation afterwards is total.

use std::error::Error;
use std::fmt;

/// Errors detected during [`WorldConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Initial extents contain zero cells.
    EmptyGrid,
    /// An axis exceeds the addressable coordinate range.
    DimensionTooLarge {
        /// Which axis ("width" or "height").
        name: &'static str,
        /// The configured extent.
        value: u32,
        /// The maximum representable extent.
        max: u32,
    },
    /// Fade duration is NaN, infinite, zero, or negative.
    InvalidFadeDuration {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum extent {max}")
            }
            Self::InvalidFadeDuration { value } => {
                write!(f, "fade duration must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Builder-input for constructing a world.
///
/// Plain data; [`validate()`](WorldConfig::validate) checks the
/// structural invariants once at construction. Runtime resizes are
/// deliberately not re-validated — zero extents degenerate to an
/// always-empty next generation rather than erroring.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Seconds over which a dead cell's render alpha decays to zero.
    /// Must be finite and positive.
    pub fade_duration: f64,
    /// Whether fading starts enabled.
    pub fade_enabled: bool,
}

impl Default for WorldConfig {
    /// 80×60 cells, one-second fade, fading on.
    fn default() -> Self {
        Self {
            width: 80,
            height: 60,
            fade_duration: 1.0,
            fade_enabled: true,
        }
    }
}

impl WorldConfig {
    /// Maximum extent per axis: cell coordinates are `i32`, so wider
    /// grids would contain cells that can never be addressed.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: [`ConfigError::EmptyGrid`]
    /// for a zero extent, [`ConfigError::DimensionTooLarge`] for an
    /// extent past [`MAX_DIM`](Self::MAX_DIM), or
    /// [`ConfigError::InvalidFadeDuration`] for a non-finite or
    /// non-positive fade duration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.width > Self::MAX_DIM {
            return Err(ConfigError::DimensionTooLarge {
                name: "width",
                value: self.width,
                max: Self::MAX_DIM,
            });
        }
        if self.height > Self::MAX_DIM {
            return Err(ConfigError::DimensionTooLarge {
                name: "height",
                value: self.height,
                max: Self::MAX_DIM,
            });
        }
        if !(self.fade_duration.is_finite() && self.fade_duration > 0.0) {
            return Err(ConfigError::InvalidFadeDuration {
                value: self.fade_duration,
            });
        }
        Ok(())
    }
}
