//! Color values and the alpha blend used by the fade renderer query.

use std::fmt;

/// An 8-bit-per-channel RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend this color toward `background` by `alpha`.
    ///
    /// `alpha` is clamped to `[0, 1]`: 1.0 yields `self` unchanged
    /// (full live color), 0.0 yields `background`. This is the linear
    /// interpolation a renderer applies per glowing cell.
    pub fn blend(self, background: Self, alpha: f64) -> Self {
        let t = alpha.clamp(0.0, 1.0);
        let mix = |live: u8, back: u8| {
            let v = f64::from(back) + (f64::from(live) - f64::from(back)) * t;
            // v stays within [0, 255] for t in [0, 1].
            v.round() as u8
        };
        Self {
            r: mix(self.r, background.r),
            g: mix(self.g, background.g),
            b: mix(self.b, background.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
