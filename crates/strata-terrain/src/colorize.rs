//! Threshold colorization of the height field.
//!
//! Every height value falls into exactly one color band; the bands partition
//! `[0, 255]` with no gaps or overlaps. Cells under the grass threshold pick
//! uniformly among three green tones, and each channel then receives a small
//! uniform jitter so flat bands do not render as solid fills.

use rand::Rng;

use crate::grid::{ColorGrid, HeightGrid, Rgb};

/// The three grass tones available below the grass threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrassTone {
    /// Dark green, (0, 100, 0).
    DarkGreen,
    /// Green, (0, 128, 0).
    Green,
    /// Olive drab, (107, 142, 35).
    OliveDrab,
}

impl GrassTone {
    /// All tones, in the order the uniform pick indexes them.
    pub const ALL: [GrassTone; 3] = [GrassTone::DarkGreen, GrassTone::Green, GrassTone::OliveDrab];

    /// The tone's RGB constant.
    pub const fn color(self) -> Rgb {
        match self {
            GrassTone::DarkGreen => Rgb::new(0, 100, 0),
            GrassTone::Green => Rgb::new(0, 128, 0),
            GrassTone::OliveDrab => Rgb::new(107, 142, 35),
        }
    }
}

/// A height band and, for grass, the chosen tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    /// Below the grass threshold.
    Grass(GrassTone),
    /// Heights in `[grass_threshold, 50)`.
    Brown,
    /// Heights in `[50, 90)`.
    Tan,
    /// Heights in `[90, 130)`.
    DarkGray,
    /// Heights in `[130, 170)`.
    LightGray,
    /// Heights of 170 and above.
    White,
}

impl Band {
    /// The band's base color, before jitter.
    pub const fn color(self) -> Rgb {
        match self {
            Band::Grass(tone) => tone.color(),
            Band::Brown => Rgb::new(139, 69, 19),
            Band::Tan => Rgb::new(210, 180, 140),
            Band::DarkGray => Rgb::new(169, 169, 169),
            Band::LightGray => Rgb::new(211, 211, 211),
            Band::White => Rgb::new(255, 255, 255),
        }
    }
}

/// Configuration for the threshold colorizer.
#[derive(Clone, Debug)]
pub struct ColorizeParams {
    /// Heights strictly below this value are grass.
    pub grass_threshold: u8,
    /// Exclusive upper bound of the per-channel jitter, in normalized
    /// `0..1` channel space.
    pub jitter_max: f32,
}

impl Default for ColorizeParams {
    fn default() -> Self {
        Self {
            grass_threshold: 5,
            jitter_max: 1.0 / 20.0,
        }
    }
}

/// Classify a height value into its band.
///
/// Total over `u8`: every height maps to exactly one band. Only the grass
/// sub-choice consumes randomness.
pub fn classify(h: u8, grass_threshold: u8, rng: &mut impl Rng) -> Band {
    if h < grass_threshold {
        Band::Grass(GrassTone::ALL[rng.random_range(0..GrassTone::ALL.len())])
    } else if h < 50 {
        Band::Brown
    } else if h < 90 {
        Band::Tan
    } else if h < 130 {
        Band::DarkGray
    } else if h < 170 {
        Band::LightGray
    } else {
        Band::White
    }
}

/// Classifies each height cell into a color band and jitters its channels,
/// producing a [`ColorGrid`].
pub struct ThresholdColorizer {
    params: ColorizeParams,
}

impl ThresholdColorizer {
    /// Create a colorizer. Classification has no failure modes, so no
    /// validation is needed.
    pub fn new(params: ColorizeParams) -> Self {
        Self { params }
    }

    /// Return a reference to the colorizer parameters.
    pub fn params(&self) -> &ColorizeParams {
        &self.params
    }

    /// Derive the color field from a height field.
    ///
    /// Cells are visited in row-major order; per cell the draw order is the
    /// grass pick (if the cell is grass), then the r, g, b jitter draws.
    pub fn colorize(&self, heights: &HeightGrid, rng: &mut impl Rng) -> ColorGrid {
        let (width, height) = heights.dimensions();
        let mut colors = ColorGrid::new(width, height);

        for z in 0..height {
            for x in 0..width {
                let band = classify(heights.get(x, z), self.params.grass_threshold, rng);
                let base = band.color();
                let cell = Rgb::new(
                    self.jitter(base.r, rng),
                    self.jitter(base.g, rng),
                    self.jitter(base.b, rng),
                );
                colors.set(x, z, cell);
            }
        }
        colors
    }

    /// Add uniform `[0, jitter_max)` in normalized space, then clamp back to
    /// the valid channel range.
    fn jitter(&self, channel: u8, rng: &mut impl Rng) -> u8 {
        let jittered = f32::from(channel) / 255.0 + rng.random::<f32>() * self.params.jitter_max;
        (jittered.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}
