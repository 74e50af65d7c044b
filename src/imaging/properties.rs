//! Image-derived signals and their quality scores

use serde::{Deserialize, Serialize};

use crate::constants::quality;

/// Simple signals extracted once per uploaded image.
///
/// Immutable after extraction; every downstream stage reads from this record
/// and none writes back to it. All fields are deterministic for the same
/// input bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageProperties {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Mean Rec.601 luminance (0–255)
    pub brightness: f64,
    /// Standard deviation of luminance (≥ 0)
    pub contrast: f64,
    /// Fraction of the frame flagged as non-roof by the coarse
    /// obstruction heuristic (0.0–1.0)
    pub obstruction_ratio: f64,
}

impl ImageProperties {
    /// Pixel count in megapixels
    pub fn megapixels(&self) -> f64 {
        (self.width as f64 * self.height as f64) / 1_000_000.0
    }

    /// Resolution score in [0, 1], saturating at
    /// [`quality::FULL_SCORE_MEGAPIXELS`]
    pub fn resolution_score(&self) -> f64 {
        (self.megapixels() / quality::FULL_SCORE_MEGAPIXELS).min(1.0)
    }

    /// Contrast score in [0, 1], saturating at
    /// [`quality::FULL_SCORE_CONTRAST`]
    pub fn contrast_score(&self) -> f64 {
        (self.contrast / quality::FULL_SCORE_CONTRAST).min(1.0)
    }

    /// Brightness score in [0, 1]; 1.0 at neutral exposure, decaying
    /// linearly toward pure black and pure white
    pub fn brightness_score(&self) -> f64 {
        let deviation = (self.brightness - quality::NEUTRAL_BRIGHTNESS).abs();
        (1.0 - deviation / quality::NEUTRAL_BRIGHTNESS).clamp(0.0, 1.0)
    }

    /// Combined image-quality score in [0, 1], blending contrast and
    /// exposure bands
    pub fn quality_score(&self) -> f64 {
        0.5 * self.contrast_score() + 0.5 * self.brightness_score()
    }
}
