//! Heuristic roof area estimator
//!
//! This is not rooftop segmentation. The estimator scales a configured
//! implied footprint by an image-quality multiplier and the unobstructed
//! fraction of the frame. Higher resolution and contrast raise both the
//! estimate and its confidence; obstruction reduces both proportionally.

use tracing::debug;

use crate::analysis::{ImageAnalyzer, RoofEstimate};
use crate::config::AreaConfig;
use crate::constants::area;
use crate::imaging::ImageProperties;

/// Confidence blend weights: baseline, resolution, contrast, brightness
const CONFIDENCE_BASELINE: f64 = 0.3;
const CONFIDENCE_RESOLUTION_WEIGHT: f64 = 0.3;
const CONFIDENCE_CONTRAST_WEIGHT: f64 = 0.2;
const CONFIDENCE_BRIGHTNESS_WEIGHT: f64 = 0.2;

/// Heuristic implementation of [`ImageAnalyzer`].
pub struct HeuristicAnalyzer {
    config: AreaConfig,
}

impl HeuristicAnalyzer {
    /// Create an analyzer with the given area parameters
    pub fn new(config: AreaConfig) -> Self {
        Self { config }
    }

    /// Quality multiplier in `[QUALITY_FLOOR, 1.0]`, rising with
    /// resolution and contrast
    fn quality_multiplier(&self, properties: &ImageProperties) -> f64 {
        let signal = 0.5 * properties.resolution_score() + 0.5 * properties.contrast_score();
        area::QUALITY_FLOOR + (1.0 - area::QUALITY_FLOOR) * signal
    }
}

impl ImageAnalyzer for HeuristicAnalyzer {
    fn estimate_roof(&self, properties: &ImageProperties) -> RoofEstimate {
        let unobstructed = (1.0 - properties.obstruction_ratio).clamp(0.0, 1.0);

        let raw_area = self.config.implied_footprint_sqft
            * self.config.base_usable_fraction
            * self.quality_multiplier(properties)
            * unobstructed;
        let usable_area_sqft = raw_area.clamp(
            self.config.min_usable_area_sqft,
            self.config.max_usable_area_sqft,
        );

        let confidence = ((CONFIDENCE_BASELINE
            + CONFIDENCE_RESOLUTION_WEIGHT * properties.resolution_score()
            + CONFIDENCE_CONTRAST_WEIGHT * properties.contrast_score()
            + CONFIDENCE_BRIGHTNESS_WEIGHT * properties.brightness_score())
            * unobstructed)
            .clamp(0.0, 1.0);

        debug!(raw_area, usable_area_sqft, confidence, "estimated roof area");

        RoofEstimate {
            usable_area_sqft,
            confidence,
        }
    }
}
