//! Roof area estimation
//!
//! Maps extracted image properties to a usable-area estimate and an
//! area-stage confidence. The mapping lives behind the [`ImageAnalyzer`]
//! capability trait so a future true vision-model variant can slot in
//! without changing downstream stages; [`HeuristicAnalyzer`] is the shipped
//! variant.

pub mod heuristic;

use serde::{Deserialize, Serialize};

use crate::imaging::ImageProperties;

pub use heuristic::HeuristicAnalyzer;

/// Usable roof area estimate derived solely from image properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoofEstimate {
    /// Estimated usable roof area in square feet, clamped to the configured
    /// plausible range
    pub usable_area_sqft: f64,
    /// Confidence in the area estimate (0.0–1.0)
    pub confidence: f64,
}

/// Capability interface for the image-to-roof-estimate stage.
///
/// Implementations must be pure: the same properties always produce the
/// same estimate, with no side effects.
pub trait ImageAnalyzer {
    /// Estimate usable roof area and confidence from image properties
    fn estimate_roof(&self, properties: &ImageProperties) -> RoofEstimate;
}
