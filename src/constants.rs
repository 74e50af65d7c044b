//! Heuristic constants and default model parameters
//!
//! This module contains compile-time constants for the assessment pipeline:
//! image-quality scoring, area estimation, panel sizing, and the financial
//! model. Values are illustrative industry averages, chosen for a quick
//! feasibility check rather than an engineering-grade assessment.

/// Image acceptance limits
pub mod limits {
    /// Minimum accepted width/height in pixels
    pub const MIN_DIMENSION: u32 = 100;

    /// Maximum accepted width/height in pixels
    pub const MAX_DIMENSION: u32 = 10_000;

    /// Maximum accepted payload size in bytes (20 MB)
    pub const MAX_IMAGE_BYTES: usize = 20 * 1024 * 1024;
}

/// Image-quality scoring parameters
pub mod quality {
    /// Rec.601 luminance weights for RGB pixels
    pub const LUMA_RED: f64 = 0.299;
    pub const LUMA_GREEN: f64 = 0.587;
    pub const LUMA_BLUE: f64 = 0.114;

    /// Megapixel count at which the resolution score saturates (≈1080p)
    pub const FULL_SCORE_MEGAPIXELS: f64 = 2.0;

    /// Luminance std-dev at which the contrast score saturates
    pub const FULL_SCORE_CONTRAST: f64 = 64.0;

    /// Ideal mean luminance; the brightness score decays toward 0 and 255
    pub const NEUTRAL_BRIGHTNESS: f64 = 128.0;
}

/// Coarse non-roof obstruction heuristic
///
/// This is a pixel-banding proxy, not rooftop segmentation: pixels that look
/// like vegetation, sky/glare, or deep shadow are counted as non-roof.
pub mod obstruction {
    /// Green channel must exceed red and blue by this margin (vegetation)
    pub const GREEN_DOMINANCE_MARGIN: u8 = 15;

    /// Luminance above this counts as sky or glare
    pub const GLARE_LUMA: f64 = 220.0;

    /// Luminance below this counts as deep shadow
    pub const SHADOW_LUMA: f64 = 30.0;

    /// Obstruction ratio at or above this forces a Not Suitable verdict
    pub const FORCE_THRESHOLD: f64 = 0.8;
}

/// Roof area estimation parameters
pub mod area {
    /// Rooftop footprint implied by a typical single-home overhead shot (sq ft)
    pub const IMPLIED_FOOTPRINT_SQFT: f64 = 2000.0;

    /// Fraction of the footprint usable on an ideal unobstructed image
    pub const BASE_USABLE_FRACTION: f64 = 0.4;

    /// Quality multiplier floor for the worst readable image
    pub const QUALITY_FLOOR: f64 = 0.6;

    /// Plausible usable-area range; estimates are clamped into it (sq ft)
    pub const MIN_USABLE_AREA_SQFT: f64 = 50.0;
    pub const MAX_USABLE_AREA_SQFT: f64 = 5000.0;
}

/// Solar production model defaults
pub mod solar {
    /// Fraction of usable area coverable after spacing and setbacks
    pub const DEFAULT_PACKING_EFFICIENCY: f64 = 0.8;

    /// Standardized annual equivalent full-sun hours (≈5.5 h/day)
    pub const DEFAULT_ANNUAL_SUN_HOURS: f64 = 2000.0;

    /// System derate for inverter, wiring, and soiling losses
    pub const DEFAULT_SYSTEM_DERATE: f64 = 0.85;
}

/// Financial model defaults (US residential averages)
pub mod finance {
    /// Installed cost per DC watt, USD
    pub const DEFAULT_COST_PER_WATT: f64 = 3.0;

    /// Federal investment tax credit rate
    pub const DEFAULT_TAX_CREDIT_RATE: f64 = 0.30;

    /// Average retail electricity rate, USD per kWh
    pub const DEFAULT_ELECTRICITY_RATE: f64 = 0.22;

    /// Net-metering credit rate for exported production, USD per kWh
    pub const DEFAULT_NET_METERING_RATE: f64 = 0.08;

    /// Flat permitting and labor overhead, USD
    pub const DEFAULT_PERMIT_AND_LABOR_OVERHEAD: f64 = 2000.0;

    /// Savings projection horizon in years (simple, non-discounted)
    pub const SAVINGS_HORIZON_YEARS: f64 = 25.0;
}

/// Verdict and recommendation thresholds
pub mod report {
    /// Minimum overall confidence for any positive verdict
    pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.4;

    /// Width of the Borderline band above the minimum confidence
    pub const DEFAULT_BORDERLINE_BAND: f64 = 0.15;

    /// Weight of the area-stage confidence in the overall blend
    pub const AREA_CONFIDENCE_WEIGHT: f64 = 0.7;

    /// Weight of the image-quality score in the overall blend
    pub const IMAGE_QUALITY_WEIGHT: f64 = 0.3;

    /// Payback periods longer than this trigger a financing recommendation
    pub const DEFAULT_PAYBACK_WARNING_YEARS: f64 = 12.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_weights_sum_to_one() {
        let sum = quality::LUMA_RED + quality::LUMA_GREEN + quality::LUMA_BLUE;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_ranges() {
        assert!(area::MIN_USABLE_AREA_SQFT < area::MAX_USABLE_AREA_SQFT);
        assert!(obstruction::SHADOW_LUMA < obstruction::GLARE_LUMA);
        assert!(obstruction::FORCE_THRESHOLD > report::DEFAULT_MIN_CONFIDENCE);
        let weights = report::AREA_CONFIDENCE_WEIGHT + report::IMAGE_QUALITY_WEIGHT;
        assert!((weights - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_limits_ordered() {
        assert!(limits::MIN_DIMENSION < limits::MAX_DIMENSION);
    }
}
