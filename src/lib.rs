//! # solarscan
//!
//! A Rust crate for estimating a rooftop's solar-panel suitability from a
//! single uploaded image.
//!
//! This library provides a heuristic feasibility check by:
//! - Extracting simple signals from the image (resolution, brightness,
//!   contrast, coarse obstruction ratio)
//! - Mapping them to a usable roof area with a confidence score
//! - Sizing a panel system and projecting its financial return
//! - Aggregating everything into one verdict with recommendations
//!
//! The pipeline is synchronous and pure per request: the same bytes and
//! configuration always produce the same report, and concurrent requests
//! share nothing but the immutable configuration. Estimates are
//! illustrative, not engineering-grade.
//!
//! ## Example
//!
//! ```rust,no_run
//! use solarscan::{assess_rooftop, PipelineConfig};
//!
//! let config = PipelineConfig::default_residential();
//! config.validate()?;
//!
//! let bytes = std::fs::read("rooftop.jpg").expect("read image");
//! let report = assess_rooftop(&bytes, &config)?;
//! println!("{:?}: {} panels", report.suitability, report.sizing.panel_count);
//! # Ok::<(), solarscan::AssessmentError>(())
//! ```

pub mod analysis;
pub mod config;
pub mod constants;
pub mod error;
pub mod finance;
pub mod imaging;
pub mod report;
pub mod solar;

pub use analysis::{HeuristicAnalyzer, ImageAnalyzer, RoofEstimate};
pub use config::PipelineConfig;
pub use error::{AssessmentError, Result};
pub use finance::{FinancialModel, Payback, RoiCalculator, RoiResult};
pub use imaging::ImageProperties;
pub use report::{AssessmentReport, ReportAggregator, Suitability};
pub use solar::{PanelSpec, PanelTechnology, SolarCalculator, SystemSizing};

/// Assess a rooftop image with the shipped heuristic analyzer
///
/// This is the main entry point. It runs the full pipeline — property
/// extraction, area estimation, system sizing, ROI projection, and
/// aggregation — and returns the report handed to the presentation layer.
///
/// # Arguments
///
/// * `image_bytes` - Raw JPEG or PNG file contents
/// * `config` - Validated pipeline configuration
///
/// # Errors
///
/// Returns the invalid-image error class if the bytes cannot be decoded or
/// fall outside the configured size limits. Degenerate outcomes (zero
/// panels, zero savings) are reported in the result, not as errors.
pub fn assess_rooftop(image_bytes: &[u8], config: &PipelineConfig) -> Result<AssessmentReport> {
    let analyzer = HeuristicAnalyzer::new(config.area.clone());
    assess_rooftop_with_analyzer(image_bytes, &analyzer, config)
}

/// Assess a rooftop image with a caller-supplied [`ImageAnalyzer`]
///
/// Lets an alternative area-estimation variant (for example a future
/// vision model) replace the heuristic without changing the downstream
/// sizing, ROI, or aggregation stages.
pub fn assess_rooftop_with_analyzer(
    image_bytes: &[u8],
    analyzer: &dyn ImageAnalyzer,
    config: &PipelineConfig,
) -> Result<AssessmentReport> {
    let properties = imaging::extract_properties(image_bytes, &config.image)?;
    let roof = analyzer.estimate_roof(&properties);

    let sizing = SolarCalculator::new(config.solar.clone()).size_system(roof.usable_area_sqft);
    let roi = RoiCalculator::new(config.financial.clone()).project(&sizing);

    let aggregator =
        ReportAggregator::new(config.report.clone(), config.area.obstruction_force_threshold);
    Ok(aggregator.aggregate(properties, roof, sizing, roi))
}
