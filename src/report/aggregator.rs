//! Verdict, confidence blending, and recommendations
//!
//! The aggregator is pure: the same inputs always produce the same report,
//! so identical image bytes and configuration reproduce byte-identical
//! assessments.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::RoofEstimate;
use crate::config::ReportConfig;
use crate::constants::report;
use crate::finance::RoiResult;
use crate::imaging::ImageProperties;
use crate::solar::SystemSizing;

/// Suitability verdict for a rooftop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suitability {
    /// Clears every threshold
    Suitable,
    /// Confidence sits in the band just above the minimum
    Borderline,
    /// A hard condition failed: heavy obstruction, zero panels, or
    /// confidence below the minimum
    NotSuitable,
}

/// The single output artifact handed to the presentation layer.
///
/// Created fresh per analysis request; serializable to JSON; no persisted
/// lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Signals extracted from the uploaded image
    pub image: ImageProperties,
    /// Usable roof area estimate
    pub roof: RoofEstimate,
    /// Panel count, capacity, and production
    pub sizing: SystemSizing,
    /// Cost and savings projection
    pub roi: RoiResult,
    /// Weighted combination of stage confidences (0.0–1.0)
    pub overall_confidence: f64,
    /// Suitability verdict
    pub suitability: Suitability,
    /// Ordered, human-readable recommendations
    pub recommendations: Vec<String>,
}

/// Aggregator for a fixed set of verdict thresholds.
pub struct ReportAggregator {
    config: ReportConfig,
    obstruction_force_threshold: f64,
}

impl ReportAggregator {
    /// Create an aggregator; the obstruction forcing threshold comes from
    /// the area configuration so both stages agree on it
    pub fn new(config: ReportConfig, obstruction_force_threshold: f64) -> Self {
        Self {
            config,
            obstruction_force_threshold,
        }
    }

    /// Combine stage outputs into the final report.
    pub fn aggregate(
        &self,
        image: ImageProperties,
        roof: RoofEstimate,
        sizing: SystemSizing,
        roi: RoiResult,
    ) -> AssessmentReport {
        let overall_confidence = (report::AREA_CONFIDENCE_WEIGHT * roof.confidence
            + report::IMAGE_QUALITY_WEIGHT * image.quality_score())
        .clamp(0.0, 1.0);

        let suitability = self.verdict(&image, &sizing, overall_confidence);
        let recommendations =
            self.recommendations(&image, &sizing, &roi, overall_confidence, suitability);

        debug!(
            overall_confidence,
            ?suitability,
            recommendation_count = recommendations.len(),
            "aggregated assessment"
        );

        AssessmentReport {
            image,
            roof,
            sizing,
            roi,
            overall_confidence,
            suitability,
            recommendations,
        }
    }

    fn verdict(
        &self,
        image: &ImageProperties,
        sizing: &SystemSizing,
        overall_confidence: f64,
    ) -> Suitability {
        // Hard conditions first; any one of them decides the verdict
        if image.obstruction_ratio >= self.obstruction_force_threshold {
            return Suitability::NotSuitable;
        }
        if sizing.panel_count == 0 {
            return Suitability::NotSuitable;
        }
        if overall_confidence < self.config.min_confidence {
            return Suitability::NotSuitable;
        }
        if overall_confidence < self.config.min_confidence + self.config.borderline_band {
            return Suitability::Borderline;
        }
        Suitability::Suitable
    }

    fn recommendations(
        &self,
        image: &ImageProperties,
        sizing: &SystemSizing,
        roi: &RoiResult,
        overall_confidence: f64,
        suitability: Suitability,
    ) -> Vec<String> {
        let mut out = Vec::new();

        if image.obstruction_ratio >= self.obstruction_force_threshold {
            out.push(format!(
                "About {:.0}% of the frame appears obstructed by vegetation, glare, or shadow. \
                 Clear the roof area or supply an unobstructed overhead image.",
                image.obstruction_ratio * 100.0
            ));
        }

        if sizing.panel_count == 0 {
            out.push(
                "The estimated usable area is below a single panel footprint; \
                 a rooftop installation is not practical here."
                    .to_string(),
            );
        }

        if overall_confidence < self.config.min_confidence {
            out.push(
                "Confidence in this estimate is low. Obtain a higher-resolution, \
                 well-lit overhead image for a more reliable assessment."
                    .to_string(),
            );
        } else if image.resolution_score() < 0.5 || image.brightness_score() < 0.5 {
            out.push(
                "Image quality limits the estimate; retaking the photo in even daylight \
                 at a higher resolution would tighten it."
                    .to_string(),
            );
        }

        match roi.payback {
            crate::finance::Payback::Unavailable => {
                if sizing.panel_count > 0 {
                    out.push(
                        "Projected savings never recoup the installation cost under the \
                         current rates."
                            .to_string(),
                    );
                }
            }
            crate::finance::Payback::Years(years) => {
                if years > self.config.payback_warning_years {
                    out.push(format!(
                        "Projected payback of {:.1} years is long; consider financing \
                         options or a smaller system.",
                        years
                    ));
                }
            }
        }

        if suitability == Suitability::Suitable {
            out.push(format!(
                "The roof looks suitable for roughly {} panels ({:.1} kW). \
                 A professional site survey is recommended to confirm.",
                sizing.panel_count, sizing.capacity_kw
            ));
        }

        out.push(
            "These figures are heuristic, illustrative estimates, not an \
             engineering-grade assessment."
                .to_string(),
        );

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::Payback;
    use crate::PipelineConfig;

    fn aggregator() -> ReportAggregator {
        let config = PipelineConfig::default_residential();
        ReportAggregator::new(config.report, config.area.obstruction_force_threshold)
    }

    fn good_image() -> ImageProperties {
        ImageProperties {
            width: 1920,
            height: 1440,
            brightness: 128.0,
            contrast: 64.0,
            obstruction_ratio: 0.0,
        }
    }

    fn good_roof() -> RoofEstimate {
        RoofEstimate {
            usable_area_sqft: 800.0,
            confidence: 1.0,
        }
    }

    fn good_sizing() -> SystemSizing {
        SystemSizing {
            panel_count: 20,
            capacity_kw: 6.0,
            annual_production_kwh: 10_200.0,
        }
    }

    fn good_roi() -> RoiResult {
        RoiResult {
            installation_cost: 20_000.0,
            net_cost: 14_000.0,
            annual_savings: 2244.0,
            payback: Payback::Years(6.24),
            savings_25yr: 42_100.0,
            roi_percent: Some(300.7),
        }
    }

    #[test]
    fn test_clean_assessment_is_suitable() {
        let report = aggregator().aggregate(good_image(), good_roof(), good_sizing(), good_roi());

        assert_eq!(report.suitability, Suitability::Suitable);
        assert!((report.overall_confidence - 1.0).abs() < 1e-9);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("site survey")));
    }

    #[test]
    fn test_obstruction_forces_not_suitable() {
        let mut image = good_image();
        image.obstruction_ratio = 0.85;

        // Everything else is ideal; obstruction alone must decide
        let report = aggregator().aggregate(image, good_roof(), good_sizing(), good_roi());

        assert_eq!(report.suitability, Suitability::NotSuitable);
        assert!(report.recommendations[0].contains("obstructed"));
    }

    #[test]
    fn test_zero_panels_not_suitable() {
        let sizing = SystemSizing {
            panel_count: 0,
            capacity_kw: 0.0,
            annual_production_kwh: 0.0,
        };
        let roi = RoiResult {
            installation_cost: 2000.0,
            net_cost: 1400.0,
            annual_savings: 0.0,
            payback: Payback::Unavailable,
            savings_25yr: -1400.0,
            roi_percent: Some(-100.0),
        };

        let report = aggregator().aggregate(good_image(), good_roof(), sizing, roi);

        assert_eq!(report.suitability, Suitability::NotSuitable);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("below a single panel footprint")));
    }

    #[test]
    fn test_low_confidence_not_suitable_with_image_advice() {
        let image = ImageProperties {
            width: 120,
            height: 120,
            brightness: 40.0,
            contrast: 8.0,
            obstruction_ratio: 0.5,
        };
        let roof = RoofEstimate {
            usable_area_sqft: 200.0,
            confidence: 0.2,
        };

        let report = aggregator().aggregate(image, roof, good_sizing(), good_roi());

        assert!(report.overall_confidence < 0.4);
        assert_eq!(report.suitability, Suitability::NotSuitable);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("higher-resolution")));
    }

    #[test]
    fn test_borderline_band() {
        // Area confidence chosen so the blend lands between 0.4 and 0.55
        let roof = RoofEstimate {
            usable_area_sqft: 500.0,
            confidence: 0.3,
        };
        let report = aggregator().aggregate(good_image(), roof, good_sizing(), good_roi());

        // 0.7 * 0.3 + 0.3 * 1.0 = 0.51
        assert!((report.overall_confidence - 0.51).abs() < 1e-9);
        assert_eq!(report.suitability, Suitability::Borderline);
    }

    #[test]
    fn test_long_payback_suggests_financing() {
        let mut roi = good_roi();
        roi.payback = Payback::Years(18.0);

        let report = aggregator().aggregate(good_image(), good_roof(), good_sizing(), roi);

        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("financing")));
    }

    #[test]
    fn test_aggregation_is_pure() {
        let a = aggregator().aggregate(good_image(), good_roof(), good_sizing(), good_roi());
        let b = aggregator().aggregate(good_image(), good_roof(), good_sizing(), good_roi());
        assert_eq!(a, b);
    }

    #[test]
    fn test_disclaimer_is_always_last() {
        let report = aggregator().aggregate(good_image(), good_roof(), good_sizing(), good_roi());
        assert!(report
            .recommendations
            .last()
            .unwrap()
            .contains("illustrative"));
    }
}
