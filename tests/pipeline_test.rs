//! Integration tests for the complete assessment pipeline
//!
//! These tests drive `assess_rooftop` end-to-end over synthetic in-memory
//! PNG images covering:
//! - the worked high-quality scenario (area, sizing, and ROI figures)
//! - heavily obstructed and low-quality inputs
//! - the zero-panel small-roof path
//! - determinism, error classes, and report serialization

use image::{Rgb, RgbImage};
use solarscan::{assess_rooftop, AssessmentError, PipelineConfig, Suitability};
use std::io::Cursor;

fn encode_png(img: &RgbImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// High-resolution, neutral-exposure, high-contrast, unobstructed roof shot
fn ideal_roof_image() -> Vec<u8> {
    let img = RgbImage::from_fn(1920, 1440, |x, y| {
        if (x + y) % 2 == 0 {
            Rgb([64, 64, 64])
        } else {
            Rgb([192, 192, 192])
        }
    });
    encode_png(&img)
}

/// Low-resolution frame that is 90% vegetation
fn obstructed_image() -> Vec<u8> {
    let img = RgbImage::from_fn(120, 120, |x, _y| {
        if x < 108 {
            Rgb([40, 160, 40])
        } else {
            Rgb([128, 128, 128])
        }
    });
    encode_png(&img)
}

// ============================================================================
// Scenario A: ideal image
// ============================================================================

#[test]
fn test_ideal_image_full_assessment() {
    let config = PipelineConfig::default_residential();
    let report = assess_rooftop(&ideal_roof_image(), &config).unwrap();

    // Area stage: 2000 sq ft footprint * 0.4 usable * full quality
    assert!((report.roof.usable_area_sqft - 800.0).abs() < 1.0);

    // Sizing: 640 sq ft coverable / 32 sq ft per panel
    assert_eq!(report.sizing.panel_count, 20);
    assert!((report.sizing.capacity_kw - 6.0).abs() < 1e-9);

    // Financials: $20,000 gross, $14,000 after the 30% credit, ~6.2y payback
    assert!((report.roi.installation_cost - 20_000.0).abs() < 1.0);
    assert!((report.roi.net_cost - 14_000.0).abs() < 1.0);
    let payback = report.roi.payback.years().expect("payback should exist");
    assert!((payback - 6.2).abs() < 0.1, "payback was {payback}");

    assert_eq!(report.suitability, Suitability::Suitable);
    assert!(report.overall_confidence > 0.9);
}

// ============================================================================
// Scenario B: low-resolution, heavily obstructed image
// ============================================================================

#[test]
fn test_obstructed_image_not_suitable() {
    let config = PipelineConfig::default_residential();
    let report = assess_rooftop(&obstructed_image(), &config).unwrap();

    assert!(report.image.obstruction_ratio >= 0.8);
    assert!(report.overall_confidence < 0.4);
    assert_eq!(report.suitability, Suitability::NotSuitable);

    // Must suggest a better image
    assert!(
        report
            .recommendations
            .iter()
            .any(|r| r.contains("higher-resolution")),
        "recommendations were: {:?}",
        report.recommendations
    );
}

#[test]
fn test_obstruction_forces_not_suitable_despite_good_signals() {
    // 85% vegetation over an otherwise crisp, well-exposed frame
    let img = RgbImage::from_fn(1920, 1440, |x, y| {
        if x < 1632 {
            Rgb([40, 160, 40])
        } else if (x + y) % 2 == 0 {
            Rgb([64, 64, 64])
        } else {
            Rgb([192, 192, 192])
        }
    });
    let config = PipelineConfig::default_residential();
    let report = assess_rooftop(&encode_png(&img), &config).unwrap();

    assert!(report.image.obstruction_ratio >= 0.8);
    assert_eq!(report.suitability, Suitability::NotSuitable);
}

// ============================================================================
// Scenario C: usable area below one panel footprint
// ============================================================================

#[test]
fn test_tiny_roof_zero_panels_without_arithmetic_errors() {
    let mut config = PipelineConfig::default_residential();
    // A shed-sized roof: clamp the plausible range below one panel footprint
    config.area.min_usable_area_sqft = 10.0;
    config.area.max_usable_area_sqft = 30.0;
    config.validate().unwrap();

    let img = RgbImage::from_pixel(120, 120, Rgb([128, 128, 128]));
    let report = assess_rooftop(&encode_png(&img), &config).unwrap();

    assert_eq!(report.sizing.panel_count, 0);
    assert_eq!(report.sizing.capacity_kw, 0.0);
    assert_eq!(report.roi.annual_savings, 0.0);
    assert!(report.roi.payback.is_unavailable());
    assert_eq!(report.suitability, Suitability::NotSuitable);
}

// ============================================================================
// Determinism and configuration effects
// ============================================================================

#[test]
fn test_identical_bytes_reproduce_identical_reports() {
    let config = PipelineConfig::default_residential();
    let bytes = ideal_roof_image();

    let first = assess_rooftop(&bytes, &config).unwrap();
    let second = assess_rooftop(&bytes, &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_technology_selection_changes_sizing() {
    let bytes = ideal_roof_image();

    let mono_config = PipelineConfig::default_residential();
    let mut thin_config = PipelineConfig::default_residential();
    thin_config.solar.technology = solarscan::PanelTechnology::ThinFilm;

    let mono = assess_rooftop(&bytes, &mono_config).unwrap();
    let thin = assess_rooftop(&bytes, &thin_config).unwrap();

    assert!(thin.sizing.panel_count < mono.sizing.panel_count);
    assert!(thin.sizing.capacity_kw < mono.sizing.capacity_kw);
}

#[test]
fn test_packing_efficiency_scales_panel_count() {
    let bytes = ideal_roof_image();

    let mut half_config = PipelineConfig::default_residential();
    half_config.solar.packing_efficiency = 0.4;

    let full = assess_rooftop(&bytes, &PipelineConfig::default_residential()).unwrap();
    let half = assess_rooftop(&bytes, &half_config).unwrap();

    assert_eq!(full.sizing.panel_count, 20);
    assert_eq!(half.sizing.panel_count, 10);
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_corrupt_bytes_fail_with_invalid_image() {
    let config = PipelineConfig::default_residential();
    let err = assess_rooftop(b"\xff\xd8 definitely not a jpeg", &config).unwrap_err();

    assert!(err.is_invalid_image());
    assert!(err.user_message().contains("JPEG or PNG"));
}

#[test]
fn test_below_minimum_resolution_fails() {
    let config = PipelineConfig::default_residential();
    let img = RgbImage::from_pixel(80, 80, Rgb([128, 128, 128]));
    let err = assess_rooftop(&encode_png(&img), &config).unwrap_err();

    match err {
        AssessmentError::ImageTooSmall {
            width: 80,
            height: 80,
            minimum: 100,
        } => {}
        other => panic!("Expected ImageTooSmall, got: {:?}", other),
    }
}

#[test]
fn test_empty_payload_fails() {
    let config = PipelineConfig::default_residential();
    assert!(assess_rooftop(&[], &config).is_err());
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_report_json_serialization() {
    let config = PipelineConfig::default_residential();
    let report = assess_rooftop(&ideal_roof_image(), &config).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"suitability\":\"suitable\""));
    assert!(json.contains("\"panel_count\""));
    assert!(json.contains("\"overall_confidence\""));
    assert!(json.contains("\"recommendations\""));

    let restored: solarscan::AssessmentReport = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, report);
}
