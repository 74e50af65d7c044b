//! Image property extraction from raw uploaded bytes
//!
//! Decodes JPEG/PNG payloads with the `image` crate and computes, in a
//! single pass over the pixels:
//! - brightness: mean Rec.601 luminance
//! - contrast: standard deviation of luminance
//! - obstruction_ratio: fraction of pixels flagged as non-roof
//!
//! The obstruction detector is a deliberately coarse heuristic, not rooftop
//! segmentation: it bands pixels into vegetation (green-dominant), sky/glare
//! (very bright), and deep shadow (very dark). Treat the ratio as a rough
//! proxy for how much of the frame is not usable roof surface.

use image::RgbImage;
use tracing::debug;

use crate::config::ImageConfig;
use crate::constants::{obstruction, quality};
use crate::error::{AssessmentError, Result};
use crate::imaging::ImageProperties;

/// Extract image properties from raw JPEG or PNG bytes.
///
/// # Arguments
///
/// * `bytes` - Raw image file contents as supplied by the upload collaborator
/// * `config` - Image acceptance limits
///
/// # Returns
///
/// An [`ImageProperties`] record; deterministic for the same input bytes.
///
/// # Errors
///
/// Returns the invalid-image error class if:
/// - The payload exceeds `config.max_bytes`
/// - The bytes cannot be decoded as a supported format
/// - Either dimension is below `config.min_dimension` or above
///   `config.max_dimension`
pub fn extract_properties(bytes: &[u8], config: &ImageConfig) -> Result<ImageProperties> {
    if bytes.len() > config.max_bytes {
        return Err(AssessmentError::ImageTooLarge {
            detail: format!(
                "{} bytes exceeds the {} byte limit",
                bytes.len(),
                config.max_bytes
            ),
        });
    }

    let decoded = image::load_from_memory(bytes)
        .map_err(|e| AssessmentError::invalid_image("unsupported or corrupt image data", e))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    if width < config.min_dimension || height < config.min_dimension {
        return Err(AssessmentError::ImageTooSmall {
            width,
            height,
            minimum: config.min_dimension,
        });
    }
    if width > config.max_dimension || height > config.max_dimension {
        return Err(AssessmentError::ImageTooLarge {
            detail: format!(
                "{}x{} exceeds the maximum dimension of {}",
                width, height, config.max_dimension
            ),
        });
    }

    let (brightness, contrast, obstruction_ratio) = scan_pixels(&rgb);

    debug!(
        width,
        height, brightness, contrast, obstruction_ratio, "extracted image properties"
    );

    Ok(ImageProperties {
        width,
        height,
        brightness,
        contrast,
        obstruction_ratio,
    })
}

/// Single-pass luminance statistics and non-roof pixel count
fn scan_pixels(rgb: &RgbImage) -> (f64, f64, f64) {
    let total = (rgb.width() as f64) * (rgb.height() as f64);
    let mut luma_sum = 0.0_f64;
    let mut luma_sq_sum = 0.0_f64;
    let mut flagged = 0_u64;

    for pixel in rgb.pixels() {
        let [r, g, b] = pixel.0;
        let luma = quality::LUMA_RED * r as f64
            + quality::LUMA_GREEN * g as f64
            + quality::LUMA_BLUE * b as f64;

        luma_sum += luma;
        luma_sq_sum += luma * luma;

        if is_non_roof_pixel(r, g, b, luma) {
            flagged += 1;
        }
    }

    let mean = luma_sum / total;
    let variance = (luma_sq_sum / total - mean * mean).max(0.0);
    let std_dev = variance.sqrt();
    let obstruction_ratio = flagged as f64 / total;

    (mean, std_dev, obstruction_ratio)
}

/// Coarse non-roof banding for a single pixel
fn is_non_roof_pixel(r: u8, g: u8, b: u8, luma: f64) -> bool {
    let margin = obstruction::GREEN_DOMINANCE_MARGIN;
    let vegetation =
        g > r.saturating_add(margin) && g > b.saturating_add(margin);

    vegetation || luma > obstruction::GLARE_LUMA || luma < obstruction::SHADOW_LUMA
}
