//! Image decoding and property extraction
//!
//! This module turns raw uploaded bytes into the simple image-derived
//! signals the rest of the pipeline works from: resolution, mean brightness,
//! contrast, and a coarse non-roof obstruction ratio.

pub mod extractor;
pub mod properties;

pub use extractor::extract_properties;
pub use properties::ImageProperties;
