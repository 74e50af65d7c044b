//! Error types for the solarscan library

use thiserror::Error;

/// Result type alias for solarscan operations
pub type Result<T> = std::result::Result<T, AssessmentError>;

/// Error types for rooftop assessment operations
///
/// Invalid input images are fatal for the single request that supplied them;
/// configuration errors are fatal at startup, before any request runs.
/// Degenerate business outcomes (zero panels, zero savings) are not errors —
/// they surface as sentinel states in the assessment report.
#[derive(Error, Debug)]
pub enum AssessmentError {
    /// Image bytes could not be decoded as JPEG or PNG
    #[error("Failed to decode image: {message}")]
    InvalidImage {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Image is below the minimum resolution for a meaningful estimate
    #[error("Image too small: {width}x{height} (minimum {minimum}x{minimum})")]
    ImageTooSmall {
        width: u32,
        height: u32,
        minimum: u32,
    },

    /// Image exceeds the configured dimension or byte-size cap
    #[error("Image too large: {detail}")]
    ImageTooLarge { detail: String },

    /// Malformed or out-of-range configuration entry
    #[error("Invalid configuration: {parameter}: {reason}")]
    Configuration { parameter: String, reason: String },
}

impl AssessmentError {
    /// Create an invalid-image error with a decoding failure as its source
    pub fn invalid_image<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InvalidImage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error for a named parameter
    pub fn configuration(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Check whether this error belongs to the invalid-image class
    /// (fatal per request rather than at startup)
    pub fn is_invalid_image(&self) -> bool {
        matches!(
            self,
            AssessmentError::InvalidImage { .. }
                | AssessmentError::ImageTooSmall { .. }
                | AssessmentError::ImageTooLarge { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AssessmentError::InvalidImage { .. } => {
                "Could not read the image. Please upload a valid JPEG or PNG file.".to_string()
            }
            AssessmentError::ImageTooSmall { minimum, .. } => {
                format!(
                    "The image is too small to analyze. Please upload an image of at least {}x{} pixels.",
                    minimum, minimum
                )
            }
            AssessmentError::ImageTooLarge { .. } => {
                "The image is too large to analyze. Please upload a smaller file.".to_string()
            }
            AssessmentError::Configuration { .. } => {
                "The assessment service is misconfigured. Please contact support.".to_string()
            }
        }
    }
}
