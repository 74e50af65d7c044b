//! Assessment report aggregation
//!
//! Stage 5 of the pipeline: blend per-stage confidences into one overall
//! score, decide the suitability verdict, and emit ordered qualitative
//! recommendations.

pub mod aggregator;

pub use aggregator::{AssessmentReport, ReportAggregator, Suitability};
