//! Financial modelling and ROI projection
//!
//! Stage 4 of the pipeline: turn system capacity and production into an
//! installation cost, incentive-adjusted net cost, annual savings, payback
//! period, and a simple 25-year projection.

pub mod roi;

pub use roi::{FinancialModel, Payback, RoiCalculator, RoiResult};
