//! Panel catalog and solar potential calculation
//!
//! Stage 3 of the pipeline: given a usable-area estimate and a panel
//! technology, compute how many panels fit, nameplate capacity, and
//! estimated annual production.

pub mod panels;
pub mod sizing;

pub use panels::{PanelSpec, PanelTechnology};
pub use sizing::{SolarCalculator, SystemSizing};
