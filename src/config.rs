//! Configuration structures for the solarscan assessment pipeline.
//!
//! This module defines all tunable parameters for rooftop assessment,
//! organized into logical groups for image acceptance, area estimation,
//! solar production, financials, and verdict thresholds.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use solarscan::PipelineConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = PipelineConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = PipelineConfig::default_residential();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The whole tree is immutable once validated at startup; concurrent
//! assessment requests may share a reference without synchronization, or
//! carry their own copies for per-region pricing.

use serde::{Deserialize, Serialize};

use crate::constants::{area, finance, limits, obstruction, report, solar};
use crate::error::{AssessmentError, Result};
use crate::finance::FinancialModel;
use crate::solar::PanelTechnology;

/// Complete pipeline configuration for a rooftop assessment.
///
/// Can be serialized to/from JSON for reproducible runs and per-region
/// overrides. Call [`PipelineConfig::validate`] once at startup; malformed
/// entries are a fatal [`AssessmentError::Configuration`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Image acceptance limits
    pub image: ImageConfig,

    /// Roof area estimation parameters
    pub area: AreaConfig,

    /// Solar production parameters
    pub solar: SolarConfig,

    /// Financial knowledge base
    pub financial: FinancialModel,

    /// Verdict and recommendation thresholds
    pub report: ReportConfig,
}

/// Image acceptance limits.
///
/// Images outside these bounds fail fast with the invalid-image error class
/// before any pixel work happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Minimum accepted width and height in pixels
    pub min_dimension: u32,

    /// Maximum accepted width and height in pixels
    pub max_dimension: u32,

    /// Maximum accepted payload size in bytes
    pub max_bytes: usize,
}

/// Roof area estimation parameters.
///
/// Controls the heuristic mapping from image properties to usable area.
/// The estimate is always clamped to `[min_usable_area_sqft,
/// max_usable_area_sqft]` to avoid degenerate outputs from extreme images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaConfig {
    /// Rooftop footprint implied by a typical overhead shot (sq ft)
    pub implied_footprint_sqft: f64,

    /// Fraction of the footprint usable on an ideal unobstructed image
    pub base_usable_fraction: f64,

    /// Lower clamp for the usable-area estimate (sq ft)
    pub min_usable_area_sqft: f64,

    /// Upper clamp for the usable-area estimate (sq ft)
    pub max_usable_area_sqft: f64,

    /// Obstruction ratio at or above which the verdict is forced Not Suitable
    pub obstruction_force_threshold: f64,
}

/// Solar production parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolarConfig {
    /// Panel technology to size the system with
    pub technology: PanelTechnology,

    /// Fraction of usable area coverable after spacing and setbacks (0–1)
    pub packing_efficiency: f64,

    /// Standardized annual equivalent full-sun hours
    pub annual_sun_hours: f64,

    /// System derate for inverter, wiring, and soiling losses (0–1)
    pub system_derate: f64,
}

/// Verdict and recommendation thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Minimum overall confidence for any positive verdict (0–1)
    pub min_confidence: f64,

    /// Width of the Borderline band above `min_confidence`
    pub borderline_band: f64,

    /// Payback periods longer than this trigger a financing recommendation
    pub payback_warning_years: f64,
}

impl PipelineConfig {
    /// Create the default configuration (US residential averages)
    pub fn default_residential() -> Self {
        Self {
            image: ImageConfig {
                min_dimension: limits::MIN_DIMENSION,
                max_dimension: limits::MAX_DIMENSION,
                max_bytes: limits::MAX_IMAGE_BYTES,
            },
            area: AreaConfig {
                implied_footprint_sqft: area::IMPLIED_FOOTPRINT_SQFT,
                base_usable_fraction: area::BASE_USABLE_FRACTION,
                min_usable_area_sqft: area::MIN_USABLE_AREA_SQFT,
                max_usable_area_sqft: area::MAX_USABLE_AREA_SQFT,
                obstruction_force_threshold: obstruction::FORCE_THRESHOLD,
            },
            solar: SolarConfig {
                technology: PanelTechnology::Monocrystalline,
                packing_efficiency: solar::DEFAULT_PACKING_EFFICIENCY,
                annual_sun_hours: solar::DEFAULT_ANNUAL_SUN_HOURS,
                system_derate: solar::DEFAULT_SYSTEM_DERATE,
            },
            financial: FinancialModel {
                cost_per_watt: finance::DEFAULT_COST_PER_WATT,
                federal_tax_credit_rate: finance::DEFAULT_TAX_CREDIT_RATE,
                average_electricity_rate: finance::DEFAULT_ELECTRICITY_RATE,
                net_metering_rate: finance::DEFAULT_NET_METERING_RATE,
                permit_and_labor_overhead: finance::DEFAULT_PERMIT_AND_LABOR_OVERHEAD,
                self_consumption_cap_kwh: None,
            },
            report: ReportConfig {
                min_confidence: report::DEFAULT_MIN_CONFIDENCE,
                borderline_band: report::DEFAULT_BORDERLINE_BAND,
                payback_warning_years: report::DEFAULT_PAYBACK_WARNING_YEARS,
            },
        }
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Validate the configuration at process startup.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::Configuration`] naming the first offending
    /// parameter. A config that passes here keeps every downstream arithmetic
    /// path defined for its full input domain.
    pub fn validate(&self) -> Result<()> {
        if self.image.min_dimension == 0 {
            return Err(AssessmentError::configuration(
                "image.min_dimension",
                "must be positive",
            ));
        }
        if self.image.max_dimension < self.image.min_dimension {
            return Err(AssessmentError::configuration(
                "image.max_dimension",
                "must be at least image.min_dimension",
            ));
        }
        if self.image.max_bytes == 0 {
            return Err(AssessmentError::configuration(
                "image.max_bytes",
                "must be positive",
            ));
        }

        check_positive("area.implied_footprint_sqft", self.area.implied_footprint_sqft)?;
        check_unit_open("area.base_usable_fraction", self.area.base_usable_fraction)?;
        if self.area.min_usable_area_sqft < 0.0 {
            return Err(AssessmentError::configuration(
                "area.min_usable_area_sqft",
                "must be non-negative",
            ));
        }
        if self.area.max_usable_area_sqft < self.area.min_usable_area_sqft {
            return Err(AssessmentError::configuration(
                "area.max_usable_area_sqft",
                "must be at least area.min_usable_area_sqft",
            ));
        }
        check_unit_closed(
            "area.obstruction_force_threshold",
            self.area.obstruction_force_threshold,
        )?;

        check_unit_open("solar.packing_efficiency", self.solar.packing_efficiency)?;
        check_positive("solar.annual_sun_hours", self.solar.annual_sun_hours)?;
        check_unit_open("solar.system_derate", self.solar.system_derate)?;

        check_non_negative("financial.cost_per_watt", self.financial.cost_per_watt)?;
        check_unit_closed(
            "financial.federal_tax_credit_rate",
            self.financial.federal_tax_credit_rate,
        )?;
        check_non_negative(
            "financial.average_electricity_rate",
            self.financial.average_electricity_rate,
        )?;
        check_non_negative(
            "financial.net_metering_rate",
            self.financial.net_metering_rate,
        )?;
        check_non_negative(
            "financial.permit_and_labor_overhead",
            self.financial.permit_and_labor_overhead,
        )?;
        if let Some(cap) = self.financial.self_consumption_cap_kwh {
            check_non_negative("financial.self_consumption_cap_kwh", cap)?;
        }

        check_unit_closed("report.min_confidence", self.report.min_confidence)?;
        check_non_negative("report.borderline_band", self.report.borderline_band)?;
        check_positive("report.payback_warning_years", self.report.payback_warning_years)?;

        Ok(())
    }
}

fn check_positive(parameter: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AssessmentError::configuration(parameter, "must be positive"))
    }
}

fn check_non_negative(parameter: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AssessmentError::configuration(parameter, "must be non-negative"))
    }
}

fn check_unit_open(parameter: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(AssessmentError::configuration(parameter, "must be in (0, 1]"))
    }
}

fn check_unit_closed(parameter: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AssessmentError::configuration(parameter, "must be in [0, 1]"))
    }
}
