//! System sizing from usable roof area
//!
//! `panel_count = floor(usable_area * packing_efficiency / unit_area)`;
//! capacity follows from nameplate wattage, production from a standardized
//! annual sun-hours factor and a system derate. Zero panels is a valid
//! outcome for small areas, never an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SolarConfig;
use crate::solar::PanelSpec;

/// Sized system for an estimated usable area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemSizing {
    /// Number of panels that fit the coverable area
    pub panel_count: u32,
    /// Nameplate DC capacity in kilowatts
    pub capacity_kw: f64,
    /// Estimated annual production in kilowatt-hours, after derate
    pub annual_production_kwh: f64,
}

/// Solar potential calculator for a fixed configuration and panel spec.
pub struct SolarCalculator {
    config: SolarConfig,
    spec: PanelSpec,
}

impl SolarCalculator {
    /// Create a calculator; the panel spec is looked up from the static
    /// catalog by the configured technology
    pub fn new(config: SolarConfig) -> Self {
        let spec = PanelSpec::for_technology(config.technology);
        Self { config, spec }
    }

    /// The catalog entry this calculator sizes with
    pub fn panel_spec(&self) -> &PanelSpec {
        &self.spec
    }

    /// Size a system for the given usable roof area.
    ///
    /// All outputs are non-negative; `panel_count` is zero whenever the
    /// coverable area is below one panel footprint.
    pub fn size_system(&self, usable_area_sqft: f64) -> SystemSizing {
        let coverable = usable_area_sqft.max(0.0) * self.config.packing_efficiency;
        let panel_count = (coverable / self.spec.unit_area_sqft).floor() as u32;

        let capacity_kw = panel_count as f64 * self.spec.wattage_w / 1000.0;
        let annual_production_kwh =
            capacity_kw * self.config.annual_sun_hours * self.config.system_derate;

        debug!(
            usable_area_sqft,
            panel_count, capacity_kw, annual_production_kwh, "sized system"
        );

        SystemSizing {
            panel_count,
            capacity_kw,
            annual_production_kwh,
        }
    }
}
