//! Static panel catalog
//!
//! Illustrative catalog entries for the three supported technologies.
//! The catalog is immutable and process-wide; concurrent requests read it
//! without synchronization.

use serde::{Deserialize, Serialize};

/// Supported panel technologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelTechnology {
    /// Highest efficiency, highest cost (default)
    Monocrystalline,
    /// Mid efficiency and cost
    Polycrystalline,
    /// Lowest efficiency, largest footprint per watt
    ThinFilm,
}

impl Default for PanelTechnology {
    fn default() -> Self {
        PanelTechnology::Monocrystalline
    }
}

/// Static catalog entry for one panel technology.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    /// Panel technology
    pub technology: PanelTechnology,
    /// Module efficiency (0–1)
    pub efficiency: f64,
    /// Installed footprint per panel, including racking clearance (sq ft)
    pub unit_area_sqft: f64,
    /// Nameplate output per panel in watts
    pub wattage_w: f64,
    /// Hardware cost per panel, USD
    pub unit_cost: f64,
    /// Expected service life in years
    pub lifespan_years: u32,
}

impl PanelSpec {
    /// Look up the catalog entry for a technology
    pub fn for_technology(technology: PanelTechnology) -> PanelSpec {
        match technology {
            PanelTechnology::Monocrystalline => PanelSpec {
                technology,
                efficiency: 0.21,
                unit_area_sqft: 32.0,
                wattage_w: 300.0,
                unit_cost: 250.0,
                lifespan_years: 25,
            },
            PanelTechnology::Polycrystalline => PanelSpec {
                technology,
                efficiency: 0.17,
                unit_area_sqft: 32.0,
                wattage_w: 260.0,
                unit_cost: 200.0,
                lifespan_years: 25,
            },
            PanelTechnology::ThinFilm => PanelSpec {
                technology,
                efficiency: 0.12,
                unit_area_sqft: 40.0,
                wattage_w: 180.0,
                unit_cost: 150.0,
                lifespan_years: 20,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_monocrystalline() {
        assert_eq!(PanelTechnology::default(), PanelTechnology::Monocrystalline);
    }

    #[test]
    fn test_catalog_entries_are_sane() {
        for tech in [
            PanelTechnology::Monocrystalline,
            PanelTechnology::Polycrystalline,
            PanelTechnology::ThinFilm,
        ] {
            let spec = PanelSpec::for_technology(tech);
            assert_eq!(spec.technology, tech);
            assert!(spec.efficiency > 0.0 && spec.efficiency < 1.0);
            assert!(spec.unit_area_sqft > 0.0);
            assert!(spec.wattage_w > 0.0);
            assert!(spec.unit_cost > 0.0);
            assert!(spec.lifespan_years > 0);
        }
    }

    #[test]
    fn test_efficiency_ordering() {
        let mono = PanelSpec::for_technology(PanelTechnology::Monocrystalline);
        let poly = PanelSpec::for_technology(PanelTechnology::Polycrystalline);
        let thin = PanelSpec::for_technology(PanelTechnology::ThinFilm);

        assert!(mono.efficiency > poly.efficiency);
        assert!(poly.efficiency > thin.efficiency);
    }

    #[test]
    fn test_technology_serde_names() {
        let json = serde_json::to_string(&PanelTechnology::ThinFilm).unwrap();
        assert_eq!(json, "\"thin_film\"");

        let parsed: PanelTechnology = serde_json::from_str("\"monocrystalline\"").unwrap();
        assert_eq!(parsed, PanelTechnology::Monocrystalline);
    }
}
