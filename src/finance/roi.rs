//! ROI calculation over the static financial knowledge base
//!
//! The projection is simple and non-discounted: `savings_25yr` is
//! `annual_savings * 25 − net_cost` with no inflation, rate escalation, or
//! discounting applied. Zero-savings and zero-cost paths return explicit
//! sentinel states ([`Payback::Unavailable`], `roi_percent: None`) rather
//! than erroring; they are expected business outcomes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::finance;
use crate::solar::SystemSizing;

/// Static financial knowledge base.
///
/// Loaded and validated once at startup; immutable thereafter and safe for
/// unsynchronized concurrent reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialModel {
    /// Installed cost per DC watt, USD
    pub cost_per_watt: f64,
    /// Federal investment tax credit rate (0–1)
    pub federal_tax_credit_rate: f64,
    /// Average retail electricity rate, USD per kWh
    pub average_electricity_rate: f64,
    /// Net-metering credit rate for exported production, USD per kWh
    pub net_metering_rate: f64,
    /// Flat permitting and labor overhead, USD
    pub permit_and_labor_overhead: f64,
    /// Annual self-consumption threshold in kWh; production above it earns
    /// the net-metering rate instead of the retail rate. `None` means no cap.
    #[serde(default)]
    pub self_consumption_cap_kwh: Option<f64>,
}

/// Payback period, with an explicit state for "savings never recoup cost"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "years", rename_all = "snake_case")]
pub enum Payback {
    /// Net cost is recouped after this many years
    Years(f64),
    /// Annual savings are zero; no payback exists
    Unavailable,
}

impl Payback {
    /// Payback in years, if one exists
    pub fn years(&self) -> Option<f64> {
        match self {
            Payback::Years(y) => Some(*y),
            Payback::Unavailable => None,
        }
    }

    /// True when no payback exists
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Payback::Unavailable)
    }
}

/// Financial projection for a sized system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    /// Gross installation cost, USD
    pub installation_cost: f64,
    /// Cost after the federal tax credit, USD
    pub net_cost: f64,
    /// First-year energy savings, USD
    pub annual_savings: f64,
    /// Years to recoup the net cost, or unavailable
    pub payback: Payback,
    /// Cumulative 25-year savings net of cost, USD (may be negative when
    /// lifetime savings never recoup the net cost)
    pub savings_25yr: f64,
    /// Return on investment over 25 years as a percentage; `None` when the
    /// net cost is zero and the ratio is undefined
    pub roi_percent: Option<f64>,
}

/// ROI calculator over a fixed financial model.
pub struct RoiCalculator {
    model: FinancialModel,
}

impl RoiCalculator {
    /// Create a calculator for the given knowledge base
    pub fn new(model: FinancialModel) -> Self {
        Self { model }
    }

    /// Project costs and savings for a sized system.
    ///
    /// Defined for the full input domain: a zero-capacity system yields
    /// zero savings, an unavailable payback, and an ROI that reflects the
    /// unrecovered overhead.
    pub fn project(&self, sizing: &SystemSizing) -> RoiResult {
        let installation_cost = sizing.capacity_kw * 1000.0 * self.model.cost_per_watt
            + self.model.permit_and_labor_overhead;
        let net_cost = installation_cost * (1.0 - self.model.federal_tax_credit_rate);

        let annual_savings = self.annual_savings(sizing.annual_production_kwh);

        let payback = if annual_savings > 0.0 {
            Payback::Years(net_cost / annual_savings)
        } else {
            Payback::Unavailable
        };

        let savings_25yr = annual_savings * finance::SAVINGS_HORIZON_YEARS - net_cost;
        let roi_percent = if net_cost > 0.0 {
            Some(savings_25yr / net_cost * 100.0)
        } else {
            None
        };

        debug!(
            installation_cost,
            net_cost, annual_savings, savings_25yr, "projected ROI"
        );

        RoiResult {
            installation_cost,
            net_cost,
            annual_savings,
            payback,
            savings_25yr,
            roi_percent,
        }
    }

    /// First-year savings, applying the optional net-metering cap
    fn annual_savings(&self, production_kwh: f64) -> f64 {
        match self.model.self_consumption_cap_kwh {
            Some(cap) if production_kwh > cap => {
                cap * self.model.average_electricity_rate
                    + (production_kwh - cap) * self.model.net_metering_rate
            }
            _ => production_kwh * self.model.average_electricity_rate,
        }
    }
}
