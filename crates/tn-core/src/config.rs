//! Shipping cost configuration.

use crate::{CoreError, CoreResult, RouteType};

/// Per-kilometre freight rates used by cheapest-path queries.
///
/// Typically loaded from a JSON/TOML file by the application and passed to
/// `TradeNetwork::cheapest_path_with`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShippingRates {
    /// Cost per km over land (typically the cheaper mode).
    pub land_cost_per_km: f64,
    /// Cost per km by sea.
    pub sea_cost_per_km: f64,
}

impl ShippingRates {
    pub fn new(land_cost_per_km: f64, sea_cost_per_km: f64) -> Self {
        Self { land_cost_per_km, sea_cost_per_km }
    }

    /// Reject negative or non-finite rates.  A negative rate would produce
    /// negative edge weights, which shortest-path search cannot handle.
    pub fn validate(&self) -> CoreResult<()> {
        for (label, rate) in [
            ("land_cost_per_km", self.land_cost_per_km),
            ("sea_cost_per_km", self.sea_cost_per_km),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(CoreError::InvalidArgument(format!(
                    "{label} must be a non-negative finite number, got {rate}"
                )));
            }
        }
        Ok(())
    }

    /// Rate for one kilometre of the given mode.
    #[inline]
    pub fn per_km(&self, mode: RouteType) -> f64 {
        match mode {
            RouteType::Land => self.land_cost_per_km,
            RouteType::Sea  => self.sea_cost_per_km,
        }
    }

    /// Cost of moving `distance_km` by `mode`.
    #[inline]
    pub fn cost(&self, distance_km: f64, mode: RouteType) -> f64 {
        distance_km * self.per_km(mode)
    }
}

impl Default for ShippingRates {
    fn default() -> Self {
        Self { land_cost_per_km: 1.0, sea_cost_per_km: 2.0 }
    }
}
