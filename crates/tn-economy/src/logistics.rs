//! Shipment planning: pick a route through the trade network according to a
//! company's shipping preference and price it.

use tracing::debug;

use tn_core::{CityId, ShippingRates};
use tn_network::{SharedNetwork, TradePath};

use crate::company::Company;
use crate::EconomyResult;

/// Which path query a shipper runs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShippingPriority {
    /// Minimise distance (`shortest_path`).
    Fastest,
    /// Minimise mode-weighted cost (`cheapest_path`).
    Cheapest,
}

/// A planned shipment: the route plus both of its measures.
#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    pub path:        TradePath,
    pub priority:    ShippingPriority,
    pub distance_km: f64,
    pub cost:        f64,
}

/// Plan a shipment from `from` to `to`.
///
/// The path query and its pricing run under one read lock, so both measures
/// describe the same accessibility state.
///
/// # Errors
///
/// Propagates [`tn_network::NetworkError`]; `NoPathFound` means the
/// destination is currently cut off.
pub fn plan_shipment(
    network: &SharedNetwork,
    from: CityId,
    to: CityId,
    priority: ShippingPriority,
    rates: &ShippingRates,
) -> EconomyResult<Shipment> {
    let net = network.read();

    let path = match priority {
        ShippingPriority::Fastest  => net.shortest_path(from, to)?,
        ShippingPriority::Cheapest => net.cheapest_path_with(from, to, rates)?,
    };
    let distance_km = net.path_distance(&path.cities)?;
    let cost        = net.path_cost(&path.cities, rates)?;

    debug!(%from, %to, ?priority, hops = path.hops(), distance_km, cost, "shipment planned");
    Ok(Shipment { path, priority, distance_km, cost })
}

impl Company {
    /// Plan a shipment from this company's home city using its own shipping
    /// preference.
    pub fn plan_shipment(
        &self,
        network: &SharedNetwork,
        to: CityId,
        rates: &ShippingRates,
    ) -> EconomyResult<Shipment> {
        plan_shipment(network, self.city(), to, self.shipping_priority(), rates)
    }
}
