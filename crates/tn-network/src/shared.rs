//! Thread-safe handle to a [`TradeNetwork`].
//!
//! # Locking discipline
//!
//! One `parking_lot::RwLock` guards the whole graph.  Path queries hold the
//! read lock for the full search, so a query never sees an accessibility
//! toggle half-applied; toggles and graph edits take the write lock.  Many
//! queries may run in parallel.
//!
//! ```
//! use tn_core::{CityId, RouteType};
//! use tn_network::{SharedNetwork, TradeNetwork};
//!
//! let shared = SharedNetwork::new(TradeNetwork::new());
//! shared.add_connection(CityId(1), CityId(2), 500.0, RouteType::Land, true).unwrap();
//!
//! let worker = shared.clone();
//! let handle = std::thread::spawn(move || worker.shortest_path(CityId(1), CityId(2)));
//! assert!(handle.join().unwrap().is_ok());
//!
//! shared.set_accessibility(CityId(1), CityId(2), false);
//! assert!(shared.shortest_path(CityId(1), CityId(2)).unwrap_err().is_no_path());
//! ```

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tn_core::{CityId, RouteId, RouteType, ShippingRates};

use crate::network::{CityInfo, TradeNetwork};
use crate::router::TradePath;
use crate::NetworkResult;

/// Cloneable, `Send + Sync` handle to one shared [`TradeNetwork`].
#[derive(Clone, Default)]
pub struct SharedNetwork {
    inner: Arc<RwLock<TradeNetwork>>,
}

impl SharedNetwork {
    pub fn new(network: TradeNetwork) -> Self {
        Self { inner: Arc::new(RwLock::new(network)) }
    }

    /// Read guard for several lookups that must agree with each other.
    pub fn read(&self) -> RwLockReadGuard<'_, TradeNetwork> {
        self.inner.read()
    }

    /// Write guard for applying several changes atomically (e.g. every route
    /// closed by one storm).
    pub fn write(&self) -> RwLockWriteGuard<'_, TradeNetwork> {
        self.inner.write()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    pub fn add_city(&self, city_id: CityId, info: CityInfo) {
        self.inner.write().add_city(city_id, info);
    }

    pub fn add_connection(
        &self,
        a: CityId,
        b: CityId,
        distance_km: f64,
        route_type: RouteType,
        accessible: bool,
    ) -> NetworkResult<RouteId> {
        self.inner.write().add_connection(a, b, distance_km, route_type, accessible)
    }

    pub fn set_accessibility(&self, a: CityId, b: CityId, accessible: bool) {
        self.inner.write().set_accessibility(a, b, accessible);
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn shortest_path(&self, start: CityId, end: CityId) -> NetworkResult<TradePath> {
        self.inner.read().shortest_path(start, end)
    }

    pub fn cheapest_path(
        &self,
        start: CityId,
        end: CityId,
        land_cost_per_km: f64,
        sea_cost_per_km: f64,
    ) -> NetworkResult<TradePath> {
        self.inner
            .read()
            .cheapest_path(start, end, land_cost_per_km, sea_cost_per_km)
    }

    pub fn cheapest_path_with(
        &self,
        start: CityId,
        end: CityId,
        rates: &ShippingRates,
    ) -> NetworkResult<TradePath> {
        self.inner.read().cheapest_path_with(start, end, rates)
    }

    /// Shortest paths for a batch of `(start, end)` pairs, all answered from
    /// the same accessibility state.  Results are in input order.
    ///
    /// With the `parallel` feature the pairs are searched on the Rayon pool.
    pub fn shortest_paths(&self, pairs: &[(CityId, CityId)]) -> Vec<NetworkResult<TradePath>> {
        let guard = self.inner.read();
        batch_shortest(&guard, pairs)
    }

    /// Recover the network if this is the last handle.
    pub fn try_into_inner(self) -> Result<TradeNetwork, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl From<TradeNetwork> for SharedNetwork {
    fn from(network: TradeNetwork) -> Self {
        Self::new(network)
    }
}

#[cfg(feature = "parallel")]
fn batch_shortest(network: &TradeNetwork, pairs: &[(CityId, CityId)]) -> Vec<NetworkResult<TradePath>> {
    use rayon::prelude::*;
    pairs
        .par_iter()
        .map(|&(s, e)| network.shortest_path(s, e))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn batch_shortest(network: &TradeNetwork, pairs: &[(CityId, CityId)]) -> Vec<NetworkResult<TradePath>> {
    pairs
        .iter()
        .map(|&(s, e)| network.shortest_path(s, e))
        .collect()
}
