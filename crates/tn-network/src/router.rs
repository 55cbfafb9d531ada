//! Path queries: edge weightings and accessibility-aware Dijkstra.
//!
//! # Pluggability
//!
//! Both built-in queries run the same search and differ only in the
//! [`Weighting`] they pass in.  Applications can supply their own (e.g.
//! land-only freight, or a transit-fee surcharge) through
//! [`TradeNetwork::find_path`].
//!
//! # Accessibility
//!
//! The search reads [`Route::accessible`] while relaxing each edge.  There is
//! no filtered copy of the graph, so every query sees the flags as they are
//! at the moment it runs.
//!
//! # Tie-breaking
//!
//! The frontier is a min-heap on `(cost, CityId)`, so among equally cheap
//! cities the lowest id is settled first.  A city's predecessor is replaced
//! only by a strictly cheaper one, and incident routes are scanned in
//! insertion order.  Equal-cost paths therefore resolve to the same answer on
//! every run.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::debug;

use tn_core::{CityId, ShippingRates};

use crate::network::{Route, TradeNetwork};
use crate::{NetworkError, NetworkResult};

// ── TradePath ─────────────────────────────────────────────────────────────────

/// The result of a path query.
#[derive(Debug, Clone, PartialEq)]
pub struct TradePath {
    /// Cities in travel order.  Always starts with the origin and ends with
    /// the destination; a single element when they are the same city.
    pub cities: Vec<CityId>,
    /// Summed weight of the traversed routes (km for shortest-path, currency
    /// for cheapest-path).
    pub total: f64,
}

impl TradePath {
    /// `None` only for a hand-built empty path.
    pub fn origin(&self) -> Option<CityId> {
        self.cities.first().copied()
    }

    pub fn destination(&self) -> Option<CityId> {
        self.cities.last().copied()
    }

    /// Number of routes traversed.
    pub fn hops(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }

    /// `true` if origin and destination are the same city.
    pub fn is_trivial(&self) -> bool {
        self.cities.len() == 1
    }

    pub fn into_cities(self) -> Vec<CityId> {
        self.cities
    }
}

// ── Weighting ─────────────────────────────────────────────────────────────────

/// Per-route cost function for path search.
///
/// Returned weights must be non-negative; a negative or NaN weight fails the
/// query with `InvalidArgument`.  Returning `None` excludes the
/// route from this query, on top of the accessibility filter the search
/// always applies.
pub trait Weighting {
    fn weight(&self, route: &Route) -> Option<f64>;
}

/// Raw distance in kilometres, regardless of mode.
#[derive(Copy, Clone, Debug, Default)]
pub struct ByDistance;

impl Weighting for ByDistance {
    #[inline]
    fn weight(&self, route: &Route) -> Option<f64> {
        Some(route.distance_km)
    }
}

/// Distance multiplied by the per-km rate of the route's mode.
#[derive(Copy, Clone, Debug)]
pub struct ByShippingCost {
    rates: ShippingRates,
}

impl ByShippingCost {
    /// # Errors
    ///
    /// [`NetworkError::InvalidArgument`] for a negative or non-finite rate.
    pub fn new(rates: ShippingRates) -> NetworkResult<Self> {
        rates.validate()?;
        Ok(Self { rates })
    }
}

impl Weighting for ByShippingCost {
    #[inline]
    fn weight(&self, route: &Route) -> Option<f64> {
        Some(self.rates.cost(route.distance_km, route.route_type))
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

impl TradeNetwork {
    /// Minimum-distance path over the currently accessible routes.
    ///
    /// # Errors
    ///
    /// [`NetworkError::NoPathFound`] if the cities are not connected by open
    /// routes, or either of them is not in the network.
    pub fn shortest_path(&self, start: CityId, end: CityId) -> NetworkResult<TradePath> {
        self.find_path(start, end, &ByDistance)
    }

    /// Minimum-cost path over the currently accessible routes, pricing land
    /// and sea kilometres separately.
    ///
    /// # Errors
    ///
    /// [`NetworkError::InvalidArgument`] if either rate is negative (checked
    /// before searching); otherwise as [`shortest_path`](Self::shortest_path).
    pub fn cheapest_path(
        &self,
        start: CityId,
        end: CityId,
        land_cost_per_km: f64,
        sea_cost_per_km: f64,
    ) -> NetworkResult<TradePath> {
        self.cheapest_path_with(start, end, &ShippingRates::new(land_cost_per_km, sea_cost_per_km))
    }

    /// [`cheapest_path`](Self::cheapest_path) taking a [`ShippingRates`] config.
    pub fn cheapest_path_with(
        &self,
        start: CityId,
        end: CityId,
        rates: &ShippingRates,
    ) -> NetworkResult<TradePath> {
        let weighting = ByShippingCost::new(*rates)?;
        self.find_path(start, end, &weighting)
    }

    /// Run the accessibility-filtered search with a custom weighting.
    pub fn find_path<W: Weighting + ?Sized>(
        &self,
        start: CityId,
        end: CityId,
        weighting: &W,
    ) -> NetworkResult<TradePath> {
        let result = dijkstra(self, start, end, weighting);
        match &result {
            Ok(path) => debug!(%start, %end, hops = path.hops(), total = path.total, "path found"),
            Err(e)   => debug!(%start, %end, error = %e, "path query failed"),
        }
        result
    }

    // ── Path evaluation ───────────────────────────────────────────────────

    /// Summed distance along `path`, ignoring accessibility.
    ///
    /// # Errors
    ///
    /// [`NetworkError::UnknownRoute`] if two consecutive cities are not
    /// directly connected.
    pub fn path_distance(&self, path: &[CityId]) -> NetworkResult<f64> {
        self.path_weight(path, &ByDistance)
    }

    /// Summed shipping cost along `path`, ignoring accessibility.
    pub fn path_cost(&self, path: &[CityId], rates: &ShippingRates) -> NetworkResult<f64> {
        self.path_weight(path, &ByShippingCost::new(*rates)?)
    }

    /// Summed weight along `path`.  A route the weighting excludes counts as
    /// missing.
    pub fn path_weight<W: Weighting + ?Sized>(
        &self,
        path: &[CityId],
        weighting: &W,
    ) -> NetworkResult<f64> {
        path.windows(2).try_fold(0.0, |acc, pair| {
            let (a, b) = (pair[0], pair[1]);
            let route = self.route(a, b).ok_or(NetworkError::UnknownRoute { a, b })?;
            let weight = weighting.weight(route).ok_or(NetworkError::UnknownRoute { a, b })?;
            Ok(acc + checked_weight(route, weight)?)
        })
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// `f64` with a total order so it can sit in a `BinaryHeap`.
#[derive(Copy, Clone, Debug)]
struct Cost(f64);

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

fn dijkstra<W: Weighting + ?Sized>(
    network: &TradeNetwork,
    start: CityId,
    end: CityId,
    weighting: &W,
) -> NetworkResult<TradePath> {
    if !network.contains_city(start) || !network.contains_city(end) {
        return Err(NetworkError::NoPathFound { from: start, to: end });
    }
    if start == end {
        return Ok(TradePath { cities: vec![start], total: 0.0 });
    }

    // dist[c] = best known cost to reach c; prev[c] = city that reached c.
    let mut dist: FxHashMap<CityId, f64>    = FxHashMap::default();
    let mut prev: FxHashMap<CityId, CityId> = FxHashMap::default();
    dist.insert(start, 0.0);

    // Reverse turns the max-heap into a min-heap; CityId breaks cost ties.
    let mut heap: BinaryHeap<Reverse<(Cost, CityId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), start)));

    while let Some(Reverse((Cost(cost), city))) = heap.pop() {
        if city == end {
            return Ok(reconstruct(&prev, end, cost));
        }

        // Skip stale heap entries.
        if dist.get(&city).is_some_and(|&best| cost > best) {
            continue;
        }

        for &route_id in network.incident_routes(city) {
            let Some(route) = network.route_by_id(route_id) else { continue };
            if !route.accessible {
                continue;
            }
            let Some(weight) = weighting.weight(route) else { continue };
            let weight = checked_weight(route, weight)?;

            let next     = route.other(city);
            let new_cost = cost + weight;

            if dist.get(&next).is_none_or(|&best| new_cost < best) {
                dist.insert(next, new_cost);
                prev.insert(next, city);
                heap.push(Reverse((Cost(new_cost), next)));
            }
        }
    }

    Err(NetworkError::NoPathFound { from: start, to: end })
}

/// Rejects negative and NaN weights; either would let the search cycle.
fn checked_weight(route: &Route, weight: f64) -> NetworkResult<f64> {
    if weight >= 0.0 {
        Ok(weight)
    } else {
        Err(NetworkError::InvalidArgument(format!(
            "route {}-{} has invalid weight {weight}",
            route.a, route.b
        )))
    }
}

fn reconstruct(prev: &FxHashMap<CityId, CityId>, end: CityId, total: f64) -> TradePath {
    let mut cities = vec![end];
    let mut cur = end;
    while let Some(&p) = prev.get(&cur) {
        cities.push(p);
        cur = p;
    }
    cities.reverse();
    TradePath { cities, total }
}
