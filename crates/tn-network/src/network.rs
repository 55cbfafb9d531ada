//! Trade network representation.
//!
//! # Data layout
//!
//! Cities live in a `BTreeMap` keyed by [`CityId`] so iteration is always in
//! ascending id order.  Each city keeps the [`RouteId`]s of its incident
//! routes in insertion order; the routes themselves sit in one `Vec`
//! indexed by `RouteId`.  An `FxHashMap` keyed by the normalised
//! `(min, max)` city pair guarantees at most one route per unordered pair.
//!
//! ```text
//! cities[c].routes = [r0, r3, …]      routes[r] = Route { a, b, distance_km, … }
//! pair_index[(min(a,b), max(a,b))] = r
//! ```
//!
//! Nothing is ever removed.  The only field that changes after construction
//! is [`Route::accessible`], via [`TradeNetwork::set_accessibility`].

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use tn_core::{CityId, GeoPoint, RouteId, RouteType};

use crate::{NetworkError, NetworkResult};

// ── CityInfo ──────────────────────────────────────────────────────────────────

/// Caller-supplied payload attached to a city node.
///
/// The routing engine stores and returns this verbatim; it never reads it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityInfo {
    /// Display name.  Empty for nodes auto-created by `add_connection`.
    pub name: String,
    pub location: Option<GeoPoint>,
    /// Free-form metadata (country, continent, …).
    pub tags: BTreeMap<String, String>,
}

impl CityInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// An undirected connection between two cities.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// First endpoint, as given when the route was added.
    pub a: CityId,
    /// Second endpoint.
    pub b: CityId,
    /// Length in kilometres, the same in both directions.
    pub distance_km: f64,
    pub route_type: RouteType,
    /// `false` while the route is closed (blockade, storm, …).
    pub accessible: bool,
}

impl Route {
    /// The endpoint opposite `from`.  If `from` is not an endpoint, `a` is
    /// returned.
    #[inline]
    pub fn other(&self, from: CityId) -> CityId {
        if from == self.a { self.b } else { self.a }
    }

    /// `true` if this route joins `x` and `y`, in either direction.
    pub fn connects(&self, x: CityId, y: CityId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

// ── TradeNetwork ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
struct CityNode {
    info:   CityInfo,
    routes: Vec<RouteId>,
}

/// Undirected graph of cities and the land/sea routes between them.
///
/// Path queries live in [`crate::router`]; share across threads with
/// [`crate::SharedNetwork`].
#[derive(Clone, Debug, Default)]
pub struct TradeNetwork {
    cities:     BTreeMap<CityId, CityNode>,
    routes:     Vec<Route>,
    pair_index: FxHashMap<(CityId, CityId), RouteId>,
}

#[inline]
fn pair_key(a: CityId, b: CityId) -> (CityId, CityId) {
    if a <= b { (a, b) } else { (b, a) }
}

impl TradeNetwork {
    /// Construct an empty network with no cities or routes.
    ///
    /// Every path query against an empty network fails with
    /// [`NetworkError::NoPathFound`].
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert a city, or replace the payload of an existing one.
    ///
    /// Replacing never touches the city's routes.
    pub fn add_city(&mut self, city_id: CityId, info: CityInfo) {
        match self.cities.get_mut(&city_id) {
            Some(node) => {
                debug!(%city_id, name = %info.name, "city payload replaced");
                node.info = info;
            }
            None => {
                trace!(%city_id, name = %info.name, "city added");
                self.cities.insert(city_id, CityNode { info, routes: Vec::new() });
            }
        }
    }

    /// Insert the route between `a` and `b`, or overwrite its attributes if
    /// one already exists (it keeps its `RouteId` and adjacency position).
    ///
    /// Endpoints that have not been added yet are created as bare cities
    /// with a default [`CityInfo`].
    ///
    /// # Errors
    ///
    /// [`NetworkError::InvalidRoute`] if `a == b` or `distance_km` is not a
    /// positive finite number.  The network is left unchanged.
    pub fn add_connection(
        &mut self,
        a: CityId,
        b: CityId,
        distance_km: f64,
        route_type: RouteType,
        accessible: bool,
    ) -> NetworkResult<RouteId> {
        if a == b {
            return Err(NetworkError::InvalidRoute(format!(
                "{a} cannot be connected to itself"
            )));
        }
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(NetworkError::InvalidRoute(format!(
                "distance between {a} and {b} must be positive, got {distance_km}"
            )));
        }

        if let Some(&id) = self.pair_index.get(&pair_key(a, b)) {
            let route = &mut self.routes[id.index()];
            route.distance_km = distance_km;
            route.route_type  = route_type;
            route.accessible  = accessible;
            debug!(%a, %b, distance_km, %route_type, accessible, "route replaced");
            return Ok(id);
        }

        let id = RouteId::try_from(self.routes.len())
            .map_err(|_| NetworkError::InvalidRoute("route table is full".into()))?;

        self.ensure_city(a);
        self.ensure_city(b);

        self.routes.push(Route { a, b, distance_km, route_type, accessible });
        self.pair_index.insert(pair_key(a, b), id);
        for end in [a, b] {
            if let Some(node) = self.cities.get_mut(&end) {
                node.routes.push(id);
            }
        }

        trace!(%a, %b, distance_km, %route_type, accessible, "route added");
        Ok(id)
    }

    /// Shorthand for an accessible [`add_connection`](Self::add_connection).
    pub fn connect(
        &mut self,
        a: CityId,
        b: CityId,
        distance_km: f64,
        route_type: RouteType,
    ) -> NetworkResult<RouteId> {
        self.add_connection(a, b, distance_km, route_type, true)
    }

    /// Open or close the route between `a` and `b`.
    ///
    /// Does nothing if no such route exists: no error is raised and no route
    /// is created, so callers cannot tell a missing route from one already
    /// in the requested state.
    pub fn set_accessibility(&mut self, a: CityId, b: CityId, accessible: bool) {
        match self.pair_index.get(&pair_key(a, b)) {
            Some(&id) => {
                self.routes[id.index()].accessible = accessible;
                debug!(%a, %b, accessible, "route accessibility set");
            }
            None => trace!(%a, %b, accessible, "accessibility change ignored: no such route"),
        }
    }

    fn ensure_city(&mut self, city_id: CityId) {
        self.cities.entry(city_id).or_insert_with(|| {
            debug!(%city_id, "bare city auto-created for route endpoint");
            CityNode::default()
        });
    }

    // ── Cities ────────────────────────────────────────────────────────────

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn contains_city(&self, city_id: CityId) -> bool {
        self.cities.contains_key(&city_id)
    }

    /// The payload stored for `city_id`, exactly as it was supplied.
    pub fn city(&self, city_id: CityId) -> Option<&CityInfo> {
        self.cities.get(&city_id).map(|n| &n.info)
    }

    /// All city ids in ascending order.
    pub fn city_ids(&self) -> impl Iterator<Item = CityId> + '_ {
        self.cities.keys().copied()
    }

    /// All cities with their payloads, in ascending id order.
    pub fn cities(&self) -> impl Iterator<Item = (CityId, &CityInfo)> + '_ {
        self.cities.iter().map(|(&id, n)| (id, &n.info))
    }

    /// First city (lowest id) whose name matches exactly.
    pub fn find_city(&self, name: &str) -> Option<CityId> {
        self.cities
            .iter()
            .find(|(_, n)| n.info.name == name)
            .map(|(&id, _)| id)
    }

    // ── Routes ────────────────────────────────────────────────────────────

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Number of routes currently open.
    pub fn accessible_route_count(&self) -> usize {
        self.routes.iter().filter(|r| r.accessible).count()
    }

    /// The route joining `a` and `b` (order does not matter).
    pub fn route(&self, a: CityId, b: CityId) -> Option<&Route> {
        self.pair_index
            .get(&pair_key(a, b))
            .map(|id| &self.routes[id.index()])
    }

    pub fn route_by_id(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.index())
    }

    /// `None` if there is no route between `a` and `b`.
    pub fn is_accessible(&self, a: CityId, b: CityId) -> Option<bool> {
        self.route(a, b).map(|r| r.accessible)
    }

    /// All routes in insertion order.
    pub fn routes(&self) -> impl Iterator<Item = (RouteId, &Route)> + '_ {
        self.routes
            .iter()
            .enumerate()
            .map(|(i, r)| (RouteId(i as u32), r))
    }

    /// Route ids incident to `city_id`, in insertion order.  Empty for an
    /// unknown city.
    pub fn incident_routes(&self, city_id: CityId) -> &[RouteId] {
        self.cities
            .get(&city_id)
            .map(|n| n.routes.as_slice())
            .unwrap_or(&[])
    }

    /// Cities directly connected to `city_id`, whether or not the connecting
    /// route is currently accessible.
    pub fn neighbors(&self, city_id: CityId) -> impl Iterator<Item = CityId> + '_ {
        self.incident_routes(city_id)
            .iter()
            .map(move |id| self.routes[id.index()].other(city_id))
    }

    /// Number of routes touching `city_id`.
    pub fn degree(&self, city_id: CityId) -> usize {
        self.incident_routes(city_id).len()
    }
}
