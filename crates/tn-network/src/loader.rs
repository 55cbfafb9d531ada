//! CSV network loader.
//!
//! # CSV format
//!
//! Two files: one row per city, one row per route.
//!
//! ```csv
//! city_id,name,latitude,longitude
//! 34,London,51.5072,-0.1276
//! 43,Paris,48.8566,2.3522
//! 48,Rotterdam,,
//! ```
//!
//! ```csv
//! city_a,city_b,distance_km,route_type,accessible
//! 34,43,467,land,true
//! 43,48,517,land,
//! 34,48,,sea,false
//! ```
//!
//! | Column        | Notes                                                    |
//! |---------------|----------------------------------------------------------|
//! | `latitude`    | Optional; must be given together with `longitude`.       |
//! | `distance_km` | Optional when both cities have coordinates: the          |
//! |               | great-circle distance is used instead.                   |
//! | `route_type`  | `land` or `sea`.                                         |
//! | `accessible`  | Optional, `true`/`false`; empty means `true`.            |
//!
//! Unlike [`TradeNetwork::add_connection`], which creates missing endpoints
//! on the fly, the loader rejects a route naming a city absent from the city
//! file with [`NetworkError::UnknownCity`]: in a data file that is almost
//! always a typo.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use tn_core::{CityId, GeoPoint, RouteType};

use crate::network::{CityInfo, TradeNetwork};
use crate::{NetworkError, NetworkResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CityRecord {
    city_id:   u32,
    name:      String,
    #[serde(default)]
    latitude:  Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

#[derive(Deserialize)]
struct RouteRecord {
    city_a:      u32,
    city_b:      u32,
    #[serde(default)]
    distance_km: Option<f64>,
    route_type:  String,
    #[serde(default)]
    accessible:  Option<bool>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a network from a city CSV file and a route CSV file.
pub fn load_network_csv(cities: &Path, routes: &Path) -> NetworkResult<TradeNetwork> {
    let cities_file = std::fs::File::open(cities)?;
    let routes_file = std::fs::File::open(routes)?;
    load_network_reader(cities_file, routes_file)
}

/// Like [`load_network_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or for data embedded in
/// the binary.
pub fn load_network_reader<C: Read, R: Read>(cities: C, routes: R) -> NetworkResult<TradeNetwork> {
    let mut network = TradeNetwork::new();
    read_cities(&mut network, cities)?;
    read_routes(&mut network, routes)?;

    info!(
        cities = network.city_count(),
        routes = network.route_count(),
        closed = network.route_count() - network.accessible_route_count(),
        "trade network loaded"
    );
    Ok(network)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn read_cities<R: Read>(network: &mut TradeNetwork, reader: R) -> NetworkResult<()> {
    for result in csv_reader(reader).deserialize::<CityRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        let city_id = CityId(row.city_id);

        let location = match (row.latitude, row.longitude) {
            (Some(lat), Some(lon)) => {
                let pos = GeoPoint::new(lat, lon);
                if !pos.is_valid() {
                    return Err(NetworkError::Parse(format!(
                        "{city_id} has out-of-range coordinates {pos}"
                    )));
                }
                Some(pos)
            }
            (None, None) => None,
            _ => {
                return Err(NetworkError::Parse(format!(
                    "{city_id} must give both latitude and longitude, or neither"
                )));
            }
        };

        network.add_city(city_id, CityInfo { name: row.name, location, ..CityInfo::default() });
    }
    Ok(())
}

fn read_routes<R: Read>(network: &mut TradeNetwork, reader: R) -> NetworkResult<()> {
    for result in csv_reader(reader).deserialize::<RouteRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        let (a, b) = (CityId(row.city_a), CityId(row.city_b));

        let pos_a = network.city(a).ok_or(NetworkError::UnknownCity(a))?.location;
        let pos_b = network.city(b).ok_or(NetworkError::UnknownCity(b))?.location;

        let route_type: RouteType = row.route_type.parse()?;

        let distance_km = match (row.distance_km, pos_a, pos_b) {
            (Some(d), _, _) => d,
            (None, Some(pa), Some(pb)) => pa.distance_km(pb),
            (None, _, _) => {
                return Err(NetworkError::InvalidRoute(format!(
                    "route {a}–{b} has no distance and its cities lack coordinates"
                )));
            }
        };

        network.add_connection(a, b, distance_km, route_type, row.accessible.unwrap_or(true))?;
    }
    Ok(())
}
