//! Default world topology: 60 named cities and the land routes between them.
//!
//! City ids are `1..=60`, assigned in the alphabetical order of
//! [`CITY_NAMES`].  Ids, names, endpoints, and distances are fixed so that
//! runs seeded from the default world stay comparable across versions; do
//! not reorder or edit these tables.
//!
//! Several cities (Auckland, Tokyo, …) have no land route yet and are
//! unreachable until sea lanes are added.

use tn_core::CityId;
use tn_core::RouteType::{self, Land};

use crate::network::{CityInfo, TradeNetwork};
use crate::NetworkResult;

/// City names indexed by `id - 1`.
pub const CITY_NAMES: [&str; 60] = [
    "Abu Dhabi", "Addis Ababa", "Astana", "Athens",
    "Auckland", "Baotou", "Barcelona", "Beijing",
    "Buenos Aires", "Cairo", "Cape Town", "Caracas",
    "Casablanca", "Chicago", "Colombo", "Conakry",
    "Dar es Salaam", "Dhaka", "Hamburg", "Havana",
    "Ho Chi Minh City", "Houston", "Istanbul", "Jakarta",
    "Jeddah", "Johannesburg", "Kinshasa", "Kolkata",
    "Kuwait City", "Kyiv", "Lagos", "Lahore",
    "Lima", "London", "Los Angeles", "Luanda",
    "Manila", "Mexico City", "Montreal", "Moscow",
    "Mumbai", "New York City", "Paris", "Perth",
    "Port Moresby", "Rio de Janeiro", "Rome", "Rotterdam",
    "Saint Petersburg", "Santiago", "Santo Domingo", "São Paulo",
    "Seoul", "Shanghai", "Shenzhen", "Singapore",
    "Tokyo", "Vancouver", "Vienna", "Vladivostok",
];

/// `(city_a, city_b, distance_km, route_type)` for every default route.
///
/// Distances average the road distance and the great-circle distance.
pub const DEFAULT_ROUTES: [(u32, u32, f64, RouteType); 67] = [
    (14, 39,  1_381.0, Land), // Chicago – Montreal
    (14, 42,  1_272.0, Land), // Chicago – New York City
    (22, 14,  1_745.0, Land), // Houston – Chicago
    (22, 38,  1_493.0, Land), // Houston – Mexico City
    (35, 14,  3_413.0, Land), // Los Angeles – Chicago
    (35, 22,  2_492.0, Land), // Los Angeles – Houston
    (35, 38,  2_953.0, Land), // Los Angeles – Mexico City
    (39, 42,    595.0, Land), // Montreal – New York City
    (42, 22,  2_621.0, Land), // New York City – Houston
    (58, 14,  3_505.0, Land), // Vancouver – Chicago
    (58, 35,  2_057.0, Land), // Vancouver – Los Angeles
    ( 9, 52,  2_234.0, Land), // Buenos Aires – São Paulo
    (12, 33,  4_335.0, Land), // Caracas – Lima
    (33, 52,  4_378.0, Land), // Lima – São Paulo
    (50,  9,  1_389.0, Land), // Santiago – Buenos Aires
    (52, 46,    433.0, Land), // São Paulo – Rio de Janeiro
    ( 2, 17,  2_375.0, Land), // Addis Ababa – Dar es Salaam
    (16, 32,  2_715.0, Land), // Conakry – Lahore
    (26, 11,  1_398.0, Land), // Johannesburg – Cape Town
    (26, 17,  3_516.0, Land), // Johannesburg – Dar es Salaam
    (27,  2,  5_080.0, Land), // Kinshasa – Addis Ababa
    (27, 17,  4_099.0, Land), // Kinshasa – Dar es Salaam
    (27, 36,    808.0, Land), // Kinshasa – Luanda
    (32,  2,  5_363.0, Land), // Lahore – Addis Ababa
    (32, 27,  2_937.0, Land), // Lahore – Kinshasa
    (36, 26,  3_179.0, Land), // Luanda – Johannesburg
    ( 3, 29,  4_935.0, Land), // Astana – Kuwait City
    ( 3, 33,  3_541.0, Land), // Astana – Lima
    ( 6,  3,  3_700.0, Land), // Baotou – Astana
    ( 8,  6,    663.0, Land), // Beijing – Baotou
    ( 8, 55,  1_213.0, Land), // Beijing – Shenzhen
    (10, 29,  2_060.0, Land), // Cairo – Kuwait City
    (18, 21,  3_225.0, Land), // Dhaka – Ho Chi Minh City
    (18, 56,  4_540.0, Land), // Dhaka – Singapore
    (23, 10,  2_481.0, Land), // Istanbul – Cairo
    (25,  1,  1_844.0, Land), // Jeddah – Abu Dhabi
    (28, 18,    330.0, Land), // Kolkata – Dhaka
    (28, 33,  2_150.0, Land), // Kolkata – Lima
    (29, 25,  1_530.0, Land), // Kuwait City – Jeddah
    (33, 42,  1_950.0, Land), // Lima – New York City
    (40,  3,  2_704.0, Land), // Moscow – Astana
    (42, 28,  1_901.0, Land), // New York City – Kolkata
    (55,  6,  1_868.0, Land), // Shenzhen – Baotou
    (56,  6,  2_614.0, Land), // Singapore – Baotou
    (56,  8,  2_180.0, Land), // Singapore – Beijing
    (56, 55,  1_508.0, Land), // Singapore – Shenzhen
    (60, 54,  1_200.0, Land), // Vladivostok – Shanghai
    ( 4, 30,  2_145.0, Land), // Athens – Kyiv
    ( 7, 43,  1_035.0, Land), // Barcelona – Paris
    (19,  7,  1_800.0, Land), // Hamburg – Barcelona
    (23, 30,  1_480.0, Land), // Istanbul – Kyiv
    (30, 19,  1_636.0, Land), // Kyiv – Hamburg
    (30, 40,  1_685.0, Land), // Kyiv – Moscow
    (30, 49,  1_938.0, Land), // Kyiv – Saint Petersburg
    (30, 59,  1_331.0, Land), // Kyiv – Vienna
    (34, 43,    467.0, Land), // London – Paris
    (40, 49,    702.0, Land), // Moscow – Saint Petersburg
    (43, 47,  1_457.0, Land), // Paris – Rome
    (43, 48,    517.0, Land), // Paris – Rotterdam
    (43, 59,  1_235.0, Land), // Paris – Vienna
    (47, 19,  1_687.0, Land), // Rome – Hamburg
    (47, 59,  1_100.0, Land), // Rome – Vienna
    (48, 19,    529.0, Land), // Rotterdam – Hamburg
    (59,  4,  1_708.0, Land), // Vienna – Athens
    (59,  7,  1_987.0, Land), // Vienna – Barcelona
    (59, 19,    973.0, Land), // Vienna – Hamburg
    (59, 23,  1_560.0, Land), // Vienna – Istanbul
];

/// Id of a default-world city by exact name.
pub fn city_id_by_name(name: &str) -> Option<CityId> {
    CITY_NAMES
        .iter()
        .position(|&n| n == name)
        .map(|i| CityId(i as u32 + 1))
}

/// Build the default world network, every route accessible.
pub fn default_network() -> NetworkResult<TradeNetwork> {
    let mut network = TradeNetwork::new();

    for (i, name) in CITY_NAMES.iter().enumerate() {
        network.add_city(CityId(i as u32 + 1), CityInfo::named(*name));
    }
    for &(a, b, distance_km, route_type) in DEFAULT_ROUTES.iter() {
        network.connect(CityId(a), CityId(b), distance_km, route_type)?;
    }

    tracing::debug!(
        cities = network.city_count(),
        routes = network.route_count(),
        "default world network built"
    );
    Ok(network)
}
