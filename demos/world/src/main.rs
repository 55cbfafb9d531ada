//! world — the default 60-city trade network under random world events.
//!
//! Builds the bundled world topology, registers one company in London, then
//! closes and reopens routes at random while re-answering a fixed set of
//! routing queries.  Run with `RUST_LOG=debug` to see every toggle and
//! search.
//!
//! ```text
//! cargo run -p world -- [config.json]
//! ```

mod config;
mod events;

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tn_core::{CityId, GeoPoint};
use tn_economy::{City, Company, CompanyRecord, Registry};
use tn_network::world::city_id_by_name;
use tn_network::{default_network, NetworkResult, SharedNetwork, TradePath};

use config::DemoConfig;
use events::EventGenerator;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = DemoConfig::load(config_path.as_deref())?;

    // 1. Build the world.
    let network = SharedNetwork::new(default_network()?);
    {
        let net = network.read();
        info!(cities = net.city_count(), routes = net.route_count(), "default world loaded");
    }

    let pairs = resolve_queries(&config)?;

    // 2. A company to ship for.
    let london = london();
    london.register_in(&mut network.write());

    let mut registry = Registry::new();
    let company_id = registry.register_company("Transatlantic Steel LTD", "TSTE")?;
    let company = Company::new(steel_maker(company_id), &london);
    println!("{company}");

    // 3. Baseline routes.
    println!("=== Baseline ===");
    print_paths(&network, &pairs, network.shortest_paths(&pairs));

    // 4. World events.
    let mut generator = EventGenerator::new(config.seed, config.reopen_chance);
    let mut applied = 0usize;
    for _ in 0..config.events {
        let event = generator.draw(&network.read());
        if let Some(event) = event {
            info!(?event, "world event");
            event.apply(&network);
            applied += 1;
        }
    }
    {
        let net = network.read();
        info!(
            applied,
            closed = net.route_count() - net.accessible_route_count(),
            "world events applied"
        );
    }

    // 5. Re-route under the new conditions.
    println!();
    println!("=== After {applied} world events ===");
    print_paths(&network, &pairs, network.shortest_paths(&pairs));

    println!();
    println!("=== Shipments for {} ===", company.record.ticker);
    for &(_, to) in &pairs {
        let name = city_name(&network, to);
        match company.plan_shipment(&network, to, &config.rates) {
            Ok(s) => println!(
                "  to {:<16} {:>3} hops  {:>8.0} km  cost {:>10.2}  ({:?})",
                name,
                s.path.hops(),
                s.distance_km,
                s.cost,
                s.priority,
            ),
            Err(e) => warn!(destination = %name, error = %e, "shipment cannot be planned"),
        }
    }

    Ok(())
}

fn resolve_queries(config: &DemoConfig) -> Result<Vec<(CityId, CityId)>> {
    config
        .queries
        .iter()
        .map(|(a, b)| -> Result<(CityId, CityId)> {
            let from = city_id_by_name(a).with_context(|| format!("unknown city {a:?}"))?;
            let to   = city_id_by_name(b).with_context(|| format!("unknown city {b:?}"))?;
            Ok((from, to))
        })
        .collect()
}

fn city_name(network: &SharedNetwork, id: CityId) -> String {
    network
        .read()
        .city(id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn print_paths(
    network: &SharedNetwork,
    pairs: &[(CityId, CityId)],
    results: Vec<NetworkResult<TradePath>>,
) {
    for (&(from, to), result) in pairs.iter().zip(results) {
        let label = format!("{} → {}", city_name(network, from), city_name(network, to));
        match result {
            Ok(path) => {
                let stops: Vec<String> = path.cities.iter().map(|&c| city_name(network, c)).collect();
                println!("  {label:<32} {:>8.0} km  {}", path.total, stops.join(" - "));
            }
            Err(e) if e.is_no_path() => println!("  {label:<32} unroutable"),
            Err(e) => println!("  {label:<32} error: {e}"),
        }
    }
}

fn london() -> City {
    City {
        id:                city_id_by_name("London").unwrap_or(CityId(34)),
        name:              "London".into(),
        country:           "United Kingdom".into(),
        continent:         "Europe".into(),
        location:          GeoPoint::new(51.5072, -0.1276),
        population:        50,
        wealth:            99,
        industrialisation: 32,
        stability:         81,
        connectivity:      73,
        resources:         BTreeMap::from([("Livestock".to_owned(), 1_000_000)]),
        companies:         vec![],
        corporation_tax:   0.25,
        transit_fee:       0.02,
    }
}

fn steel_maker(company_id: tn_core::CompanyId) -> CompanyRecord {
    let goods = |pairs: &[(&str, u64)]| -> BTreeMap<String, u64> {
        pairs.iter().map(|&(k, v)| (k.to_owned(), v)).collect()
    };
    CompanyRecord {
        company_id,
        name:                  "Transatlantic Steel LTD".into(),
        ticker:                "TSTE".into(),
        industry:              "Steel".into(),
        ceo_name:              "Cole Cook".into(),
        year_founded:          1966,
        reputation:            0.61,
        inputs:                goods(&[("Iron ore", 500), ("Coal", 50)]),
        outputs:               goods(&[("Steel", 50)]),
        capacity:              goods(&[("Steel", 50)]),
        inventory:             goods(&[("Iron ore", 5_000), ("Coal", 500), ("Steel", 250)]),
        cash:                  25_000_000.0,
        revenue:               6_500.0,
        var_costs:             2.5,
        fixed_costs:           1_300.0,
        shares_outstanding:    500_000,
        share_price:           5.0,
        volatility:            0.19,
        pays_dividend:         true,
        dividend_freq_days:    90,
        dividend_yield:        0.5,
        trade_bias:            0.88,
        sensitivity:           0.23,
        prefers_fast_shipping: true,
    }
}
