//! Unit tests for tn-economy.

use std::collections::BTreeMap;

use tn_core::{CityId, CompanyId, GeoPoint};

use crate::{City, CompanyRecord};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn goods(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
    pairs.iter().map(|&(k, v)| (k.to_owned(), v)).collect()
}

fn london() -> City {
    City {
        id:                CityId(34),
        name:              "London".into(),
        country:           "United Kingdom".into(),
        continent:         "Europe".into(),
        location:          GeoPoint::new(51.5072, -0.1276),
        population:        50,
        wealth:            99,
        industrialisation: 32,
        stability:         81,
        connectivity:      73,
        resources:         goods(&[("Livestock", 1_000_000)]),
        companies:         vec![],
        corporation_tax:   0.25,
        transit_fee:       0.02,
    }
}

/// A steel maker running at full capacity and paying a quarterly dividend.
fn steel_maker() -> CompanyRecord {
    CompanyRecord {
        company_id:            CompanyId(1),
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

// ── City ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod city {
    use tn_core::CompanyId;
    use tn_network::TradeNetwork;
    use super::london;

    #[test]
    fn registers_payload_in_network() {
        let city = london();
        let mut net = TradeNetwork::new();
        city.register_in(&mut net);

        let info = net.city(city.id).unwrap();
        assert_eq!(info.name, "London");
        assert_eq!(info.location, Some(city.location));
        assert_eq!(info.tags.get("country").map(String::as_str), Some("United Kingdom"));
        assert_eq!(info.tags.get("continent").map(String::as_str), Some("Europe"));
    }

    #[test]
    fn host_company_is_idempotent() {
        let mut city = london();
        city.host_company(CompanyId(1));
        city.host_company(CompanyId(1));
        city.host_company(CompanyId(2));
        assert_eq!(city.companies, vec![CompanyId(1), CompanyId(2)]);
    }
}

// ── Company ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod company {
    use super::{goods, london, steel_maker};
    use crate::company::efficiency_pct;
    use crate::{Company, CompanyStatus, ShippingPriority};

    #[test]
    fn derived_fields() {
        let c = Company::new(steel_maker(), &london());
        assert_eq!(c.efficiency(), 100.0);
        assert_eq!(c.status(), CompanyStatus::Operational);
        assert_eq!(c.profit_before_tax(), 5_197.5);
        assert_eq!(c.net_profit(), 5_197.5 * 0.75);
        assert_eq!(c.market_cap(), 2_500_000.0);
        assert_eq!(c.city(), london().id);
        assert_eq!(c.id().0, 1);
    }

    #[test]
    fn efficiency_over_capacity_products_only() {
        let outputs  = goods(&[("Steel", 20), ("Slag", 1_000)]);
        let capacity = goods(&[("Steel", 50), ("Rebar", 50)]);
        assert_eq!(efficiency_pct(&outputs, &capacity), 20.0);
        assert_eq!(efficiency_pct(&outputs, &goods(&[])), 0.0);
    }

    #[test]
    fn efficiency_with_huge_quantities_does_not_overflow() {
        let outputs  = goods(&[("Steel", u64::MAX), ("Rebar", u64::MAX)]);
        let capacity = goods(&[("Steel", u64::MAX), ("Rebar", u64::MAX)]);
        assert_eq!(efficiency_pct(&outputs, &capacity), 100.0);
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(CompanyStatus::from_efficiency(100.0), CompanyStatus::Operational);
        assert_eq!(CompanyStatus::from_efficiency(90.0), CompanyStatus::Operational);
        assert_eq!(CompanyStatus::from_efficiency(89.9), CompanyStatus::Limited);
        assert_eq!(CompanyStatus::from_efficiency(0.5), CompanyStatus::Limited);
        assert_eq!(CompanyStatus::from_efficiency(0.0), CompanyStatus::Idle);
    }

    #[test]
    fn set_outputs_recomputes_status() {
        let mut c = Company::new(steel_maker(), &london());
        c.set_outputs(goods(&[("Steel", 10)]));
        assert_eq!(c.efficiency(), 20.0);
        assert_eq!(c.status(), CompanyStatus::Limited);
        c.set_outputs(goods(&[]));
        assert_eq!(c.status(), CompanyStatus::Idle);
    }

    #[test]
    fn recompute_after_finance_change() {
        let mut c = Company::new(steel_maker(), &london());
        c.record.revenue = 1_000.0;
        c.record.share_price = 6.0;
        c.recompute();
        assert_eq!(c.profit_before_tax(), 1_000.0 - 2.5 - 1_300.0);
        assert!(c.net_profit() < 0.0);
        assert_eq!(c.market_cap(), 3_000_000.0);
    }

    #[test]
    fn shipping_priority_follows_preference() {
        let mut record = steel_maker();
        assert_eq!(Company::new(record.clone(), &london()).shipping_priority(), ShippingPriority::Fastest);
        record.prefers_fast_shipping = false;
        assert_eq!(Company::new(record, &london()).shipping_priority(), ShippingPriority::Cheapest);
    }

    #[test]
    fn display_card_with_dividend() {
        let card = Company::new(steel_maker(), &london()).to_string();
        assert!(card.contains("Transatlantic Steel LTD"));
        assert!(card.contains("Ticker              | TSTE"));
        assert!(card.contains("City                | London"));
        assert!(card.contains("Status              | Operational"));
        assert!(card.contains("Pays dividend?      | Yes"));
        assert!(card.contains("Pays every 90 days"));
    }

    #[test]
    fn display_card_without_dividend() {
        let mut record = steel_maker();
        record.pays_dividend = false;
        let card = Company::new(record, &london()).to_string();
        assert!(card.contains("Pays dividend?      | No"));
        assert!(!card.contains("Dividend yield"));
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use tn_core::CompanyId;
    use crate::{EconomyError, Registry};

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut reg = Registry::new();
        assert_eq!(reg.register_company("Transatlantic Steel LTD", "TSTE").unwrap(), CompanyId(1));
        assert_eq!(reg.register_company("Pacific Freight", "PFRT").unwrap(), CompanyId(2));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.name(CompanyId(2)), Some("Pacific Freight"));
        assert_eq!(reg.ticker(CompanyId(1)), Some("TSTE"));
    }

    #[test]
    fn duplicate_name_or_ticker_rejected() {
        let mut reg = Registry::new();
        reg.register_company("Transatlantic Steel LTD", "TSTE").unwrap();

        let err = reg.register_company("Transatlantic Steel LTD", "TSL2").unwrap_err();
        assert!(matches!(err, EconomyError::DuplicateName(_)));
        let err = reg.register_company("Other Steel", "TSTE").unwrap_err();
        assert!(matches!(err, EconomyError::DuplicateTicker(_)));
        assert!(reg.is_taken("Other Steel", "TSTE"));
        assert!(!reg.is_taken("Other Steel", "OTHR"));

        // Rejections do not consume ids.
        assert_eq!(reg.register_company("Other Steel", "OTHR").unwrap(), CompanyId(2));
    }

    #[test]
    fn blank_listing_rejected() {
        let mut reg = Registry::new();
        assert!(matches!(reg.register_company("  ", "ABC"), Err(EconomyError::InvalidListing(_))));
        assert!(matches!(reg.register_company("Acme", ""), Err(EconomyError::InvalidListing(_))));
        assert!(reg.is_empty());
    }

    #[test]
    fn lookup_unknown_id() {
        let reg = Registry::default();
        assert_eq!(reg.name(CompanyId(1)), None);
        assert!(matches!(reg.listing(CompanyId(1)), Err(EconomyError::UnknownCompany(CompanyId(1)))));
    }

    #[test]
    fn find_and_iterate() {
        let mut reg = Registry::new();
        reg.register_company("A Corp", "AAA").unwrap();
        reg.register_company("B Corp", "BBB").unwrap();
        assert_eq!(reg.find_by_ticker("BBB"), Some(CompanyId(2)));
        assert_eq!(reg.listing(CompanyId(1)).unwrap(), ("A Corp", "AAA"));
        let tickers: Vec<_> = reg.iter().map(|(_, _, t)| t).collect();
        assert_eq!(tickers, vec!["AAA", "BBB"]);
    }
}

// ── Logistics ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod logistics {
    use tn_core::{CityId, RouteType, ShippingRates};
    use tn_network::{SharedNetwork, TradeNetwork};
    use super::{london, steel_maker};
    use crate::{plan_shipment, Company, EconomyError, ShippingPriority};

    const A: CityId = CityId(34);
    const B: CityId = CityId(2);
    const C: CityId = CityId(3);

    fn network() -> SharedNetwork {
        let mut net = TradeNetwork::new();
        london().register_in(&mut net);
        net.connect(A, B, 100.0, RouteType::Land).unwrap();
        net.connect(B, C, 100.0, RouteType::Land).unwrap();
        net.connect(A, C, 150.0, RouteType::Sea).unwrap();
        SharedNetwork::new(net)
    }

    #[test]
    fn fastest_and_cheapest_differ() {
        let net = network();
        let rates = ShippingRates::new(1.0, 2.0);

        let fast = plan_shipment(&net, A, C, ShippingPriority::Fastest, &rates).unwrap();
        assert_eq!(fast.path.cities, vec![A, C]);
        assert_eq!(fast.distance_km, 150.0);
        assert_eq!(fast.cost, 300.0);

        let cheap = plan_shipment(&net, A, C, ShippingPriority::Cheapest, &rates).unwrap();
        assert_eq!(cheap.path.cities, vec![A, B, C]);
        assert_eq!(cheap.distance_km, 200.0);
        assert_eq!(cheap.cost, 200.0);
    }

    #[test]
    fn company_uses_its_preference() {
        let net = network();
        let rates = ShippingRates::new(1.0, 2.0);

        let fast = Company::new(steel_maker(), &london());
        assert_eq!(fast.plan_shipment(&net, C, &rates).unwrap().path.cities, vec![A, C]);

        let mut record = steel_maker();
        record.prefers_fast_shipping = false;
        let frugal = Company::new(record, &london());
        assert_eq!(frugal.plan_shipment(&net, C, &rates).unwrap().path.cities, vec![A, B, C]);
    }

    #[test]
    fn cut_off_destination_is_reported() {
        let net = network();
        net.set_accessibility(A, B, false);
        net.set_accessibility(A, C, false);
        let err = plan_shipment(&net, A, C, ShippingPriority::Fastest, &ShippingRates::default())
            .unwrap_err();
        assert!(matches!(err, EconomyError::Network(ref e) if e.is_no_path()));
    }

    #[test]
    fn invalid_rates_rejected() {
        let net = network();
        let err = plan_shipment(&net, A, C, ShippingPriority::Fastest, &ShippingRates::new(-1.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, EconomyError::Network(tn_network::NetworkError::InvalidArgument(_))));
    }
}
