//! City record.

use std::collections::BTreeMap;

use tn_core::{CityId, CompanyId, GeoPoint};
use tn_network::{CityInfo, TradeNetwork};

/// A city that hosts companies.
///
/// Statistics are relative scores normalised to 1–100.  Nothing here is
/// validated; the record is whatever the scenario data says it is.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    // ── Identity ──────────────────────────────────────────────────────────
    pub id:        CityId,
    pub name:      String,
    pub country:   String,
    pub continent: String,
    pub location:  GeoPoint,

    // ── Statistics (1–100) ────────────────────────────────────────────────
    pub population:        u8,
    pub wealth:            u8,
    pub industrialisation: u8,
    pub stability:         u8,
    pub connectivity:      u8,

    // ── Trade ─────────────────────────────────────────────────────────────
    /// Resource name → units extractable per day.
    pub resources:       BTreeMap<String, u64>,
    /// Companies headquartered here.
    pub companies:       Vec<CompanyId>,
    /// Corporation tax as a fraction (0.25 = 25 %).
    pub corporation_tax: f64,
    /// Price per unit for moving goods through this city.
    pub transit_fee:     f64,
}

impl City {
    /// The node payload this city contributes to the trade network.
    pub fn network_info(&self) -> CityInfo {
        CityInfo::named(&self.name)
            .with_location(self.location)
            .with_tag("country", &self.country)
            .with_tag("continent", &self.continent)
    }

    /// Add (or refresh) this city's node in `network`.
    pub fn register_in(&self, network: &mut TradeNetwork) {
        network.add_city(self.id, self.network_info());
    }

    /// Record that `company` is based here.  Idempotent.
    pub fn host_company(&mut self, company: CompanyId) {
        if !self.companies.contains(&company) {
            self.companies.push(company);
        }
    }
}
