//! Company record and its derived fields.
//!
//! A [`Company`] is built from a [`CompanyRecord`] (the raw scenario data)
//! plus its home [`City`], which supplies the corporation tax rate.  Derived
//! fields are recomputed by [`Company::recompute`] whenever production or
//! finances change.

use std::collections::BTreeMap;
use std::fmt;

use tn_core::{CityId, CompanyId};

use crate::city::City;
use crate::logistics::ShippingPriority;

/// Efficiency (in percent) at or above which a company counts as fully
/// operational.
pub const OPERATIONAL_EFFICIENCY_PCT: f64 = 90.0;

// ── CompanyStatus ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompanyStatus {
    /// Producing at or near capacity.
    Operational,
    /// Producing something, but well below capacity.
    Limited,
    /// Producing nothing.
    Idle,
}

impl CompanyStatus {
    /// Classify an efficiency percentage.
    pub fn from_efficiency(efficiency_pct: f64) -> Self {
        if efficiency_pct >= OPERATIONAL_EFFICIENCY_PCT {
            CompanyStatus::Operational
        } else if efficiency_pct > 0.0 {
            CompanyStatus::Limited
        } else {
            CompanyStatus::Idle
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompanyStatus::Operational => "Operational",
            CompanyStatus::Limited     => "Limited",
            CompanyStatus::Idle        => "Idle",
        }
    }
}

impl fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CompanyRecord ─────────────────────────────────────────────────────────────

/// Raw company data as supplied by a scenario.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompanyRecord {
    // ── Identity ──────────────────────────────────────────────────────────
    pub company_id:   CompanyId,
    pub name:         String,
    pub ticker:       String,
    pub industry:     String,
    pub ceo_name:     String,
    pub year_founded: i32,
    /// Public perception, 0 (unfavourable) – 1 (favourable).
    pub reputation:   f64,

    // ── Operations (units per day) ────────────────────────────────────────
    pub inputs:    BTreeMap<String, u64>,
    pub outputs:   BTreeMap<String, u64>,
    /// Maximum attainable output per product.
    pub capacity:  BTreeMap<String, u64>,
    pub inventory: BTreeMap<String, u64>,

    // ── Finances (per day) ────────────────────────────────────────────────
    pub cash:        f64,
    pub revenue:     f64,
    pub var_costs:   f64,
    pub fixed_costs: f64,

    // ── Market ────────────────────────────────────────────────────────────
    pub shares_outstanding: u64,
    pub share_price:        f64,
    /// Scale of random share-price moves, 0 – 1.
    pub volatility:         f64,
    pub pays_dividend:      bool,
    pub dividend_freq_days: u32,
    /// Paid per share on each dividend date.
    pub dividend_yield:     f64,

    // ── Behaviour ─────────────────────────────────────────────────────────
    /// 0 = domestic, 0.5 = both, 1 = international.
    pub trade_bias:            f64,
    /// Sensitivity to world events, 0 – 1.
    pub sensitivity:           f64,
    pub prefers_fast_shipping: bool,
}

// ── Company ───────────────────────────────────────────────────────────────────

/// A company located in a city, with its derived operating and financial
/// figures.
#[derive(Clone, Debug)]
pub struct Company {
    pub record: CompanyRecord,
    city:            CityId,
    city_name:       String,
    corporation_tax: f64,

    efficiency:        f64,
    status:            CompanyStatus,
    profit_before_tax: f64,
    net_profit:        f64,
    market_cap:        f64,

    /// Daily profit samples, oldest first.
    pub profit_history: Vec<f64>,
    /// Share-price samples, oldest first.
    pub price_history:  Vec<f64>,
    /// World and regional events that touched this company.
    pub event_log:      Vec<String>,
}

impl Company {
    pub fn new(record: CompanyRecord, city: &City) -> Self {
        let mut company = Self {
            record,
            city:              city.id,
            city_name:         city.name.clone(),
            corporation_tax:   city.corporation_tax,
            efficiency:        0.0,
            status:            CompanyStatus::Idle,
            profit_before_tax: 0.0,
            net_profit:        0.0,
            market_cap:        0.0,
            profit_history:    Vec::new(),
            price_history:     Vec::new(),
            event_log:         Vec::new(),
        };
        company.recompute();
        company
    }

    /// Refresh every derived field from `record`.
    pub fn recompute(&mut self) {
        let r = &self.record;
        self.efficiency        = efficiency_pct(&r.outputs, &r.capacity);
        self.status            = CompanyStatus::from_efficiency(self.efficiency);
        self.profit_before_tax = r.revenue - r.var_costs - r.fixed_costs;
        self.net_profit        = self.profit_before_tax * (1.0 - self.corporation_tax);
        self.market_cap        = r.shares_outstanding as f64 * r.share_price;
    }

    /// Replace current production and refresh derived fields.
    pub fn set_outputs(&mut self, outputs: BTreeMap<String, u64>) {
        self.record.outputs = outputs;
        self.recompute();
    }

    pub fn id(&self) -> CompanyId {
        self.record.company_id
    }

    /// Home city.
    pub fn city(&self) -> CityId {
        self.city
    }

    /// Output as a percentage of capacity across all products.
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    pub fn status(&self) -> CompanyStatus {
        self.status
    }

    /// `revenue − var_costs − fixed_costs`.
    pub fn profit_before_tax(&self) -> f64 {
        self.profit_before_tax
    }

    /// Profit after the home city's corporation tax.
    pub fn net_profit(&self) -> f64 {
        self.net_profit
    }

    pub fn market_cap(&self) -> f64 {
        self.market_cap
    }

    pub fn shipping_priority(&self) -> ShippingPriority {
        if self.record.prefers_fast_shipping {
            ShippingPriority::Fastest
        } else {
            ShippingPriority::Cheapest
        }
    }
}

/// Summed output over summed capacity, as a percentage.  Products with
/// capacity but no output count as zero; output of products without
/// capacity is ignored.  Zero total capacity gives 0.
pub fn efficiency_pct(outputs: &BTreeMap<String, u64>, capacity: &BTreeMap<String, u64>) -> f64 {
    let (produced, possible) = capacity.iter().fold((0u64, 0u64), |(out, cap), (product, &c)| {
        let made = outputs.get(product).copied().unwrap_or(0);
        (out.saturating_add(made), cap.saturating_add(c))
    });
    if possible == 0 {
        return 0.0;
    }
    produced as f64 / possible as f64 * 100.0
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.record;
        writeln!(f)?;
        writeln!(f, "{}", r.name)?;
        writeln!(f)?;
        writeln!(f, "Company ID          | {}", r.company_id.0)?;
        writeln!(f, "Ticker              | {}", r.ticker)?;
        writeln!(f, "City                | {}", self.city_name)?;
        writeln!(f, "Industry            | {}", r.industry)?;
        writeln!(f, "CEO                 | {}", r.ceo_name)?;
        writeln!(f, "Year Founded        | {}", r.year_founded)?;
        writeln!(f, "Reputation          | {}", r.reputation)?;
        writeln!(f, "Efficiency          | {:.1}%", self.efficiency)?;
        writeln!(f, "Status              | {}", self.status)?;
        writeln!(f, "Profit (before tax) | ${:.2} / day", self.profit_before_tax)?;
        writeln!(f, "Profit (after tax)  | ${:.2} / day", self.net_profit)?;
        writeln!(f, "Outstanding shares  | {}", r.shares_outstanding)?;
        writeln!(f, "Share price         | ${:.2}", r.share_price)?;
        writeln!(f, "Market cap          | ${:.2}", self.market_cap)?;
        if r.pays_dividend {
            writeln!(f, "Pays dividend?      | Yes")?;
            writeln!(f, "Dividend frequency  | Pays every {} days", r.dividend_freq_days)?;
            writeln!(f, "Dividend yield      | ${} per share", r.dividend_yield)
        } else {
            writeln!(f, "Pays dividend?      | No")
        }
    }
}
