//! Company registry: the single source of company ids, and the guard that
//! keeps names and tickers unique.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use tracing::debug;

use tn_core::CompanyId;

use crate::{EconomyError, EconomyResult};

#[derive(Clone, Debug)]
struct Listing {
    name:   String,
    ticker: String,
}

/// Every company in the simulation, by id.
///
/// Ids start at 1 and never go backwards, even if a company later leaves the
/// simulation.
#[derive(Clone, Debug)]
pub struct Registry {
    listings: BTreeMap<CompanyId, Listing>,
    names:    FxHashSet<String>,
    tickers:  FxHashSet<String>,
    next_id:  u32,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            listings: BTreeMap::new(),
            names:    FxHashSet::default(),
            tickers:  FxHashSet::default(),
            next_id:  1,
        }
    }

    /// Register a company and return its new id.
    ///
    /// # Errors
    ///
    /// - [`EconomyError::InvalidListing`] for a blank name or ticker.
    /// - [`EconomyError::DuplicateName`] / [`EconomyError::DuplicateTicker`]
    ///   if either is already taken.  Nothing is registered and no id is
    ///   consumed.
    pub fn register_company(&mut self, name: &str, ticker: &str) -> EconomyResult<CompanyId> {
        let (name, ticker) = (name.trim(), ticker.trim());
        if name.is_empty() || ticker.is_empty() {
            return Err(EconomyError::InvalidListing(
                "name and ticker must not be blank".into(),
            ));
        }
        if self.names.contains(name) {
            return Err(EconomyError::DuplicateName(name.to_owned()));
        }
        if self.tickers.contains(ticker) {
            return Err(EconomyError::DuplicateTicker(ticker.to_owned()));
        }

        let id = CompanyId(self.next_id);
        self.next_id += 1;

        self.names.insert(name.to_owned());
        self.tickers.insert(ticker.to_owned());
        self.listings.insert(id, Listing { name: name.to_owned(), ticker: ticker.to_owned() });

        debug!(%id, name, ticker, "company registered");
        Ok(id)
    }

    pub fn name(&self, id: CompanyId) -> Option<&str> {
        self.listings.get(&id).map(|l| l.name.as_str())
    }

    pub fn ticker(&self, id: CompanyId) -> Option<&str> {
        self.listings.get(&id).map(|l| l.ticker.as_str())
    }

    /// `(name, ticker)` for a registered id.
    pub fn listing(&self, id: CompanyId) -> EconomyResult<(&str, &str)> {
        self.listings
            .get(&id)
            .map(|l| (l.name.as_str(), l.ticker.as_str()))
            .ok_or(EconomyError::UnknownCompany(id))
    }

    pub fn find_by_ticker(&self, ticker: &str) -> Option<CompanyId> {
        self.listings
            .iter()
            .find(|(_, l)| l.ticker == ticker)
            .map(|(&id, _)| id)
    }

    /// `true` if `name` or `ticker` is already taken.
    pub fn is_taken(&self, name: &str, ticker: &str) -> bool {
        self.names.contains(name.trim()) || self.tickers.contains(ticker.trim())
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// All listings in id order.
    pub fn iter(&self) -> impl Iterator<Item = (CompanyId, &str, &str)> + '_ {
        self.listings
            .iter()
            .map(|(&id, l)| (id, l.name.as_str(), l.ticker.as_str()))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
