//! `tn-economy` — the records that sit on top of the trade network.
//!
//! Cities and companies are plain data with a handful of derived fields; the
//! registry keeps company names and tickers unique.  [`logistics`] is the
//! glue that turns a company's shipping preference into a network query.
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`city`]      | `City`                                            |
//! | [`company`]   | `Company`, `CompanyRecord`, `CompanyStatus`       |
//! | [`registry`]  | `Registry`                                        |
//! | [`logistics`] | `plan_shipment`, `Shipment`, `ShippingPriority`   |
//! | [`error`]     | `EconomyError`, `EconomyResult<T>`                |

pub mod city;
pub mod company;
pub mod error;
pub mod logistics;
pub mod registry;

#[cfg(test)]
mod tests;

pub use city::City;
pub use company::{Company, CompanyRecord, CompanyStatus};
pub use error::{EconomyError, EconomyResult};
pub use logistics::{plan_shipment, Shipment, ShippingPriority};
pub use registry::Registry;
