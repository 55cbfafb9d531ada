//! `tn-core` — foundational types for the `tradenet` workspace.
//!
//! This crate is a dependency of every other `tn-*` crate.  It has no `tn-*`
//! dependencies and a single required external one (`thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module         | Contents                                        |
//! |----------------|-------------------------------------------------|
//! | [`ids`]        | `CityId`, `RouteId`, `CompanyId`                |
//! | [`geo`]        | `GeoPoint`, haversine distance in kilometres    |
//! | [`route_type`] | `RouteType` enum (land / sea)                   |
//! | [`config`]     | `ShippingRates`                                 |
//! | [`error`]      | `CoreError`, `CoreResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod route_type;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ShippingRates;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{CityId, CompanyId, RouteId};
pub use route_type::RouteType;
