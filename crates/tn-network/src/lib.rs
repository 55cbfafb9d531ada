//! `tn-network` — the trade network: cities, routes, and path queries.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`network`] | `TradeNetwork`, `CityInfo`, `Route`                          |
//! | [`router`]  | `shortest_path` / `cheapest_path`, `Weighting`, `TradePath`  |
//! | [`shared`]  | `SharedNetwork` (`Arc<RwLock<TradeNetwork>>`)                |
//! | [`world`]   | Default 60-city world topology                               |
//! | [`loader`]  | `load_network_csv`, `load_network_reader`                    |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | `SharedNetwork::shortest_paths` runs on the Rayon pool.    |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.         |

pub mod error;
pub mod loader;
pub mod network;
pub mod router;
pub mod shared;
pub mod world;


pub use error::{NetworkError, NetworkResult};
pub use loader::{load_network_csv, load_network_reader};
pub use network::{CityInfo, Route, TradeNetwork};
pub use router::{ByDistance, ByShippingCost, TradePath, Weighting};
pub use shared::SharedNetwork;
pub use world::default_network;
