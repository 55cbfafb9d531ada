//! Demo configuration, optionally read from a JSON file.
//!
//! ```json
//! {
//!   "seed": 7,
//!   "rates": { "land_cost_per_km": 1.0, "sea_cost_per_km": 2.5 },
//!   "events": 25,
//!   "reopen_chance": 0.4,
//!   "queries": [["London", "Vienna"], ["Lagos", "Cape Town"]]
//! }
//! ```
//!
//! Missing keys fall back to [`DemoConfig::default`].

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use tn_core::ShippingRates;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Seed for the world-event generator.
    pub seed:          u64,
    pub rates:         ShippingRates,
    /// Number of world events to draw.
    pub events:        usize,
    /// Probability that drawing a closed route reopens it.
    pub reopen_chance: f64,
    /// City-name pairs to route between.
    pub queries:       Vec<(String, String)>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed:          42,
            rates:         ShippingRates::default(),
            events:        20,
            reopen_chance: 0.3,
            queries: [
                ("London", "Vienna"),
                ("Lagos", "Cape Town"),
                ("Chicago", "Mexico City"),
                ("Beijing", "Moscow"),
                ("London", "Tokyo"),
            ]
            .into_iter()
            .map(|(a, b)| (a.to_owned(), b.to_owned()))
            .collect(),
        }
    }
}

impl DemoConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.rates.validate()?;
        anyhow::ensure!(
            (0.0..=1.0).contains(&config.reopen_chance),
            "reopen_chance must be within 0..=1, got {}",
            config.reopen_chance
        );
        Ok(config)
    }
}
