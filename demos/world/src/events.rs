//! Random world events that close and reopen routes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use tn_core::CityId;
use tn_network::{SharedNetwork, TradeNetwork};

#[derive(Copy, Clone, Debug)]
pub enum WorldEvent {
    /// A storm or blockade shuts the route.
    Closure { a: CityId, b: CityId },
    /// The route is passable again.
    Reopening { a: CityId, b: CityId },
}

impl WorldEvent {
    pub fn apply(self, network: &SharedNetwork) {
        match self {
            WorldEvent::Closure { a, b }   => network.set_accessibility(a, b, false),
            WorldEvent::Reopening { a, b } => network.set_accessibility(a, b, true),
        }
    }
}

/// Seeded event source: the same seed always yields the same event sequence
/// for the same network.
pub struct EventGenerator {
    rng:           SmallRng,
    reopen_chance: f64,
}

impl EventGenerator {
    pub fn new(seed: u64, reopen_chance: f64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed), reopen_chance }
    }

    /// Pick a random route and decide what happens to it.  `None` when the
    /// network has no routes or a closed route stays closed.
    pub fn draw(&mut self, network: &TradeNetwork) -> Option<WorldEvent> {
        if network.route_count() == 0 {
            return None;
        }
        let pick = self.rng.gen_range(0..network.route_count());
        let (_, route) = network.routes().nth(pick)?;
        let (a, b) = (route.a, route.b);

        if route.accessible {
            Some(WorldEvent::Closure { a, b })
        } else if self.rng.gen_bool(self.reopen_chance) {
            Some(WorldEvent::Reopening { a, b })
        } else {
            None
        }
    }
}
