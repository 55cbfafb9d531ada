//! Route mode shared by the network and the cost model.

use std::str::FromStr;

use crate::CoreError;

/// How goods travel along a route.
///
/// Shortest-path queries ignore the mode; cheapest-path queries price each
/// kilometre by it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RouteType {
    /// Road or rail.
    Land,
    /// Shipping lane.
    Sea,
}

impl RouteType {
    /// Lower-case label, as used in CSV files.
    pub fn as_str(self) -> &'static str {
        match self {
            RouteType::Land => "land",
            RouteType::Sea  => "sea",
        }
    }
}

impl FromStr for RouteType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "land" | "Land" | "LAND" => Ok(RouteType::Land),
            "sea" | "Sea" | "SEA"    => Ok(RouteType::Sea),
            other => Err(CoreError::Parse(format!(
                "invalid route type {other:?}: expected \"land\" or \"sea\""
            ))),
        }
    }
}

impl std::fmt::Display for RouteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
