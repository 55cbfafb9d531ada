//! Trade-network error type.

use thiserror::Error;

use tn_core::{CityId, CoreError};

/// Errors produced by `tn-network`.
///
/// [`NoPathFound`](NetworkError::NoPathFound) is an ordinary outcome in a
/// world simulation (a blockade can cut a city off); callers are expected to
/// match on it rather than treat it as fatal.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// No accessible route joins the two cities, or one of them is not in
    /// the network at all.
    #[error("no accessible path from {from} to {to}")]
    NoPathFound { from: CityId, to: CityId },

    #[error("{0} not found in network")]
    UnknownCity(CityId),

    #[error("no route between {a} and {b}")]
    UnknownRoute { a: CityId, b: CityId },

    #[error("invalid route: {0}")]
    InvalidRoute(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("network parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NetworkError {
    /// `true` for the "currently unroutable" outcome.
    pub fn is_no_path(&self) -> bool {
        matches!(self, NetworkError::NoPathFound { .. })
    }
}

impl From<CoreError> for NetworkError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidArgument(msg) => NetworkError::InvalidArgument(msg),
            CoreError::Parse(msg)           => NetworkError::Parse(msg),
        }
    }
}

pub type NetworkResult<T> = Result<T, NetworkError>;
