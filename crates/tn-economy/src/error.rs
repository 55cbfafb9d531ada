use thiserror::Error;

use tn_core::CompanyId;
use tn_network::NetworkError;

#[derive(Debug, Error)]
pub enum EconomyError {
    #[error("company name {0:?} is already registered")]
    DuplicateName(String),

    #[error("ticker {0:?} is already registered")]
    DuplicateTicker(String),

    #[error("invalid listing: {0}")]
    InvalidListing(String),

    #[error("{0} is not registered")]
    UnknownCompany(CompanyId),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub type EconomyResult<T> = Result<T, EconomyError>;
