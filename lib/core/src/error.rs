use thiserror::Error;

use crate::graph::{CityId, RoadId};
use crate::record::RecordId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("City already exists: {0}")]
    CityExists(String),

    #[error("Road not found: {0}")]
    RoadNotFound(RoadId),

    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    #[error("No route from {from} to {to}")]
    Unreachable { from: String, to: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn unknown_city_id(id: CityId) -> Self {
        Error::CityNotFound(format!("id {id}"))
    }

    /// True for every "no such entity" flavour, including an unreachable target.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::CityNotFound(_)
                | Error::RoadNotFound(_)
                | Error::RecordNotFound(_)
                | Error::Unreachable { .. }
        )
    }
}
