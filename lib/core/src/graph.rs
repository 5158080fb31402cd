// City and road model - nodes and weighted undirected edges
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub type CityId = u64;
pub type RoadId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A road joins two distinct cities and can be driven both ways.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub id: RoadId,
    pub city_a: CityId,
    pub city_b: CityId,
    pub length: f64,
}

impl City {
    /// Validates and normalizes the attributes of a city that is about to be created.
    /// Returns the trimmed name.
    pub fn validate(name: &str, latitude: f64, longitude: f64) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("city name must not be empty".to_string()));
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::Validation(format!(
                "latitude must be within [-90, 90], got {latitude}"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::Validation(format!(
                "longitude must be within [-180, 180], got {longitude}"
            )));
        }
        Ok(name.to_string())
    }
}

impl Road {
    #[inline]
    #[must_use]
    pub fn touches(&self, city: CityId) -> bool {
        self.city_a == city || self.city_b == city
    }

    /// The far end of the road when entering from `city`.
    #[inline]
    #[must_use]
    pub fn other_end(&self, city: CityId) -> CityId {
        if self.city_a == city {
            self.city_b
        } else {
            self.city_a
        }
    }

    pub fn validate_length(length: f64) -> Result<()> {
        if !length.is_finite() || length <= 0.0 {
            return Err(Error::Validation(format!(
                "road length must be a positive number, got {length}"
            )));
        }
        Ok(())
    }
}
