use roadnet_core::{CityId, Error, Result, RoadNetwork};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Startup dataset. Roads refer to cities by name.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub cities: Vec<SeedCity>,
    #[serde(default)]
    pub roads: Vec<SeedRoad>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeedCity {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeedRoad {
    pub from: String,
    pub to: String,
    pub length: f64,
}

impl SeedData {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Replays the dataset through the ordinary create operations.
    /// Returns the number of cities and roads added.
    pub fn apply(&self, network: &mut RoadNetwork) -> Result<(usize, usize)> {
        for city in &self.cities {
            network.create_city(&city.name, city.latitude, city.longitude)?;
        }
        for road in &self.roads {
            let a = resolve(network, &road.from)?;
            let b = resolve(network, &road.to)?;
            network.create_road(a, b, road.length)?;
        }
        Ok((self.cities.len(), self.roads.len()))
    }
}

fn resolve(network: &RoadNetwork, name: &str) -> Result<CityId> {
    network
        .city_by_name(name)
        .map(|c| c.id)
        .map_err(|_| Error::Validation(format!("seed road references unknown city '{name}'")))
}
