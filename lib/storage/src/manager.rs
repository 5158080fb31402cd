use parking_lot::RwLock;
use roadnet_core::{
    find_path, City, CityId, Record, RecordBook, RecordId, Result, Road, RoadId, RoadNetwork,
    ShortestPath,
};
use std::path::Path;
use tracing::{debug, info};

use crate::seed::SeedData;

/// Owns the process-wide state and serializes access to it.
///
/// The whole road network sits behind one reader-writer lock: mutations hold
/// the write side, listings and path queries hold the read side for their
/// full duration. Records live behind a lock of their own.
pub struct StorageManager {
    network: RwLock<RoadNetwork>,
    records: RwLock<RecordBook>,
}

impl Default for StorageManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageManager {
    pub fn new() -> Self {
        Self {
            network: RwLock::new(RoadNetwork::new()),
            records: RwLock::new(RecordBook::new()),
        }
    }

    /// Build a manager pre-populated from a JSON seed file
    pub fn with_seed<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let seed = SeedData::load(path)?;
        let manager = Self::new();
        let (cities, roads) = seed.apply(&mut manager.network.write())?;
        info!(path = %path.display(), cities, roads, "Seed data loaded");
        Ok(manager)
    }

    // ==================== Cities ====================

    pub fn create_city(&self, name: &str, latitude: f64, longitude: f64) -> Result<City> {
        let city = self.network.write().create_city(name, latitude, longitude)?;
        info!(id = city.id, name = %city.name, "City created");
        Ok(city)
    }

    pub fn delete_city(&self, id: CityId) -> Result<City> {
        let (city, dropped) = self.network.write().delete_city(id)?;
        info!(id, name = %city.name, roads_dropped = dropped, "City deleted");
        Ok(city)
    }

    #[must_use]
    pub fn list_cities(&self) -> Vec<City> {
        self.network.read().list_cities()
    }

    pub fn city_by_name(&self, name: &str) -> Result<City> {
        self.network.read().city_by_name(name).cloned()
    }

    // ==================== Roads ====================

    pub fn create_road(&self, city_a: CityId, city_b: CityId, length: f64) -> Result<Road> {
        let road = self.network.write().create_road(city_a, city_b, length)?;
        info!(id = road.id, city_a, city_b, length, "Road created");
        Ok(road)
    }

    pub fn delete_road(&self, id: RoadId) -> Result<Road> {
        let road = self.network.write().delete_road(id)?;
        info!(id, "Road deleted");
        Ok(road)
    }

    #[must_use]
    pub fn list_roads(&self) -> Vec<Road> {
        self.network.read().list_roads()
    }

    // ==================== Paths ====================

    pub fn find_path(&self, from: &str, to: &str) -> Result<ShortestPath> {
        let network = self.network.read();
        let path = find_path(&network, from, to)?;
        debug!(from, to, hops = path.cities.len(), length = path.length, "Path found");
        Ok(path)
    }

    // ==================== Records ====================

    pub fn create_record(&self, name: &str, phone: &str) -> Result<Record> {
        let record = self.records.write().insert(name, phone)?;
        info!(id = record.id, "Record created");
        Ok(record)
    }

    pub fn update_record(&self, id: RecordId, name: &str, phone: &str) -> Result<Record> {
        self.records.write().update(id, name, phone)
    }

    pub fn delete_record(&self, id: RecordId) -> Result<Record> {
        self.records.write().remove(id)
    }

    pub fn get_record(&self, id: RecordId) -> Result<Record> {
        self.records.read().get(id)
    }

    #[must_use]
    pub fn list_records(&self, name: Option<&str>) -> Vec<Record> {
        self.records.read().list(name)
    }

    /// Counts of cities, roads and records
    #[must_use]
    pub fn stats(&self) -> (usize, usize, usize) {
        let network = self.network.read();
        (network.city_count(), network.road_count(), self.records.read().len())
    }
}
