use crate::graph::{City, CityId, Road, RoadId};
use crate::{Error, Result};
use ahash::AHashMap;
use smallvec::SmallVec;
use std::collections::BTreeMap;

type Incident = SmallVec<[RoadId; 4]>;

/// In-memory graph of cities and the roads between them.
///
/// Ids are handed out monotonically and never reused, so iterating the
/// id-keyed maps yields insertion order. The network itself is not
/// synchronized; callers share it behind a single lock.
#[derive(Debug)]
pub struct RoadNetwork {
    cities: BTreeMap<CityId, City>,
    names: AHashMap<String, CityId>,
    roads: BTreeMap<RoadId, Road>,
    incident: AHashMap<CityId, Incident>,
    next_city_id: CityId,
    next_road_id: RoadId,
}

impl Default for RoadNetwork {
    fn default() -> Self {
        Self {
            cities: BTreeMap::new(),
            names: AHashMap::new(),
            roads: BTreeMap::new(),
            incident: AHashMap::new(),
            next_city_id: 1,
            next_road_id: 1,
        }
    }
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    #[inline]
    #[must_use]
    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Add a city, assigning it the next free id
    pub fn create_city(&mut self, name: &str, latitude: f64, longitude: f64) -> Result<City> {
        let name = City::validate(name, latitude, longitude)?;
        if self.names.contains_key(&name) {
            return Err(Error::CityExists(name));
        }

        let id = self.next_city_id;
        self.next_city_id = id + 1;

        let city = City {
            id,
            name: name.clone(),
            latitude,
            longitude,
        };
        self.names.insert(name, id);
        self.incident.insert(id, Incident::new());
        self.cities.insert(id, city.clone());
        Ok(city)
    }

    /// Remove a city together with every road that touches it
    pub fn delete_city(&mut self, id: CityId) -> Result<(City, usize)> {
        let city = self.cities.remove(&id).ok_or_else(|| Error::unknown_city_id(id))?;
        self.names.remove(&city.name);

        let dropped = self.incident.remove(&id).unwrap_or_default();
        for road_id in &dropped {
            if let Some(road) = self.roads.remove(road_id) {
                let other = road.other_end(id);
                if let Some(list) = self.incident.get_mut(&other) {
                    list.retain(|r| *r != *road_id);
                }
            }
        }

        Ok((city, dropped.len()))
    }

    #[must_use]
    pub fn list_cities(&self) -> Vec<City> {
        self.cities.values().cloned().collect()
    }

    pub fn city(&self, id: CityId) -> Result<&City> {
        self.cities.get(&id).ok_or_else(|| Error::unknown_city_id(id))
    }

    pub fn city_by_name(&self, name: &str) -> Result<&City> {
        self.names
            .get(name)
            .and_then(|id| self.cities.get(id))
            .ok_or_else(|| Error::CityNotFound(name.to_string()))
    }

    /// Connect two existing, distinct cities
    pub fn create_road(&mut self, city_a: CityId, city_b: CityId, length: f64) -> Result<Road> {
        if city_a == city_b {
            return Err(Error::Validation(format!(
                "a road must join two different cities, got {city_a} twice"
            )));
        }
        for id in [city_a, city_b] {
            if !self.cities.contains_key(&id) {
                return Err(Error::Validation(format!("unknown city id {id}")));
            }
        }
        Road::validate_length(length)?;

        let id = self.next_road_id;
        self.next_road_id = id + 1;

        let road = Road {
            id,
            city_a,
            city_b,
            length,
        };
        for end in [city_a, city_b] {
            self.incident.entry(end).or_default().push(id);
        }
        self.roads.insert(id, road.clone());
        Ok(road)
    }

    pub fn delete_road(&mut self, id: RoadId) -> Result<Road> {
        let road = self.roads.remove(&id).ok_or(Error::RoadNotFound(id))?;
        for end in [road.city_a, road.city_b] {
            if let Some(list) = self.incident.get_mut(&end) {
                list.retain(|r| *r != id);
            }
        }
        Ok(road)
    }

    #[must_use]
    pub fn list_roads(&self) -> Vec<Road> {
        self.roads.values().cloned().collect()
    }

    /// Roads touching `city`, in creation order.
    pub fn roads_of(&self, city: CityId) -> impl Iterator<Item = &Road> + '_ {
        self.incident
            .get(&city)
            .into_iter()
            .flat_map(|ids| ids.iter())
            .filter_map(|id| self.roads.get(id))
    }
}
