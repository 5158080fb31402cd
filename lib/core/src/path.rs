use crate::graph::CityId;
use crate::network::RoadNetwork;
use crate::{Error, Result};
use ahash::AHashMap;
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

/// Minimum-length route between two cities
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    pub cities: Vec<String>,
    pub length: f64,
}

/// Renders one city per line followed by the total length.
impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for city in &self.cities {
            writeln!(f, "{city}")?;
        }
        write!(f, "Path length: {}", self.length)
    }
}

/// Frontier entry. Orders as a min-heap on distance, then on city id.
#[derive(Clone, Copy, PartialEq, Eq)]
struct Candidate {
    dist: OrderedFloat<f64>,
    city: CityId,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.city.cmp(&self.city))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra shortest path between two cities named `from` and `to`.
///
/// Neighbours are relaxed in ascending id order and a predecessor is only
/// replaced by a strictly shorter distance, so among equally short routes the
/// one discovered first wins.
pub fn find_path(network: &RoadNetwork, from: &str, to: &str) -> Result<ShortestPath> {
    let start = network.city_by_name(from)?.id;
    let goal = network.city_by_name(to)?.id;

    let mut dist: AHashMap<CityId, f64> = AHashMap::new();
    let mut prev: AHashMap<CityId, CityId> = AHashMap::new();
    let mut heap = BinaryHeap::new();
    let mut neighbours: Vec<(CityId, f64)> = Vec::with_capacity(8);

    dist.insert(start, 0.0);
    heap.push(Candidate { dist: OrderedFloat(0.0), city: start });

    while let Some(Candidate { dist: OrderedFloat(d), city }) = heap.pop() {
        if city == goal {
            return assemble(network, &prev, start, goal, d);
        }
        // Stale entry, a shorter one was already settled
        if dist.get(&city).is_some_and(|best| d > *best) {
            continue;
        }

        neighbours.clear();
        neighbours.extend(
            network
                .roads_of(city)
                .map(|road| (road.other_end(city), road.length)),
        );
        neighbours.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));

        for &(next, length) in &neighbours {
            let candidate = d + length;
            let improves = dist.get(&next).map_or(true, |known| candidate < *known);
            if improves {
                dist.insert(next, candidate);
                prev.insert(next, city);
                heap.push(Candidate { dist: OrderedFloat(candidate), city: next });
            }
        }
    }

    Err(Error::Unreachable {
        from: from.to_string(),
        to: to.to_string(),
    })
}

fn assemble(
    network: &RoadNetwork,
    prev: &AHashMap<CityId, CityId>,
    start: CityId,
    goal: CityId,
    length: f64,
) -> Result<ShortestPath> {
    let mut ids = vec![goal];
    let mut current = goal;
    while current != start {
        current = *prev.get(&current).ok_or_else(|| Error::unknown_city_id(current))?;
        ids.push(current);
    }
    ids.reverse();

    let cities = ids
        .into_iter()
        .map(|id| network.city(id).map(|c| c.name.clone()))
        .collect::<Result<Vec<_>>>()?;

    Ok(ShortestPath { cities, length })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A -1- B -1- D and A -1- C -1- D: two routes of length 2.
    fn diamond() -> RoadNetwork {
        let mut network = RoadNetwork::new();
        for name in ["A", "B", "C", "D"] {
            network.create_city(name, 0.0, 0.0).unwrap();
        }
        network.create_road(1, 3, 1.0).unwrap();
        network.create_road(3, 4, 1.0).unwrap();
        network.create_road(1, 2, 1.0).unwrap();
        network.create_road(2, 4, 1.0).unwrap();
        network
    }

    #[test]
    fn test_same_city() {
        let network = diamond();
        let path = find_path(&network, "C", "C").unwrap();
        assert_eq!(path.cities, vec!["C"]);
        assert_eq!(path.length, 0.0);
    }

    #[test]
    fn test_tie_break_prefers_lower_ids() {
        let network = diamond();
        let path = find_path(&network, "A", "D").unwrap();
        assert_eq!(path.cities, vec!["A", "B", "D"]);
        assert_eq!(path.length, 2.0);

        // stable across repeated queries
        for _ in 0..10 {
            assert_eq!(find_path(&network, "A", "D").unwrap(), path);
        }
    }

    #[test]
    fn test_longer_hop_count_can_win() {
        let mut network = RoadNetwork::new();
        for name in ["A", "B", "C", "D"] {
            network.create_city(name, 0.0, 0.0).unwrap();
        }
        network.create_road(1, 4, 10.0).unwrap();
        network.create_road(1, 2, 2.0).unwrap();
        network.create_road(2, 3, 2.0).unwrap();
        network.create_road(3, 4, 2.0).unwrap();

        let path = find_path(&network, "D", "A").unwrap();
        assert_eq!(path.cities, vec!["D", "C", "B", "A"]);
        assert_eq!(path.length, 6.0);
    }

    #[test]
    fn test_parallel_roads_use_shortest() {
        let mut network = RoadNetwork::new();
        network.create_city("A", 0.0, 0.0).unwrap();
        network.create_city("B", 0.0, 0.0).unwrap();
        network.create_road(1, 2, 9.0).unwrap();
        network.create_road(2, 1, 4.5).unwrap();

        let path = find_path(&network, "A", "B").unwrap();
        assert_eq!(path.length, 4.5);
    }

    #[test]
    fn test_unknown_and_unreachable() {
        let mut network = diamond();
        network.create_city("Island", 0.0, 0.0).unwrap();

        assert!(matches!(
            find_path(&network, "Nowhere", "A"),
            Err(Error::CityNotFound(name)) if name == "Nowhere"
        ));
        assert!(matches!(
            find_path(&network, "A", "Nowhere"),
            Err(Error::CityNotFound(_))
        ));
        assert!(matches!(
            find_path(&network, "A", "Island"),
            Err(Error::Unreachable { .. })
        ));
    }

    #[test]
    fn test_display_format() {
        let path = ShortestPath {
            cities: vec!["Vladivostok".into(), "Blagoveshensk".into(), "Habarovsk".into()],
            length: 44.0,
        };
        assert_eq!(
            path.to_string(),
            "Vladivostok\nBlagoveshensk\nHabarovsk\nPath length: 44"
        );

        let fractional = ShortestPath { cities: vec!["A".into()], length: 2.5 };
        assert_eq!(fractional.to_string(), "A\nPath length: 2.5");
    }
}
