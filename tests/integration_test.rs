// Integration tests for roadnet
use roadnet_core::{find_path, Error, RoadNetwork};
use roadnet_storage::{SeedData, StorageManager};
use std::io::Write;
use std::sync::Arc;

const CITIES: [&str; 8] = [
    "Vladivostok",
    "Artem",
    "Nahodka",
    "Fokino",
    "Blagoveshensk",
    "Habarovsk",
    "Dalnegorsk",
    "To-Delete",
];

const ROADS: [(u64, u64, f64); 9] = [
    (1, 2, 15.0),
    (2, 3, 12.0),
    (3, 4, 26.0),
    (1, 4, 100.0),
    (1, 5, 30.0),
    (1, 7, 60.0),
    (5, 7, 46.0),
    (5, 6, 14.0),
    (6, 7, 21.0),
];

/// Replays the smoke client's traffic: eight cities, the last one deleted, nine roads.
fn sample_storage() -> StorageManager {
    let storage = StorageManager::new();
    for name in CITIES {
        storage.create_city(name, 24.4747, 25.6363).unwrap();
    }
    storage.delete_city(CITIES.len() as u64).unwrap();
    for (a, b, length) in ROADS {
        storage.create_road(a, b, length).unwrap();
    }
    storage
}

#[test]
fn test_sample_dataset_paths() {
    let storage = sample_storage();
    assert_eq!(storage.list_cities().len(), 7);
    assert_eq!(storage.list_roads().len(), 9);

    let path = storage.find_path("Vladivostok", "Habarovsk").unwrap();
    assert_eq!(path.cities, vec!["Vladivostok", "Blagoveshensk", "Habarovsk"]);
    assert_eq!(path.length, 44.0);

    let path = storage.find_path("Vladivostok", "Fokino").unwrap();
    assert_eq!(path.cities, vec!["Vladivostok", "Artem", "Nahodka", "Fokino"]);
    assert_eq!(path.length, 53.0);
    assert_eq!(
        path.to_string(),
        "Vladivostok\nArtem\nNahodka\nFokino\nPath length: 53"
    );
}

#[test]
fn test_shortest_is_no_longer_than_any_alternative() {
    let storage = sample_storage();
    let path = storage.find_path("Vladivostok", "Habarovsk").unwrap();
    // Vladivostok-Dalnegorsk-Habarovsk and Vladivostok-Blagoveshensk-Dalnegorsk-Habarovsk
    for alternative in [60.0 + 21.0, 30.0 + 46.0 + 21.0] {
        assert!(path.length <= alternative);
    }
}

#[test]
fn test_list_matches_created_minus_deleted() {
    let mut network = RoadNetwork::new();
    let mut expected = Vec::new();
    for i in 0..10 {
        let city = network
            .create_city(&format!("city-{i}"), i as f64, -(i as f64))
            .unwrap();
        expected.push(city);
    }
    for id in [2, 5, 9] {
        network.delete_city(id).unwrap();
    }
    expected.retain(|c| ![2, 5, 9].contains(&c.id));

    assert_eq!(network.list_cities(), expected);
    for (city, i) in network.list_cities().iter().zip([0, 2, 3, 5, 6, 7, 9]) {
        assert_eq!(city.name, format!("city-{i}"));
        assert_eq!(city.latitude, i as f64);
        assert_eq!(city.longitude, -(i as f64));
    }
}

#[test]
fn test_deleting_city_breaks_paths_through_it() {
    let storage = sample_storage();

    // Habarovsk (6) hangs off Blagoveshensk (5) and Dalnegorsk (7)
    storage.delete_city(5).unwrap();
    assert!(storage.list_roads().iter().all(|r| !r.touches(5)));
    let path = storage.find_path("Vladivostok", "Habarovsk").unwrap();
    assert_eq!(path.cities, vec!["Vladivostok", "Dalnegorsk", "Habarovsk"]);
    assert_eq!(path.length, 81.0);

    storage.delete_city(7).unwrap();
    assert!(matches!(
        storage.find_path("Vladivostok", "Habarovsk"),
        Err(Error::Unreachable { .. })
    ));
    assert!(matches!(
        storage.find_path("Vladivostok", "Dalnegorsk"),
        Err(Error::CityNotFound(_))
    ));
}

#[test]
fn test_create_road_rejects_deleted_city() {
    let storage = sample_storage();
    assert!(matches!(
        storage.create_road(1, 8, 10.0),
        Err(Error::Validation(_))
    ));
    assert!(matches!(storage.delete_city(8), Err(Error::CityNotFound(_))));
}

#[test]
fn test_disconnected_components() {
    let mut network = RoadNetwork::new();
    for name in ["A", "B", "C", "D"] {
        network.create_city(name, 0.0, 0.0).unwrap();
    }
    network.create_road(1, 2, 1.0).unwrap();
    network.create_road(3, 4, 1.0).unwrap();

    let err = find_path(&network, "A", "D").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "No route from A to D");
}

#[test]
fn test_seed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "cities": [
                {{"name": "A", "latitude": 1.0, "longitude": 2.0}},
                {{"name": "B", "latitude": 3.0, "longitude": 4.0}}
            ],
            "roads": [{{"from": "A", "to": "B", "length": 7}}]
        }}"#
    )
    .unwrap();

    let storage = StorageManager::with_seed(file.path()).unwrap();
    assert_eq!(storage.stats(), (2, 1, 0));
    assert_eq!(storage.find_path("B", "A").unwrap().length, 7.0);
}

#[test]
fn test_bundled_seed_matches_sample() {
    let seed = SeedData::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/primorye.json")).unwrap();
    let mut network = RoadNetwork::new();
    assert_eq!(seed.apply(&mut network).unwrap(), (7, 9));

    let path = find_path(&network, "Vladivostok", "Habarovsk").unwrap();
    assert_eq!(path.length, 44.0);
}

#[test]
fn test_bad_seed_files() {
    let missing = tempfile::tempdir().unwrap().path().join("nope.json");
    assert!(matches!(StorageManager::with_seed(&missing), Err(Error::Io(_))));

    let mut garbage = tempfile::NamedTempFile::new().unwrap();
    write!(garbage, "not json").unwrap();
    assert!(matches!(
        StorageManager::with_seed(garbage.path()),
        Err(Error::Serialization(_))
    ));

    let mut dangling = tempfile::NamedTempFile::new().unwrap();
    write!(dangling, r#"{{"roads": [{{"from": "A", "to": "B", "length": 1}}]}}"#).unwrap();
    assert!(matches!(
        StorageManager::with_seed(dangling.path()),
        Err(Error::Validation(_))
    ));
}

#[test]
fn test_concurrent_writers_and_readers() {
    let storage = Arc::new(sample_storage());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let storage = storage.clone();
            std::thread::spawn(move || {
                for i in 0..25 {
                    let city = storage
                        .create_city(&format!("t{t}-{i}"), 0.0, 0.0)
                        .unwrap();
                    storage.create_road(1, city.id, 1.0 + i as f64).unwrap();
                    let path = storage.find_path("Vladivostok", "Habarovsk").unwrap();
                    assert_eq!(path.length, 44.0);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(storage.list_cities().len(), 7 + 8 * 25);
    assert_eq!(storage.list_roads().len(), 9 + 8 * 25);
}
