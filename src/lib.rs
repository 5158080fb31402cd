//! # roadnet
//!
//! An in-memory graph of cities and roads with a REST API for shortest-path
//! queries.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! roadnet --http-port 3000 --seed data/primorye.json
//! curl 'http://localhost:3000/api/v1/path?from=Vladivostok&to=Habarovsk'
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use roadnet::prelude::*;
//!
//! let storage = StorageManager::new();
//! let a = storage.create_city("Vladivostok", 43.12, 131.89).unwrap();
//! let b = storage.create_city("Artem", 43.35, 132.19).unwrap();
//! storage.create_road(a.id, b.id, 15.0).unwrap();
//!
//! let path = storage.find_path("Vladivostok", "Artem").unwrap();
//! println!("{path}");
//! ```
//!
//! ## Crate Structure
//!
//! - `roadnet-core` - City/Road model, the `RoadNetwork` store, Dijkstra, records
//! - `roadnet-storage` - lock-guarded shared state and seed loading
//! - `roadnet-api` - actix-web REST API

// Re-export core types
pub use roadnet_core::{
    find_path, City, CityId, Error, Record, RecordBook, RecordId, Result, Road, RoadId,
    RoadNetwork, ShortestPath,
};

// Re-export storage
pub use roadnet_storage::{SeedData, StorageManager};

// Re-export API
pub use roadnet_api::{ApiError, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        find_path, City, CityId, Error, Result, Road, RoadId, RoadNetwork, ShortestPath,
        StorageManager, RestApi,
    };
}
