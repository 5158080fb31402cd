//! # roadnet Core
//!
//! Core library for the roadnet routing service.
//!
//! This crate provides the graph model and the algorithms on top of it:
//!
//! - [`City`] / [`Road`] - nodes with coordinates and weighted undirected edges
//! - [`RoadNetwork`] - the in-memory graph store
//! - [`find_path`] - Dijkstra shortest path between two cities by name
//! - [`RecordBook`] - a small phone book living next to the graph
//!
//! ## Example
//!
//! ```rust
//! use roadnet_core::{find_path, RoadNetwork};
//!
//! let mut network = RoadNetwork::new();
//! let a = network.create_city("Vladivostok", 43.12, 131.89).unwrap();
//! let b = network.create_city("Artem", 43.35, 132.19).unwrap();
//! network.create_road(a.id, b.id, 15.0).unwrap();
//!
//! let path = find_path(&network, "Vladivostok", "Artem").unwrap();
//! assert_eq!(path.length, 15.0);
//! ```

pub mod error;
pub mod graph;
pub mod network;
pub mod path;
pub mod record;

pub use error::{Error, Result};
pub use graph::{City, CityId, Road, RoadId};
pub use network::RoadNetwork;
pub use path::{find_path, ShortestPath};
pub use record::{Record, RecordBook, RecordId};
