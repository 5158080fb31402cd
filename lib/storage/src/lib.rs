pub mod manager;
pub mod seed;

pub use manager::StorageManager;
pub use seed::{SeedCity, SeedData, SeedRoad};
