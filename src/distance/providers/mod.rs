pub mod osrm;

pub use osrm::{FallbackDistance, FallbackPolicy, OsrmDistance};
