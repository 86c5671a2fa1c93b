pub mod geo;
pub mod providers;

pub use geo::{haversine_km, resolve_km, DistanceProvider, GreatCircle};
pub use providers::{FallbackDistance, FallbackPolicy, OsrmDistance};
