use tracing::warn;

use crate::domain::types::GeoPoint;
use crate::error::ProviderError;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in km between two (lat, lon) points in degrees.
/// Symmetric, non-negative, zero for coincident points.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Point-to-point distance source. Implementations must be deterministic
/// for a given pair so clustering and packing stay reproducible; a fallible
/// provider signals failure instead of panicking and may report an
/// unreachable pair as `Ok(f64::INFINITY)`.
pub trait DistanceProvider {
    fn distance_km(&self, a: GeoPoint, b: GeoPoint) -> Result<f64, ProviderError>;
}

/// Default provider: the haversine formula, no I/O, never fails.
pub struct GreatCircle;

impl DistanceProvider for GreatCircle {
    fn distance_km(&self, a: GeoPoint, b: GeoPoint) -> Result<f64, ProviderError> {
        Ok(haversine_km(a, b))
    }
}

/// Resolve a distance through `provider`, substituting the geodesic value
/// when the lookup fails. A provider failure degrades the estimate but
/// never aborts the run.
pub fn resolve_km(provider: &dyn DistanceProvider, a: GeoPoint, b: GeoPoint) -> f64 {
    match provider.distance_km(a, b) {
        Ok(km) => km,
        Err(err) => {
            warn!("distance lookup failed ({err}), substituting great-circle distance");
            haversine_km(a, b)
        }
    }
}
