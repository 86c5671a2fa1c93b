use std::env;
use std::time::Duration;

use dotenv::dotenv;
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::config::constant::PROVIDER_TIMEOUT_SECS;
use crate::distance::geo::{haversine_km, DistanceProvider};
use crate::domain::types::GeoPoint;
use crate::error::ProviderError;

/// Driving distance from the OSRM route service. One HTTP round trip per
/// lookup with a bounded timeout; an unroutable pair comes back as
/// `Ok(f64::INFINITY)`, every other failure as `Err`.
pub struct OsrmDistance {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl OsrmDistance {
    pub fn from_env() -> Self {
        dotenv().ok();
        let base_url = env::var("OSRM_BASE_URL")
            .unwrap_or_else(|_| "https://router.project-osrm.org/route/v1/driving".to_string());
        OsrmDistance {
            client: Client::new(),
            base_url,
            timeout: Duration::from_secs(PROVIDER_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        OsrmDistance {
            client: Client::new(),
            base_url: base_url.into(),
            timeout: Duration::from_secs(PROVIDER_TIMEOUT_SECS),
        }
    }

    fn route_url(&self, a: GeoPoint, b: GeoPoint) -> String {
        // OSRM takes lon,lat pairs
        format!(
            "{}/{},{};{},{}?overview=false",
            self.base_url, a.lon, a.lat, b.lon, b.lat
        )
    }
}

impl DistanceProvider for OsrmDistance {
    fn distance_km(&self, a: GeoPoint, b: GeoPoint) -> Result<f64, ProviderError> {
        let url = self.route_url(a, b);
        debug!("Built OSRM URL: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .map_err(|e| ProviderError(format!("OSRM request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError(format!("OSRM returned HTTP {status}")));
        }

        let json: Value = response
            .json()
            .map_err(|e| ProviderError(format!("failed to parse OSRM JSON: {e}")))?;

        if json["code"].as_str() == Some("NoRoute") {
            trace!("OSRM found no route between {:?} and {:?}", a, b);
            return Ok(f64::INFINITY);
        }

        let meters = json["routes"][0]["distance"]
            .as_f64()
            .ok_or_else(|| ProviderError("no route distance in OSRM response".to_string()))?;

        Ok(meters / 1000.0)
    }
}

/// What to substitute when the wrapped provider fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Use the haversine formula for the failed pair.
    #[default]
    GreatCircle,
    /// Treat the failed pair as unreachable (infinite distance).
    Unreachable,
}

/// Wraps a fallible provider with an explicit recovery policy so callers
/// downstream never see a lookup failure.
pub struct FallbackDistance<P> {
    primary: P,
    policy: FallbackPolicy,
}

impl<P: DistanceProvider> FallbackDistance<P> {
    pub fn new(primary: P, policy: FallbackPolicy) -> Self {
        FallbackDistance { primary, policy }
    }
}

impl<P: DistanceProvider> DistanceProvider for FallbackDistance<P> {
    fn distance_km(&self, a: GeoPoint, b: GeoPoint) -> Result<f64, ProviderError> {
        match self.primary.distance_km(a, b) {
            Ok(km) => Ok(km),
            Err(err) => {
                warn!("primary distance provider failed ({err}), applying fallback policy");
                match self.policy {
                    FallbackPolicy::GreatCircle => Ok(haversine_km(a, b)),
                    FallbackPolicy::Unreachable => Ok(f64::INFINITY),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFails;
    impl DistanceProvider for AlwaysFails {
        fn distance_km(&self, _: GeoPoint, _: GeoPoint) -> Result<f64, ProviderError> {
            Err(ProviderError("timed out".to_string()))
        }
    }

    #[test]
    fn fallback_substitutes_geodesic() {
        let provider = FallbackDistance::new(AlwaysFails, FallbackPolicy::GreatCircle);
        let a = GeoPoint::new(19.075887, 72.877911);
        let b = GeoPoint::new(19.1, 72.9);
        let km = provider.distance_km(a, b).unwrap();
        assert_eq!(km, haversine_km(a, b));
    }

    #[test]
    fn fallback_can_mark_pair_unreachable() {
        let provider = FallbackDistance::new(AlwaysFails, FallbackPolicy::Unreachable);
        let a = GeoPoint::new(19.075887, 72.877911);
        let b = GeoPoint::new(19.1, 72.9);
        assert_eq!(provider.distance_km(a, b).unwrap(), f64::INFINITY);
    }

    #[test]
    fn route_url_uses_lon_lat_order() {
        let provider = OsrmDistance::with_base_url("http://localhost:5000/route/v1/driving");
        let url = provider.route_url(GeoPoint::new(1.0, 2.0), GeoPoint::new(3.0, 4.0));
        assert_eq!(
            url,
            "http://localhost:5000/route/v1/driving/2,1;4,3?overview=false"
        );
    }
}
