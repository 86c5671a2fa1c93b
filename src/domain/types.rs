use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// A delivery order. Immutable after load; cluster and trip membership are
/// derived during a run, never written back onto the shipment itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,
    pub location: GeoPoint,
    pub timeslot: Option<String>,
}

impl Shipment {
    pub fn new(id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Shipment {
            id: id.into(),
            location: GeoPoint::new(lat, lon),
            timeslot: None,
        }
    }
}

/// One vehicle class of the fleet. `radius_km` is the cap on a trip's
/// cumulative one-way distance; `f64::INFINITY` means unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub name: String,
    pub capacity: usize,
    pub radius_km: f64,
    pub speed_kmh: f64,
}

impl VehicleProfile {
    pub fn new(name: impl Into<String>, capacity: usize, radius_km: f64, speed_kmh: f64) -> Self {
        VehicleProfile {
            name: name.into(),
            capacity,
            radius_km,
            speed_kmh,
        }
    }
}

/// Coarse depot-distance band of a cluster, taken from its founding
/// shipment. Selects which vehicle profile serves the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Far,
    Mid,
    Near,
}

/// An ordered spatial group of shipments. Membership is frozen before
/// packing begins.
#[derive(Debug, Clone)]
pub struct Cluster {
    pub tier: Tier,
    pub shipments: Vec<Shipment>,
}
