use serde::{Deserialize, Serialize};

use crate::domain::types::{GeoPoint, Tier, VehicleProfile};

pub mod constant {
    pub const DEPOT_LAT: f64 = 19.075887;
    pub const DEPOT_LON: f64 = 72.877911;

    pub const GROUPING_CUTOFF_KM: f64 = 12.0;
    pub const GROUPING_RADIUS_FAR_KM: f64 = 8.0;
    pub const GROUPING_RADIUS_NEAR_KM: f64 = 3.0;

    pub const TIER_FAR_KM: f64 = 10.0;
    pub const TIER_MID_KM: f64 = 7.5;

    pub const WORKING_DAY_MIN: f64 = 480.0;
    pub const MAX_SHIPMENTS: usize = 50;
    pub const PROVIDER_TIMEOUT_SECS: u64 = 10;
    pub const SEED: u64 = 207_224;
}

/// Which vehicle profile name serves each cluster tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierVehicleMap {
    pub far: String,
    pub mid: String,
    pub near: String,
}

impl TierVehicleMap {
    pub fn vehicle_for(&self, tier: Tier) -> &str {
        match tier {
            Tier::Far => &self.far,
            Tier::Mid => &self.mid,
            Tier::Near => &self.near,
        }
    }
}

impl Default for TierVehicleMap {
    fn default() -> Self {
        TierVehicleMap {
            far: "4W".to_string(),
            mid: "4W-EV".to_string(),
            near: "3W".to_string(),
        }
    }
}

/// Per-run tuning knobs. Passed into the orchestrator by reference so
/// concurrent runs with different settings never share state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub grouping_cutoff_km: f64,
    pub grouping_radius_far_km: f64,
    pub grouping_radius_near_km: f64,
    pub tier_far_km: f64,
    pub tier_mid_km: f64,
    pub working_day_min: f64,
    pub tier_vehicles: TierVehicleMap,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        OptimizerConfig {
            grouping_cutoff_km: constant::GROUPING_CUTOFF_KM,
            grouping_radius_far_km: constant::GROUPING_RADIUS_FAR_KM,
            grouping_radius_near_km: constant::GROUPING_RADIUS_NEAR_KM,
            tier_far_km: constant::TIER_FAR_KM,
            tier_mid_km: constant::TIER_MID_KM,
            working_day_min: constant::WORKING_DAY_MIN,
            tier_vehicles: TierVehicleMap::default(),
        }
    }
}

impl OptimizerConfig {
    /// Grouping radius for a shipment at the given depot distance.
    /// Far shipments get a looser radius so sparse outskirts still cluster.
    pub fn grouping_radius_km(&self, depot_km: f64) -> f64 {
        if depot_km > self.grouping_cutoff_km {
            self.grouping_radius_far_km
        } else {
            self.grouping_radius_near_km
        }
    }

    /// Tier of a cluster founded by a shipment at the given depot distance.
    pub fn tier_for(&self, depot_km: f64) -> Tier {
        if depot_km > self.tier_far_km {
            Tier::Far
        } else if depot_km > self.tier_mid_km {
            Tier::Mid
        } else {
            Tier::Near
        }
    }
}

pub fn default_depot() -> GeoPoint {
    GeoPoint::new(constant::DEPOT_LAT, constant::DEPOT_LON)
}

/// Stock fleet: capacity in shipments, radius in km (infinite = unbounded),
/// average speed in km/h.
pub fn default_fleet() -> Vec<VehicleProfile> {
    vec![
        VehicleProfile::new("4W", 25, f64::INFINITY, 50.0),
        VehicleProfile::new("4W-EV", 8, 20.0, 40.0),
        VehicleProfile::new("3W", 5, 15.0, 30.0),
    ]
}
