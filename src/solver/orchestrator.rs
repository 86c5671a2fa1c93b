use serde::Serialize;
use tracing::{error, info};

use crate::config::OptimizerConfig;
use crate::distance::geo::DistanceProvider;
use crate::domain::trip::Trip;
use crate::domain::types::{GeoPoint, Shipment, VehicleProfile};
use crate::error::OptimizeError;
use crate::evaluation::utilization::finalize_trip;
use crate::solver::clustering::cluster_shipments;
use crate::solver::packing::pack_cluster;

/// What the optimizer hands back across the boundary: either the full trip
/// list or a failure message, never a panic and never partial output.
#[derive(Debug, Serialize)]
pub struct OptimizationResponse {
    pub success: bool,
    pub message: String,
    pub trips: Vec<Trip>,
}

/// Run the full pipeline: cluster, select a vehicle per cluster tier, pack,
/// attach utilization. Trip ids are assigned from a single counter across
/// all clusters, starting at 1.
pub fn optimize(
    shipments: &[Shipment],
    profiles: &[VehicleProfile],
    depot: GeoPoint,
    config: &OptimizerConfig,
    provider: &dyn DistanceProvider,
) -> Result<Vec<Trip>, OptimizeError> {
    validate_inputs(shipments, profiles, depot)?;

    let clusters = cluster_shipments(shipments, depot, config, provider);

    let mut trip_counter: u32 = 0;
    let mut trips: Vec<Trip> = Vec::new();

    for cluster in &clusters {
        let vehicle_name = config.tier_vehicles.vehicle_for(cluster.tier);
        let profile = profiles
            .iter()
            .find(|p| p.name == vehicle_name)
            .ok_or_else(|| {
                OptimizeError::Configuration(format!(
                    "no vehicle profile named '{}' for {:?} tier clusters",
                    vehicle_name, cluster.tier
                ))
            })?;

        for packed in pack_cluster(cluster, profile, depot, provider, &mut trip_counter) {
            trips.push(finalize_trip(packed, profile, config.working_day_min));
        }
    }

    info!(
        "Assigned {} shipments to {} trips across {} clusters",
        shipments.len(),
        trips.len(),
        clusters.len()
    );
    Ok(trips)
}

/// Non-panicking boundary around [`optimize`]: every failure becomes a
/// structured `{success: false, message}` response with no trips.
pub fn run_optimization(
    shipments: &[Shipment],
    profiles: &[VehicleProfile],
    depot: GeoPoint,
    config: &OptimizerConfig,
    provider: &dyn DistanceProvider,
) -> OptimizationResponse {
    match optimize(shipments, profiles, depot, config, provider) {
        Ok(trips) => OptimizationResponse {
            success: true,
            message: "Optimization completed successfully".to_string(),
            trips,
        },
        Err(err) => {
            error!("Optimization failed: {err}");
            OptimizationResponse {
                success: false,
                message: err.to_string(),
                trips: vec![],
            }
        }
    }
}

fn validate_inputs(
    shipments: &[Shipment],
    profiles: &[VehicleProfile],
    depot: GeoPoint,
) -> Result<(), OptimizeError> {
    if shipments.is_empty() {
        return Err(OptimizeError::Input("no shipments to assign".to_string()));
    }
    if !depot.is_finite() {
        return Err(OptimizeError::Input(
            "depot location has non-finite coordinates".to_string(),
        ));
    }
    for shipment in shipments {
        if shipment.id.is_empty() {
            return Err(OptimizeError::Input(
                "shipment with empty identifier".to_string(),
            ));
        }
        if !shipment.location.is_finite() {
            return Err(OptimizeError::Input(format!(
                "shipment {} has non-finite coordinates",
                shipment.id
            )));
        }
    }
    if profiles.is_empty() {
        return Err(OptimizeError::Input("no vehicles available".to_string()));
    }
    for profile in profiles {
        if profile.capacity == 0 || profile.speed_kmh <= 0.0 || profile.radius_km <= 0.0 {
            return Err(OptimizeError::Configuration(format!(
                "vehicle profile '{}' has non-positive capacity, radius or speed",
                profile.name
            )));
        }
    }
    Ok(())
}
