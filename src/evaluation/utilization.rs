use crate::domain::trip::Trip;
use crate::domain::types::VehicleProfile;
use crate::solver::packing::PackedTrip;

/// Coverage reported for a vehicle with no radius limit.
pub const UNCONSTRAINED_COVERAGE_PCT: f64 = 100.0;

/// Attach the per-trip utilization figures to a packed trip. All three
/// percentages are informational; nothing here feeds back into packing.
pub fn finalize_trip(packed: PackedTrip, profile: &VehicleProfile, working_day_min: f64) -> Trip {
    let trip_time_min = packed.round_trip_km / profile.speed_kmh * 60.0;
    let capacity_pct = packed.shipments.len() as f64 / profile.capacity as f64 * 100.0;
    let time_pct = trip_time_min / working_day_min * 100.0;
    let coverage_pct = if profile.radius_km.is_finite() {
        packed.farthest_km / profile.radius_km * 100.0
    } else {
        UNCONSTRAINED_COVERAGE_PCT
    };

    Trip {
        id: packed.id,
        shipments: packed.shipments,
        vehicle_type: profile.name.clone(),
        round_trip_km: packed.round_trip_km,
        farthest_km: packed.farthest_km,
        trip_time_min,
        capacity_pct,
        time_pct,
        coverage_pct,
    }
}
