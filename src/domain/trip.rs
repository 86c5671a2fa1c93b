use serde::Serialize;

use crate::domain::types::Shipment;

/// One vehicle dispatch, immutable once emitted by the packer and
/// finalized with its utilization figures.
///
/// `round_trip_km` is the sum of direct depot round trips to every stop,
/// not a routed tour through all stops; `farthest_km` is the cumulative
/// one-way sum checked against the vehicle radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    pub id: u32,
    pub shipments: Vec<Shipment>,
    pub vehicle_type: String,
    pub round_trip_km: f64,
    pub farthest_km: f64,
    pub trip_time_min: f64,
    pub capacity_pct: f64,
    pub time_pct: f64,
    pub coverage_pct: f64,
}

impl Trip {
    pub fn shipment_count(&self) -> usize {
        self.shipments.len()
    }
}
