use itertools::Itertools;
use tracing::debug;

use crate::distance::geo::{resolve_km, DistanceProvider};
use crate::domain::types::{Cluster, GeoPoint, Shipment, VehicleProfile};

/// Packer output before utilization figures are attached.
#[derive(Debug, Clone)]
pub struct PackedTrip {
    pub id: u32,
    pub shipments: Vec<Shipment>,
    pub round_trip_km: f64,
    pub farthest_km: f64,
}

/// Split one cluster into trips for the given vehicle profile.
///
/// Shipments are taken nearest-first (ascending depot distance), which
/// bounds the growth of the cumulative farthest-distance sum. A trip is
/// closed before admitting a shipment only when it already holds something
/// and either the capacity or the radius budget would be exceeded, so the
/// first shipment of a fresh trip is always admitted. A lone shipment
/// beyond the vehicle radius therefore still gets a trip of its own rather
/// than going unassigned; that is deliberate policy, carried over as-is.
///
/// `trip_counter` is shared across the whole run so trip ids stay strictly
/// increasing across clusters.
pub fn pack_cluster(
    cluster: &Cluster,
    profile: &VehicleProfile,
    depot: GeoPoint,
    provider: &dyn DistanceProvider,
    trip_counter: &mut u32,
) -> Vec<PackedTrip> {
    let by_depot_distance = cluster
        .shipments
        .iter()
        .map(|s| (resolve_km(provider, depot, s.location), s))
        .sorted_by(|a, b| a.0.total_cmp(&b.0));

    let mut trips: Vec<PackedTrip> = Vec::new();
    let mut current: Vec<Shipment> = Vec::new();
    let mut farthest_km = 0.0;
    let mut round_trip_km = 0.0;

    for (depot_km, shipment) in by_depot_distance {
        let over_capacity = current.len() >= profile.capacity;
        let over_radius = farthest_km + depot_km > profile.radius_km;

        if !current.is_empty() && (over_capacity || over_radius) {
            *trip_counter += 1;
            debug!(
                "Closing trip {} ({} shipments, {:.2} km farthest) before {}",
                trip_counter,
                current.len(),
                farthest_km,
                shipment.id
            );
            trips.push(PackedTrip {
                id: *trip_counter,
                shipments: std::mem::take(&mut current),
                round_trip_km,
                farthest_km,
            });
            farthest_km = 0.0;
            round_trip_km = 0.0;
        }

        current.push(shipment.clone());
        farthest_km += depot_km;
        // Each stop approximated as a direct out-and-back from the depot.
        round_trip_km += 2.0 * depot_km;
    }

    if !current.is_empty() {
        *trip_counter += 1;
        trips.push(PackedTrip {
            id: *trip_counter,
            shipments: current,
            round_trip_km,
            farthest_km,
        });
    }

    trips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_depot;
    use crate::distance::geo::GreatCircle;
    use crate::domain::types::Tier;

    fn cluster_at_kms(kms: &[f64]) -> Cluster {
        let depot = default_depot();
        let shipments = kms
            .iter()
            .enumerate()
            .map(|(i, km)| {
                Shipment::new(format!("SHIP{:03}", i + 1), depot.lat + km * 0.009, depot.lon)
            })
            .collect();
        Cluster {
            tier: Tier::Near,
            shipments,
        }
    }

    #[test]
    fn splits_on_capacity() {
        let cluster = cluster_at_kms(&[0.2, 0.4, 0.6, 0.8, 1.0, 1.2, 1.4]);
        let profile = VehicleProfile::new("3W", 5, 15.0, 30.0);
        let mut counter = 0;
        let trips = pack_cluster(&cluster, &profile, default_depot(), &GreatCircle, &mut counter);

        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].shipments.len(), 5);
        assert_eq!(trips[1].shipments.len(), 2);
        assert_eq!((trips[0].id, trips[1].id), (1, 2));
    }

    #[test]
    fn splits_on_radius() {
        // 6 + 6 = 12 fits within 15, a third 6 km stop does not.
        let cluster = cluster_at_kms(&[6.0, 6.0, 6.0]);
        let profile = VehicleProfile::new("3W", 5, 15.0, 30.0);
        let mut counter = 0;
        let trips = pack_cluster(&cluster, &profile, default_depot(), &GreatCircle, &mut counter);

        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].shipments.len(), 2);
        assert_eq!(trips[1].shipments.len(), 1);
        assert!(trips[0].farthest_km <= 15.0 + 1e-6);
    }

    #[test]
    fn packs_nearest_first() {
        let depot = default_depot();
        let cluster = Cluster {
            tier: Tier::Near,
            shipments: vec![
                Shipment::new("FAR", depot.lat + 0.018, depot.lon),
                Shipment::new("NEAR", depot.lat + 0.009, depot.lon),
            ],
        };
        let profile = VehicleProfile::new("4W", 25, f64::INFINITY, 50.0);
        let mut counter = 0;
        let trips = pack_cluster(&cluster, &profile, depot, &GreatCircle, &mut counter);

        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].shipments[0].id, "NEAR");
        assert_eq!(trips[0].shipments[1].id, "FAR");
    }

    #[test]
    fn oversized_single_shipment_gets_its_own_trip() {
        let cluster = cluster_at_kms(&[25.0]);
        let profile = VehicleProfile::new("4W-EV", 8, 20.0, 40.0);
        let mut counter = 0;
        let trips = pack_cluster(&cluster, &profile, default_depot(), &GreatCircle, &mut counter);

        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].shipments.len(), 1);
        assert!(trips[0].farthest_km > profile.radius_km);
    }

    #[test]
    fn no_empty_trips_around_an_oversized_shipment() {
        // A near stop followed by one beyond the radius: the near stop's
        // trip closes, the oversized stop opens a fresh trip of its own.
        let cluster = cluster_at_kms(&[1.0, 25.0]);
        let profile = VehicleProfile::new("4W-EV", 8, 20.0, 40.0);
        let mut counter = 0;
        let trips = pack_cluster(&cluster, &profile, default_depot(), &GreatCircle, &mut counter);

        assert_eq!(trips.len(), 2);
        assert!(trips.iter().all(|t| !t.shipments.is_empty()));
    }

    #[test]
    fn trip_counter_carries_across_clusters() {
        let profile = VehicleProfile::new("3W", 5, 15.0, 30.0);
        let mut counter = 0;
        let first = pack_cluster(
            &cluster_at_kms(&[1.0]),
            &profile,
            default_depot(),
            &GreatCircle,
            &mut counter,
        );
        let second = pack_cluster(
            &cluster_at_kms(&[2.0]),
            &profile,
            default_depot(),
            &GreatCircle,
            &mut counter,
        );
        assert_eq!(first[0].id, 1);
        assert_eq!(second[0].id, 2);
    }

    #[test]
    fn round_trip_is_twice_the_one_way_sum() {
        let cluster = cluster_at_kms(&[1.0, 2.0]);
        let profile = VehicleProfile::new("4W", 25, f64::INFINITY, 50.0);
        let mut counter = 0;
        let trips = pack_cluster(&cluster, &profile, default_depot(), &GreatCircle, &mut counter);
        assert!((trips[0].round_trip_km - 2.0 * trips[0].farthest_km).abs() < 1e-9);
    }
}
