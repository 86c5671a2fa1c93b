use tracing::{debug, info};

use crate::config::OptimizerConfig;
use crate::distance::geo::{resolve_km, DistanceProvider};
use crate::domain::types::{Cluster, GeoPoint, Shipment};

/// Partition shipments into spatial clusters with a depot-relative growth
/// threshold: each shipment joins the first existing cluster that has any
/// member strictly within its grouping radius, otherwise it founds a new
/// cluster tagged with the tier of its own depot distance.
///
/// First-fit single-linkage is order-sensitive by design: the result is a
/// deterministic function of the input order, and input order is part of
/// the contract.
pub fn cluster_shipments(
    shipments: &[Shipment],
    depot: GeoPoint,
    config: &OptimizerConfig,
    provider: &dyn DistanceProvider,
) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();

    for shipment in shipments {
        let depot_km = resolve_km(provider, depot, shipment.location);
        let radius = config.grouping_radius_km(depot_km);

        let joined = clusters.iter_mut().find(|cluster| {
            cluster
                .shipments
                .iter()
                .any(|member| resolve_km(provider, member.location, shipment.location) < radius)
        });

        match joined {
            Some(cluster) => cluster.shipments.push(shipment.clone()),
            None => {
                let tier = config.tier_for(depot_km);
                debug!(
                    "Shipment {} founds cluster {} ({:?} tier, {:.2} km from depot)",
                    shipment.id,
                    clusters.len(),
                    tier,
                    depot_km
                );
                clusters.push(Cluster {
                    tier,
                    shipments: vec![shipment.clone()],
                });
            }
        }
    }

    info!(
        "Clustered {} shipments into {} clusters",
        shipments.len(),
        clusters.len()
    );
    clusters
}
