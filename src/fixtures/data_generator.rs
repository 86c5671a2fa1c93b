use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::domain::types::{GeoPoint, Shipment};

const TIMESLOTS: [&str; 3] = ["09:00-12:00", "12:00-15:00", "15:00-18:00"];

/// Generate `count` shipments scattered around the depot, spanning the
/// near and far distance bands (offsets up to ~0.18 degrees, roughly
/// 20 km of latitude). Seeded so demo runs and tests are reproducible.
pub fn generate_shipments(count: usize, depot: GeoPoint, seed: u64) -> Vec<Shipment> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut shipments = Vec::with_capacity(count);

    for i in 0..count {
        let dlat = rng.gen_range(-0.18..0.18);
        let dlon = rng.gen_range(-0.18..0.18);
        let timeslot = TIMESLOTS[rng.gen_range(0..TIMESLOTS.len())];

        shipments.push(Shipment {
            id: format!("SHIP{:03}", i + 1),
            location: GeoPoint::new(depot.lat + dlat, depot.lon + dlon),
            timeslot: Some(timeslot.to_string()),
        });
    }

    info!("Generated {} fixture shipments around the depot", count);
    shipments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_depot;

    #[test]
    fn same_seed_gives_same_shipments() {
        let a = generate_shipments(10, default_depot(), 42);
        let b = generate_shipments(10, default_depot(), 42);
        assert_eq!(a, b);
    }

    #[test]
    fn ids_are_sequential_and_non_empty() {
        let shipments = generate_shipments(3, default_depot(), 7);
        let ids: Vec<&str> = shipments.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["SHIP001", "SHIP002", "SHIP003"]);
    }
}
