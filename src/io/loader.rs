use std::fs::File;
use std::io::Read;

use csv::ReaderBuilder;
use tracing::{info, warn};

use crate::config::constant::MAX_SHIPMENTS;
use crate::domain::types::{GeoPoint, Shipment, VehicleProfile};
use crate::error::OptimizeError;

/// Load shipments from a headered CSV
/// (`shipment_id,latitude,longitude,delivery_timeslot`).
///
/// A blank id is defaulted from the row number; rows past the shipment cap
/// are dropped with a warning; a missing or non-numeric coordinate is an
/// input error naming the row.
pub fn load_shipments(path: &str) -> Result<Vec<Shipment>, OptimizeError> {
    let shipments = shipments_from_reader(File::open(path)?)?;
    info!("Loaded {} shipments from {}", shipments.len(), path);
    Ok(shipments)
}

pub fn shipments_from_reader<R: Read>(reader: R) -> Result<Vec<Shipment>, OptimizeError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut shipments = Vec::new();
    for (idx, row) in csv_reader.records().enumerate() {
        let record = row?;
        if shipments.len() >= MAX_SHIPMENTS {
            warn!("Shipment file exceeds cap of {}, dropping the rest", MAX_SHIPMENTS);
            break;
        }

        let lat = parse_coordinate(record.get(1), idx, "latitude")?;
        let lon = parse_coordinate(record.get(2), idx, "longitude")?;
        let id = match record.get(0) {
            Some(raw) if !raw.is_empty() => raw.to_string(),
            _ => format!("SHIP{:03}", idx + 1),
        };
        let timeslot = record
            .get(3)
            .filter(|raw| !raw.is_empty())
            .map(str::to_string);

        shipments.push(Shipment {
            id,
            location: GeoPoint::new(lat, lon),
            timeslot,
        });
    }

    Ok(shipments)
}

/// Load vehicle profiles from a headered CSV
/// (`vehicle_type,capacity,radius_km,speed_kmh`). A blank or `inf` radius
/// means unbounded.
pub fn load_vehicles(path: &str) -> Result<Vec<VehicleProfile>, OptimizeError> {
    let vehicles = vehicles_from_reader(File::open(path)?)?;
    info!("Loaded {} vehicle profiles from {}", vehicles.len(), path);
    Ok(vehicles)
}

pub fn vehicles_from_reader<R: Read>(reader: R) -> Result<Vec<VehicleProfile>, OptimizeError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut vehicles = Vec::new();
    for (idx, row) in csv_reader.records().enumerate() {
        let record = row?;

        let name = record
            .get(0)
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| OptimizeError::Input(format!("vehicle row {}: missing type", idx + 1)))?
            .to_string();
        let capacity: usize = record
            .get(1)
            .and_then(|raw| raw.parse().ok())
            .filter(|c| *c > 0)
            .ok_or_else(|| {
                OptimizeError::Input(format!("vehicle row {}: invalid capacity", idx + 1))
            })?;
        let radius_km = parse_radius(record.get(2), idx)?;
        let speed_kmh: f64 = record
            .get(3)
            .and_then(|raw| raw.parse().ok())
            .filter(|s: &f64| s.is_finite() && *s > 0.0)
            .ok_or_else(|| {
                OptimizeError::Input(format!("vehicle row {}: invalid speed", idx + 1))
            })?;

        vehicles.push(VehicleProfile {
            name,
            capacity,
            radius_km,
            speed_kmh,
        });
    }

    Ok(vehicles)
}

fn parse_coordinate(field: Option<&str>, row: usize, name: &str) -> Result<f64, OptimizeError> {
    field
        .and_then(|raw| raw.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            OptimizeError::Input(format!("shipment row {}: missing or invalid {}", row + 1, name))
        })
}

fn parse_radius(field: Option<&str>, row: usize) -> Result<f64, OptimizeError> {
    match field {
        None | Some("") => Ok(f64::INFINITY),
        Some(raw) if raw.eq_ignore_ascii_case("inf") || raw.eq_ignore_ascii_case("infinity") => {
            Ok(f64::INFINITY)
        }
        Some(raw) => raw
            .parse::<f64>()
            .ok()
            .filter(|value| *value > 0.0)
            .ok_or_else(|| {
                OptimizeError::Input(format!("vehicle row {}: invalid radius", row + 1))
            }),
    }
}
