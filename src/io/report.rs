use std::io::Write;

use csv::Writer;
use itertools::Itertools;
use tracing::info;

use crate::domain::trip::Trip;
use crate::error::OptimizeError;

/// Write the finalized trip table to a CSV file.
pub fn write_trip_report(trips: &[Trip], path: &str) -> Result<(), OptimizeError> {
    let mut writer = Writer::from_path(path)?;
    write_records(&mut writer, trips)?;
    info!("Wrote {} trips to {}", trips.len(), path);
    Ok(())
}

pub fn report_to_string(trips: &[Trip]) -> Result<String, OptimizeError> {
    let mut writer = Writer::from_writer(Vec::new());
    write_records(&mut writer, trips)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| OptimizeError::Input(format!("failed to flush report: {e}")))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_records<W: Write>(writer: &mut Writer<W>, trips: &[Trip]) -> Result<(), OptimizeError> {
    writer.write_record([
        "trip_id",
        "shipments",
        "vehicle_type",
        "round_trip_km",
        "trip_time_min",
        "capacity_pct",
        "time_pct",
        "coverage_pct",
    ])?;

    for trip in trips {
        let shipment_ids = trip.shipments.iter().map(|s| s.id.as_str()).join(", ");
        writer.write_record([
            trip.id.to_string(),
            shipment_ids,
            trip.vehicle_type.clone(),
            format!("{:.2}", trip.round_trip_km),
            format!("{:.2}", trip.trip_time_min),
            format!("{:.2}", trip.capacity_pct),
            format!("{:.2}", trip.time_pct),
            format!("{:.2}", trip.coverage_pct),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
