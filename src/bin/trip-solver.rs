use std::env;
use std::error::Error;
use std::fs;

use chrono::Utc;
use colored::*;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use trip_optimizer::config::constant::SEED;
use trip_optimizer::config::{default_depot, default_fleet, OptimizerConfig};
use trip_optimizer::distance::geo::GreatCircle;
use trip_optimizer::fixtures::data_generator::generate_shipments;
use trip_optimizer::io::loader::{load_shipments, load_vehicles};
use trip_optimizer::io::map::render_map;
use trip_optimizer::io::report::write_trip_report;
use trip_optimizer::solver::orchestrator::run_optimization;

fn init_tracing_and_env() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    dotenv().ok();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing_and_env();

    let args: Vec<String> = env::args().collect();
    let depot = default_depot();

    // Usage: trip-solver [shipments.csv vehicles.csv]
    let (shipments, vehicles) = if args.len() >= 3 {
        (load_shipments(&args[1])?, load_vehicles(&args[2])?)
    } else {
        warn!("No input files given, generating seeded fixture shipments");
        (generate_shipments(20, depot, SEED), default_fleet())
    };

    let config = OptimizerConfig::default();
    let response = run_optimization(&shipments, &vehicles, depot, &config, &GreatCircle);

    if !response.success {
        eprintln!("{}", response.message.red());
        return Err(response.message.into());
    }

    println!("{}", response.message.green());
    for trip in &response.trips {
        let utilization = format!(
            "capacity {:>6.2}% | time {:>6.2}% | coverage {:>6.2}%",
            trip.capacity_pct, trip.time_pct, trip.coverage_pct
        );
        let utilization = if trip.capacity_pct > 100.0 || trip.time_pct > 100.0 || trip.coverage_pct > 100.0
        {
            utilization.red()
        } else {
            utilization.normal()
        };
        println!(
            "Trip {:>3} [{}] {:>2} shipments, {:>7.2} km, {:>7.2} min | {}",
            trip.id,
            trip.vehicle_type,
            trip.shipment_count(),
            trip.round_trip_km,
            trip.trip_time_min,
            utilization
        );
        for shipment in &trip.shipments {
            println!(
                "    {} ({:.6}, {:.6}) {}",
                shipment.id,
                shipment.location.lat,
                shipment.location.lon,
                shipment.timeslot.as_deref().unwrap_or("N/A")
            );
        }
    }

    let stamp = Utc::now().format("%Y%m%d-%H%M%S");
    let report_path = format!("optimized-trips-{stamp}.csv");
    let map_path = format!("optimized-trips-{stamp}.html");

    write_trip_report(&response.trips, &report_path)?;
    fs::write(&map_path, render_map(&response.trips, depot))?;
    info!("Report written to {}, map written to {}", report_path, map_path);

    Ok(())
}
