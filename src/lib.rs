pub mod config;
pub mod distance;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod fixtures;
pub mod io;
pub mod solver;

pub use config::OptimizerConfig;
pub use domain::trip::Trip;
pub use domain::types::{GeoPoint, Shipment, Tier, VehicleProfile};
pub use error::OptimizeError;
pub use solver::orchestrator::{optimize, run_optimization, OptimizationResponse};
