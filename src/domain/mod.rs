pub mod trip;
pub mod types;
