pub mod clustering;
pub mod orchestrator;
pub mod packing;
