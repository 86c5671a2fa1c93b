pub mod loader;
pub mod map;
pub mod report;
