use thiserror::Error;

/// Failures the orchestrator reports to its caller. Provider failures are
/// not listed here on purpose: the distance layer recovers from them
/// locally and they never abort a run.
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("input error: {0}")]
    Input(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// External distance lookup failed (HTTP error, timeout, bad payload).
#[derive(Debug, Error)]
#[error("distance provider failure: {0}")]
pub struct ProviderError(pub String);
