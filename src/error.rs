use thiserror::Error;

/// Crate-wide error type. Malformed individual lines/rows in the loaders are
/// never represented here -- those are logged at `warn` and skipped.
#[derive(Debug, Error)]
pub enum BgpSimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cycle detected in provider relationship graph")]
    Cycle,
}
