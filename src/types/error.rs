use thiserror::Error;

/// gapless error types
#[derive(Error, Debug)]
pub enum GaplessError {
    /// Granularity tag outside the closed enumeration
    #[error("unknown granularity: {0:?}")]
    UnknownGranularity(String),
}

/// Result type alias for gapless
pub type Result<T> = std::result::Result<T, GaplessError>;
