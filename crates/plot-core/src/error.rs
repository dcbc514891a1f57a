// File: crates/plot-core/src/error.rs
// Summary: Error taxonomy shared by the session, plots, surfaces and allocators.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    /// Bounds that do not describe a (possibly empty) range, or NaN bounds.
    #[error("invalid axis limits: {0}")]
    InvalidLimits(&'static str),
    /// Union requested over zero bounding boxes.
    #[error("cannot fit axis limits over an empty collection")]
    EmptyFit,
    #[error("invalid render options: {0}")]
    InvalidOptions(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A plot, sample buffer, session or surface was used after release.
    #[error("{0} has been disposed")]
    Disposed(&'static str),
    #[error("color palette is empty")]
    EmptyPalette,
    /// Failure reported by a drawing backend.
    #[error("surface error: {0}")]
    Surface(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;
