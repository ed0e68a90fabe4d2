//! Error types for the eca-eval library.

use thiserror::Error;

/// Result type for eca-eval operations.
pub type Result<T> = std::result::Result<T, EcaError>;

/// Error types that can occur while scoring content areas.
#[derive(Error, Debug)]
pub enum EcaError {
    /// Error during JSON parsing or serialization.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error during I/O operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Circle with a negative or non-finite radius, or a non-finite center.
    #[error("Invalid circle: {0}")]
    InvalidCircle(String),

    /// Frame with a zero dimension.
    #[error("Invalid frame size: {0}")]
    InvalidFrameSize(String),

    /// The circle does not overlap the frame, so there is no content area.
    #[error("Disjoint content area: {0}")]
    DisjointContentArea(String),

    /// Boundary sampling requested with zero points.
    #[error("Invalid point count: {0}")]
    InvalidPointCount(String),

    /// Invalid annotation data.
    #[error("Invalid annotation: {0}")]
    InvalidAnnotation(String),

    /// Invalid distance threshold.
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    /// A crop box could not be derived from the content area.
    #[error("Invalid crop: {0}")]
    InvalidCrop(String),

    /// Empty dataset provided.
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),
}
