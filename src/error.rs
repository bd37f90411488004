//! Error types for the card renderer

use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or exporting a card
#[derive(Error, Debug)]
pub enum Error {
    /// A submission failed its presence checks
    #[error("Invalid submission: {0}")]
    Form(String),

    /// Failed to compose the card document
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Failed to rasterize the composed card
    #[error("Rasterization failed: {0}")]
    Raster(String),

    /// Failed to deliver the exported artifact
    #[error("Export failed: {0}")]
    Export(String),

    /// An export is already in flight; retry once it settles
    #[error("An export is already in progress")]
    ExportInFlight,

    /// A bundled or user-supplied asset could not be read
    #[error("Asset error: {0}")]
    Asset(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
