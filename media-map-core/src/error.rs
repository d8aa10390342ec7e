/// Error types for the media map engine
use thiserror::Error;

/// Main error type for map view operations
#[derive(Error, Debug)]
pub enum SiteMapError {
    /// The record store could not serve a read
    #[error("Failed to fetch records: {0}")]
    Fetch(String),

    /// The JSON-RPC endpoint answered with an error payload
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// HTTP transport failed
    #[cfg(feature = "rpc")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A payload could not be decoded
    #[error("Failed to decode payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The view was asked to create a second surface
    #[error("Map surface already created")]
    AlreadyMounted,

    /// The surface was released by an unmount
    #[error("Map surface already released")]
    SurfaceReleased,

    /// An operation needed a surface that was never created
    #[error("Map surface not created")]
    NotMounted,

    /// The map rendering capability rejected an operation
    #[error("Map backend error: {0}")]
    Backend(String),

    /// The navigation capability could not open a record
    #[error("Navigation failed: {0}")]
    Navigation(String),
}

/// Type alias for Results using SiteMapError
pub type Result<T> = std::result::Result<T, SiteMapError>;
