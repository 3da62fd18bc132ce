//! Error types for the lipi library.
//!
//! The repair and extraction engines themselves never fail on malformed
//! input; they degrade to smaller output. Errors here cover the edges of
//! the library: file I/O, JSON output serialization, and the persistence
//! collaborator.

use std::io;
use thiserror::Error;

/// Result type alias for lipi operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around the core engines.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing records to JSON output.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The persistence collaborator rejected an operation.
    #[error("store error: {0}")]
    Store(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
