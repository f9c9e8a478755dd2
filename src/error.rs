//! Error types for the directory client and the favorites store.
//!
//! No error here is fatal: fetch failures degrade to an empty list at the
//! view boundary, load failures degrade to an empty set inside the store,
//! and write failures surface as a failed mutation the caller can retry.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the remote user fetch.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, TLS)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    /// Response body was not a valid users page
    #[error("malformed users payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors from the favorites store.
///
/// `Read` and `Decode` never escape `FavoritesStore::load`, which degrades
/// to an empty set; `Write` is returned from every mutation that fails to
/// persist, after the in-memory set has been rolled back.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persisted entry exists but could not be read
    #[error("failed to read favorites from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The persisted entry exists but is not a valid favorites array
    #[error("favorites entry at {path} is corrupt: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The updated set could not be persisted
    #[error("failed to persist favorites to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
