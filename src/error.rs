//! Error types used by this crate.

use std::{io, net::SocketAddr};

use thiserror::Error;

/// Error returned when a Steam app manifest file could not be read or scanned.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Error originating from [`io::Error`], including files which are not valid UTF-8
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A line carrying a known key had no value token after it
    #[error("Malformed `{key}` line: {line:?}")]
    Malformed { key: &'static str, line: String },
}

/// Error returned when the HTTP server cannot start or stops unexpectedly.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Could not bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server stopped with an error: {0}")]
    Serve(#[source] io::Error),
}
