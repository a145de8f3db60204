//! Error types for puzzle input acquisition

use thiserror::Error;

/// Errors that can occur while resolving a puzzle input
#[derive(Error, Debug)]
pub enum InputError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid HTTP status code received
    #[error("Invalid HTTP status: {status}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),

    /// Reading or writing a cache file failed
    #[error("Cache I/O error: {0}")]
    Cache(#[from] std::io::Error),

    /// The cache directory could not be created
    #[error("Failed to create cache directory: {0}")]
    CacheDir(String),

    /// The input is not cached and no session is configured to fetch it
    #[error("Input for {year}/{day:02} is not cached and no session is set (export AOC_SESSION)")]
    MissingSession {
        /// Event year
        year: u16,
        /// Puzzle day
        day: u8,
    },
}
