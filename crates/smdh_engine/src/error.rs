//! Unified error types for smdh_engine

use thiserror::Error;

/// Main error type for SMDH generation and theme packaging.
#[derive(Debug, Error)]
pub enum SmdhError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Assembly Errors ===
    #[error("Write of {len} bytes at offset {offset} exceeds buffer size {capacity}")]
    BufferOverflow { offset: usize, len: usize, capacity: usize },

    #[error("SMDH layout mismatch: expected {expected} bytes, cursor ended at {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    // === External Errors ===
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Result type alias for smdh_engine operations
pub type Result<T> = std::result::Result<T, SmdhError>;
