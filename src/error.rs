//! Error types for the typesetting engine.
//!
//! Unsupported glyphs and over-wide words are not errors: both are
//! recovered locally (fallback glyph, overflowing line) and never reach
//! the caller.

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid caller input (e.g., empty block list)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal invariant violation while assembling the PDF structure.
    ///
    /// This is a defect path: it should not occur under a correct
    /// implementation and is fatal to the call when it does.
    #[error("Serialization fault: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
