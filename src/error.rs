//! Error types for bitblocks.
//!
//! Every fallible operation in the crate returns [`BitArrayError`] through the
//! [`Result`] alias. Errors are reported to the immediate caller; nothing in
//! the crate retries or swallows them.

use thiserror::Error;

/// The error type for bit array operations.
///
/// Callers are expected to branch on the variant, not on the message text.
#[derive(Error, Debug)]
pub enum BitArrayError {
    /// Position argument was zero or negative
    #[error("Position must be larger than 0, got {position}")]
    PositionNotPositive {
        /// The position that was requested
        position: i64,
    },

    /// Position argument was past the end of the array
    #[error("Position out of range: position {position}, length {length}")]
    PositionOutOfRange {
        /// The position that was requested
        position: i64,
        /// The configured length
        length: usize,
    },

    /// Bit was already set
    #[error("Bit {position} was already set")]
    AlreadySet {
        /// The position that was requested
        position: i64,
    },

    /// Bit was not set
    #[error("Bit {position} was not set")]
    NotSet {
        /// The position that was requested
        position: i64,
    },

    /// Array was constructed with a length of zero
    #[error("Length must be larger than 0")]
    LengthNotPositive,

    /// Block storage for the requested length could not be allocated
    #[error("Cannot allocate storage for length {length}")]
    CapacityExceeded {
        /// The requested length
        length: usize,
    },

    /// Backing storage does not hold exactly ceil(length / 8) blocks
    #[error("Invalid block count: expected {expected}, got {actual}")]
    BlockCountMismatch {
        /// Expected number of blocks
        expected: usize,
        /// Number of blocks supplied
        actual: usize,
    },

    /// Storage bits beyond the logical length were set
    #[error("Padding bits beyond length {length} must be clear")]
    PaddingBitsSet {
        /// The configured length
        length: usize,
    },

    /// Binary serialization error occurred
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// JSON serialization error occurred
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for bit array operations.
pub type Result<T> = std::result::Result<T, BitArrayError>;
