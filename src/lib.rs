//! Bitblocks - Fixed-Capacity Bit Arrays on Byte Storage
//!
//! Bitblocks provides a dense, fixed-length sequence of individually
//! addressable bits packed eight to a byte. It is a flag set, not a bignum:
//! bits are set, cleared, tested, enumerated and rendered, and the length
//! never changes after construction.
//!
//! # Key Characteristics
//!
//! - 1-based bit positions, `[1, size()]`
//! - Byte storage, most-significant bit first within each byte
//! - Every access is checked; bad positions are errors, never panics
//! - Setting a set bit or clearing a clear bit is reported, not ignored
//!
//! # Examples
//!
//! ## Basic BitArray Usage
//!
//! ```
//! use bitblocks::{BitArray, BitArrayError};
//!
//! let mut ba = BitArray::new(17).unwrap();
//! ba.set_bit(9).unwrap();
//! assert_eq!(ba.blocks(), &[0x00, 0x80, 0x00]);
//! assert!(ba.is_set(9).unwrap());
//!
//! // Positions outside [1, 17] are errors
//! assert!(matches!(ba.set_bit(0), Err(BitArrayError::PositionNotPositive { .. })));
//! assert!(matches!(ba.set_bit(18), Err(BitArrayError::PositionOutOfRange { .. })));
//!
//! // Callers decide whether a repeated set is benign
//! match ba.set_bit(9) {
//!     Err(BitArrayError::AlreadySet { .. }) => {}
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```
//!
//! ## Enumeration and Rendering
//!
//! ```
//! use bitblocks::BitArray;
//!
//! let ba = BitArray::from_blocks(16, vec![0xFF, 0x0F]).unwrap();
//! assert_eq!(ba.to_value(), vec![1, 2, 3, 4, 5, 6, 7, 8, 13, 14, 15, 16]);
//! assert_eq!(ba.to_string(), "1111111100001111");
//! ```
//!
//! # Concurrency
//!
//! A `BitArray` is a plain owned value with no internal synchronization.
//! Mutation takes `&mut self`; sharing across threads is up to the caller
//! (e.g. a `Mutex` or `RwLock`).

pub mod bitarray;
pub mod error;
pub mod snapshot;

// Re-exports for convenient access
pub use bitarray::{BitArray, Block, BITS_PER_BLOCK};
pub use error::{BitArrayError, Result};
pub use snapshot::BitArraySnapshot;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "Bitblocks";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
