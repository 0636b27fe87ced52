//! Serialized form of a [`BitArray`](crate::BitArray).
//!
//! A snapshot is the plain `(length, blocks)` pair behind a bit array. It is
//! what serde sees when a `BitArray` is serialized, and converting a snapshot
//! back into a `BitArray` re-runs the storage validation, so a decoded array
//! always has `ceil(length / 8)` blocks and clear padding bits.
//!
//! Both encodings are in-memory only.
//!
//! # Example
//!
//! ```
//! use bitblocks::{BitArray, BitArraySnapshot};
//!
//! let mut ba = BitArray::new(12).unwrap();
//! ba.set_bit(4).unwrap();
//!
//! let json = ba.to_json().unwrap();
//! let snapshot = BitArraySnapshot::from_json(&json).unwrap();
//! assert_eq!(snapshot.length, 12);
//! assert_eq!(snapshot.blocks, vec![0x10, 0x00]);
//!
//! let restored = BitArray::try_from(snapshot).unwrap();
//! assert_eq!(restored, ba);
//! ```

use crate::Result;
use serde::{Deserialize, Serialize};

/// Raw `(length, blocks)` pair of a bit array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BitArraySnapshot {
    /// Number of addressable bits
    pub length: usize,
    /// Storage blocks, most-significant bit first
    pub blocks: Vec<u8>,
}

impl BitArraySnapshot {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON string.
    ///
    /// Only the shape is checked here; layout checks happen when the
    /// snapshot is converted into a `BitArray`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to binary (bincode).
    pub fn to_binary(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from binary (bincode).
    pub fn from_binary(data: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(data)?)
    }
}
