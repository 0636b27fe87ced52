//! BitArray - Fixed-capacity bit array backed by 8-bit blocks.
//!
//! This module provides a dense bit array whose storage is a plain byte
//! vector. Positions are 1-based and every access is bounds-checked, so bad
//! positions come back as errors rather than panics.
//!
//! # Design
//!
//! - Uses `Vec<u8>` for storage (8-bit blocks)
//! - Bit indexing: block_idx = (p - 1) / 8, offset = (p - 1) % 8
//! - Offset 0 is the most-significant bit of a block (mask `0x80`)
//! - Length is fixed at construction; padding bits in the last block stay 0
//! - Setting a set bit or clearing a clear bit is an error, not a no-op
//!
//! # Examples
//!
//! ```
//! use bitblocks::BitArray;
//!
//! let mut ba = BitArray::new(16).unwrap();
//! ba.set_bit(2).unwrap();
//! ba.set_bit(16).unwrap();
//! assert_eq!(ba.blocks(), &[0x40, 0x01]);
//! assert_eq!(ba.to_value(), vec![2, 16]);
//! assert_eq!(ba.to_string(), "0100000000000001");
//! ```

use crate::snapshot::BitArraySnapshot;
use crate::{BitArrayError, Result};
use bitvec::prelude::*;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Block type for bit storage (8-bit unsigned integer)
pub type Block = u8;

/// Number of bits per block
pub const BITS_PER_BLOCK: usize = 8;

/// Maximum block value
const BLOCK_MAX: Block = Block::MAX;

/// Mask of the most-significant bit, i.e. offset 0
const HIGH_BIT: Block = 0x80;

/// Number of blocks needed to hold `length` bits
#[inline(always)]
const fn blocks_for(length: usize) -> usize {
    length.div_ceil(BITS_PER_BLOCK)
}

/// Get (block index, offset within block) from a validated 1-based position
#[inline(always)]
const fn block_position(position: usize) -> (usize, usize) {
    let idx = position - 1;
    (idx / BITS_PER_BLOCK, idx % BITS_PER_BLOCK)
}

/// Single-bit mask for `offset`, MSB first
#[inline(always)]
const fn bit_mask(offset: usize) -> Block {
    HIGH_BIT >> offset
}

/// Test the bit at `offset` (0..=7, MSB first) of a single block
#[inline(always)]
const fn is_bit_set(block: Block, offset: usize) -> bool {
    block & bit_mask(offset) != 0
}

/// Fixed-capacity bit array using 8-bit block storage.
///
/// All bit positions are 1-based, in the range `[1, size()]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "BitArraySnapshot")]
pub struct BitArray {
    /// Storage blocks, `ceil(length / 8)` of them
    blocks: Vec<Block>,
    /// Number of addressable bits
    length: usize,
}

impl BitArray {
    /// Create a new BitArray with `length` bits, all initialized to 0.
    ///
    /// Fails with [`BitArrayError::LengthNotPositive`] when `length` is 0 and
    /// with [`BitArrayError::CapacityExceeded`] when the blocks cannot be
    /// allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitblocks::BitArray;
    ///
    /// let ba = BitArray::new(17).unwrap();
    /// assert_eq!(ba.size(), 17);
    /// assert_eq!(ba.num_blocks(), 3);
    /// assert!(ba.to_value().is_empty());
    /// ```
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(BitArrayError::LengthNotPositive);
        }
        let num_blocks = blocks_for(length);
        let mut blocks = Vec::new();
        blocks
            .try_reserve_exact(num_blocks)
            .map_err(|_| BitArrayError::CapacityExceeded { length })?;
        blocks.resize(num_blocks, 0);
        Ok(Self { blocks, length })
    }

    /// Create a BitArray over existing block storage.
    ///
    /// `blocks` must hold exactly `ceil(length / 8)` blocks and every bit past
    /// `length` in the last block must be clear.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitblocks::BitArray;
    ///
    /// let ba = BitArray::from_blocks(24, vec![0x80, 0x30, 0x81]).unwrap();
    /// assert_eq!(ba.to_value(), vec![1, 11, 12, 17, 24]);
    /// ```
    pub fn from_blocks(length: usize, blocks: Vec<Block>) -> Result<Self> {
        if length == 0 {
            return Err(BitArrayError::LengthNotPositive);
        }

        let expected = blocks_for(length);
        if blocks.len() != expected {
            return Err(BitArrayError::BlockCountMismatch {
                expected,
                actual: blocks.len(),
            });
        }

        let valid_bits = length % BITS_PER_BLOCK;
        if valid_bits != 0 {
            let padding = BLOCK_MAX >> valid_bits;
            if blocks[expected - 1] & padding != 0 {
                return Err(BitArrayError::PaddingBitsSet { length });
            }
        }

        Ok(Self { blocks, length })
    }

    /// Check a 1-based position against the array bounds.
    fn validate_position(&self, position: i64) -> Result<usize> {
        if position < 1 {
            return Err(BitArrayError::PositionNotPositive { position });
        }
        match usize::try_from(position) {
            Ok(p) if p <= self.length => Ok(p),
            _ => Err(BitArrayError::PositionOutOfRange {
                position,
                length: self.length,
            }),
        }
    }

    // =========================================================================
    // Single Bit Operations
    // =========================================================================

    /// Set bit at `position` to 1.
    ///
    /// Fails with [`BitArrayError::AlreadySet`] if the bit is already 1.
    /// Storage is left untouched on every error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitblocks::{BitArray, BitArrayError};
    ///
    /// let mut ba = BitArray::new(16).unwrap();
    /// ba.set_bit(16).unwrap();
    /// assert_eq!(ba.blocks(), &[0x00, 0x01]);
    /// assert!(matches!(ba.set_bit(16), Err(BitArrayError::AlreadySet { .. })));
    /// ```
    pub fn set_bit(&mut self, position: i64) -> Result<()> {
        let p = self.validate_position(position)?;
        let (block, offset) = block_position(p);

        if is_bit_set(self.blocks[block], offset) {
            return Err(BitArrayError::AlreadySet { position });
        }
        self.blocks[block] |= bit_mask(offset);
        Ok(())
    }

    /// Clear bit at `position` (set to 0).
    ///
    /// Fails with [`BitArrayError::NotSet`] if the bit is already 0.
    pub fn unset_bit(&mut self, position: i64) -> Result<()> {
        let p = self.validate_position(position)?;
        let (block, offset) = block_position(p);

        if !is_bit_set(self.blocks[block], offset) {
            return Err(BitArrayError::NotSet { position });
        }
        self.blocks[block] &= !bit_mask(offset);
        Ok(())
    }

    /// Check whether the bit at `position` is set.
    #[inline]
    pub fn is_set(&self, position: i64) -> Result<bool> {
        let p = self.validate_position(position)?;
        let (block, offset) = block_position(p);
        Ok(is_bit_set(self.blocks[block], offset))
    }

    // =========================================================================
    // Enumeration
    // =========================================================================

    /// Get positions of all set bits.
    ///
    /// Returns 1-based positions in ascending order; empty when no bit is set.
    pub fn to_value(&self) -> Vec<usize> {
        self.blocks.view_bits::<Msb0>()[..self.length]
            .iter_ones()
            .map(|idx| idx + 1)
            .collect()
    }

    // =========================================================================
    // Counting Operations
    // =========================================================================

    /// Count number of set bits (population count).
    #[inline]
    pub fn num_set(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Count number of cleared bits.
    #[inline]
    pub fn num_cleared(&self) -> usize {
        self.length - self.num_set()
    }

    // =========================================================================
    // Information and Access
    // =========================================================================

    /// Get number of addressable bits.
    #[inline]
    pub fn size(&self) -> usize {
        self.length
    }

    /// Get number of blocks in storage.
    #[inline]
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Get direct read-only access to block storage.
    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Consume the array and return its block storage.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Estimate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.blocks.capacity() * std::mem::size_of::<Block>()
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON string, validating the storage layout.
    pub fn from_json(json: &str) -> Result<Self> {
        BitArraySnapshot::from_json(json)?.try_into()
    }

    /// Serialize to binary (bincode).
    pub fn to_binary(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from binary (bincode), validating the storage layout.
    pub fn from_binary(data: &[u8]) -> Result<Self> {
        BitArraySnapshot::from_binary(data)?.try_into()
    }
}

impl fmt::Display for BitArray {
    /// Render every storage bit as '0' or '1', block by block, MSB first.
    ///
    /// Padding bits in the last block are included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            write!(f, "{:08b}", block)?;
        }
        Ok(())
    }
}

/// Borrowed view with the same shape as [`BitArraySnapshot`]
#[derive(Serialize)]
#[serde(rename = "BitArraySnapshot")]
struct SnapshotRef<'a> {
    length: usize,
    blocks: &'a [Block],
}

impl Serialize for BitArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        SnapshotRef {
            length: self.length,
            blocks: &self.blocks,
        }
        .serialize(serializer)
    }
}

impl From<BitArray> for BitArraySnapshot {
    fn from(ba: BitArray) -> Self {
        Self {
            length: ba.length,
            blocks: ba.blocks,
        }
    }
}

impl TryFrom<BitArraySnapshot> for BitArray {
    type Error = BitArrayError;

    fn try_from(snapshot: BitArraySnapshot) -> Result<Self> {
        Self::from_blocks(snapshot.length, snapshot.blocks)
    }
}
