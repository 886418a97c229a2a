// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Deref, DerefMut};

use crate::{ByteIndex, LengthMarker, UnitCompare, byte_index};

/// Represents a byte length measurement (1-based).
///
/// A `ByteLength` represents the number of bytes in a buffer, string segment, or other
/// byte-oriented structure. Unlike [`ByteIndex`] which is 0-based (representing
/// positions), `ByteLength` is 1-based (representing sizes/counts).
///
/// # Type System Integration
///
/// `ByteLength` implements [`LengthMarker`] with [`ByteIndex`] as its associated index
/// type, creating a bidirectional relationship that allows for type-safe bounds checking
/// operations specific to byte measurements.
///
/// # Examples
///
/// ```rust
/// use r3bl_str_view::{IndexMarker, byte_index, byte_len};
///
/// // Create a buffer with 10 bytes
/// let buffer_size = byte_len(10);
///
/// // Check if an index is within bounds
/// let index = byte_index(5);
/// assert!(!index.overflows(buffer_size));
///
/// // Index at the boundary
/// let boundary_index = byte_index(9);
/// assert!(!boundary_index.overflows(buffer_size));
///
/// // Index beyond boundary
/// let beyond_index = byte_index(10);
/// assert!(beyond_index.overflows(buffer_size));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct ByteLength(pub usize);

/// Creates a new [`ByteLength`] from any type that can be converted into it.
///
/// This is a convenience function that is equivalent to calling [`ByteLength::from`].
///
/// # Examples
///
/// ```rust
/// use r3bl_str_view::{ByteLength, byte_len};
///
/// let length = byte_len(42);
/// assert_eq!(length, ByteLength::from(42usize));
/// ```
pub fn byte_len(arg_byte_length: impl Into<ByteLength>) -> ByteLength {
    arg_byte_length.into()
}

impl ByteLength {
    /// Get the length value as a usize.
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }
}

impl Deref for ByteLength {
    type Target = usize;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl DerefMut for ByteLength {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl From<usize> for ByteLength {
    fn from(it: usize) -> Self { Self(it) }
}

impl From<u16> for ByteLength {
    fn from(it: u16) -> Self { Self(it as usize) }
}

impl From<i32> for ByteLength {
    #[allow(clippy::cast_sign_loss)]
    fn from(it: i32) -> Self { Self(it as usize) }
}

impl From<ByteIndex> for ByteLength {
    /// Convert a byte index to a byte length.
    ///
    /// This adds 1 to convert from 0-based index to 1-based length.
    fn from(it: ByteIndex) -> Self { Self(it.as_usize() + 1) }
}

impl UnitCompare for ByteLength {
    /// Convert the byte length to a usize value for numeric comparison.
    fn as_usize(&self) -> usize { self.0 }
}

impl LengthMarker for ByteLength {
    type IndexType = ByteIndex;

    /// Convert this length to the corresponding index type (0-based).
    ///
    /// Since lengths are 1-based and indices are 0-based, this subtracts 1
    /// to get the last valid index position, saturating at 0.
    ///
    /// ```text
    /// Length=6 (1-based) to index (0-based) conversion:
    ///
    /// Length:     1   2   3   4   5   6
    /// (1-based) ┌───┬───┬───┬───┬───┬───┐
    ///           │   │   │   │   │   │   │
    ///           └───┴───┴───┴───┴───┴───┘
    /// Index:      0   1   2   3   4   5
    /// (0-based)                       ↑
    ///           convert_to_index() = 5 (0-based, last valid position)
    /// ```
    fn convert_to_index(&self) -> ByteIndex { byte_index(self.0.saturating_sub(1)) }
}
