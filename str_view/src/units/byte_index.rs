// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Deref, DerefMut};

use crate::{ByteLength, IndexMarker, LengthMarker, UnitCompare, byte_len};

/// Represents a byte position (0-based) within a view or buffer.
///
/// A `ByteIndex` identifies a single byte inside a byte-oriented structure. Unlike
/// [`ByteLength`] which is 1-based (representing sizes/counts), `ByteIndex` is 0-based
/// (representing positions), so the first byte of a buffer is at index 0.
///
/// # Type System Integration
///
/// `ByteIndex` implements [`IndexMarker`] with [`ByteLength`] as its associated length
/// type, creating a bidirectional relationship that allows for type-safe bounds checking
/// operations specific to byte measurements.
///
/// # Examples
///
/// ```rust
/// use r3bl_str_view::{IndexMarker, byte_index, byte_len};
///
/// // A buffer holding 10 bytes.
/// let buffer_size = byte_len(10);
///
/// // Positions 0 through 9 are valid.
/// let index = byte_index(5);
/// assert!(!index.overflows(buffer_size));
///
/// // Position 10 is past the last byte.
/// let beyond_index = byte_index(10);
/// assert!(beyond_index.overflows(buffer_size));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct ByteIndex(pub usize);

/// Creates a new [`ByteIndex`] from any type that can be converted into it.
///
/// This is a convenience function that is equivalent to calling [`ByteIndex::from`].
///
/// # Examples
///
/// ```rust
/// use r3bl_str_view::{ByteIndex, byte_index};
///
/// let index = byte_index(42);
/// assert_eq!(index, ByteIndex::from(42usize));
/// ```
pub fn byte_index(arg_byte_index: impl Into<ByteIndex>) -> ByteIndex {
    arg_byte_index.into()
}

impl ByteIndex {
    /// Get the index value as a usize.
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }
}

impl Deref for ByteIndex {
    type Target = usize;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl DerefMut for ByteIndex {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl From<usize> for ByteIndex {
    fn from(it: usize) -> Self { Self(it) }
}

impl From<u16> for ByteIndex {
    fn from(it: u16) -> Self { Self(it as usize) }
}

impl From<i32> for ByteIndex {
    #[allow(clippy::cast_sign_loss)]
    fn from(it: i32) -> Self { Self(it as usize) }
}

impl From<ByteLength> for ByteIndex {
    /// Convert a byte length to a byte index.
    ///
    /// This subtracts 1 to convert from 1-based length to 0-based index,
    /// saturating at 0 for an empty length.
    fn from(it: ByteLength) -> Self { it.convert_to_index() }
}

impl UnitCompare for ByteIndex {
    /// Convert the byte index to a usize value for numeric comparison.
    fn as_usize(&self) -> usize { self.0 }
}

impl IndexMarker for ByteIndex {
    type LengthType = ByteLength;

    /// Convert this index to the corresponding length type (1-based).
    ///
    /// Since indices are 0-based and lengths are 1-based, this adds 1 to get
    /// the length that ends at this position.
    ///
    /// ```text
    /// Index=5 (0-based) to length (1-based) conversion:
    ///
    /// Index:      0   1   2   3   4   5
    /// (0-based) ┌───┬───┬───┬───┬───┬───┐
    ///           │   │   │   │   │   │   │
    ///           └───┴───┴───┴───┴───┴───┘
    /// Length:     1   2   3   4   5   6
    /// (1-based)                       ↑
    ///           convert_to_length() = 6 (1-based)
    /// ```
    fn convert_to_length(&self) -> ByteLength { byte_len(self.0 + 1) }
}
