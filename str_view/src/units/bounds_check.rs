// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bounds checking utilities for byte index validation.
//!
//! This module provides a type-safe system for validating byte positions against
//! byte lengths, used by the view types in this crate to decide whether an access
//! is safe, clamped, or an error.
//!
//! # Core Concepts
//!
//! The module implements two distinct paradigms for bounds checking:
//!
//! ## Array-Style Bounds Checking (`check_overflows`)
//!
//! Traditional array bounds checking where an index is valid if it's less than the
//! maximum length. Returns [`Within`](BoundsOverflowStatus::Within) for safe access or
//! [`Overflowed`](BoundsOverflowStatus::Overflowed) when bounds are exceeded. This is
//! the paradigm for element access, where the index must name an existing byte.
//!
//! ## Content Position Checking (`check_content_position`)
//!
//! Content-aware position checking for operations where the "one past the end"
//! position is still meaningful, such as taking an empty tail slice. Returns
//! [`ContentPositionStatus`] variants indicating the relationship between an index
//! and content boundaries, including start, within, end, and beyond positions.
//!
//! # Type System
//!
//! The trait system enforces several important constraints:
//! - Only index types can be bounds-checked against length types
//! - Each length type has a corresponding index type via [`LengthMarker::IndexType`]
//!   and each index type points back via [`IndexMarker::LengthType`]
//! - Automatic conversion between compatible types via
//!   [`LengthMarker::convert_to_index`] and [`IndexMarker::convert_to_length`]
//!
//! A single generic implementation of [`BoundsCheck`] works for any index type
//! implementing [`IndexMarker`] paired with its length type implementing
//! [`LengthMarker`], ensuring consistent behavior across all unit types.
//!
//! # Usage Examples
//!
//! ```
//! use r3bl_str_view::{BoundsCheck, ContentPositionStatus, IndexMarker, LengthMarker,
//!                     byte_index, byte_len};
//!
//! let content_length = byte_len(10);
//! let pos = byte_index(8);
//!
//! // Content position checking for slicing operations.
//! match pos.check_content_position(content_length) {
//!     ContentPositionStatus::AtStart => println!("Position at start"),
//!     ContentPositionStatus::Within => println!("Position on content"),
//!     ContentPositionStatus::AtEnd => println!("Position at end"),
//!     ContentPositionStatus::Beyond => println!("Invalid position"),
//! }
//!
//! // Array-style overflow checking - two equivalent approaches:
//!
//! // Approach 1: Length perspective - "Does this length get overflowed by this index?"
//! if !content_length.is_overflowed_by(pos) {
//!     // Safe to access content[pos]
//! }
//!
//! // Approach 2: Index perspective - "Does this index overflow this length?"
//! if !pos.overflows(content_length) {
//!     // Safe to access content[pos]
//! }
//! ```
//!
//! [`ByteIndex`]: crate::ByteIndex
//! [`ByteLength`]: crate::ByteLength

/// Result of array-style bounds checking operations.
///
/// Used with [`BoundsCheck::check_overflows`] to determine if an index can safely
/// access content. See the [module documentation](self) for details on the
/// bounds checking paradigms.
///
/// # Examples
///
/// ```
/// use r3bl_str_view::{BoundsCheck, BoundsOverflowStatus, byte_index, byte_len};
///
/// let index = byte_index(5);
/// let length = byte_len(10);
/// assert_eq!(index.check_overflows(length), BoundsOverflowStatus::Within);
///
/// let large_index = byte_index(10);
/// assert_eq!(large_index.check_overflows(length), BoundsOverflowStatus::Overflowed);
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BoundsOverflowStatus {
    /// Indicates that an index is within the bounds of a length.
    Within,
    /// Indicates that an index has overflowed the bounds of a length.
    Overflowed,
}

/// Core trait for unit comparison operations.
///
/// Provides standardized methods to convert unit types to common numeric types
/// for comparison operations. This trait enables generic implementations of
/// bounds checking across different unit types.
pub trait UnitCompare {
    /// Convert the unit to a usize value for numeric comparison, usually for array
    /// indexing operations.
    fn as_usize(&self) -> usize;

    /// Check whether this unit holds the value zero.
    ///
    /// For index types this means "at the start". For length types this means
    /// "empty".
    fn is_zero(&self) -> bool { self.as_usize() == 0 }
}

/// Marker trait for index-type units (0-based position indicators).
///
/// This trait identifies types that represent positions within content, such as
/// [`ByteIndex`]. These are 0-based values where the first position is index 0.
///
/// Each index type has a corresponding length type via [`LengthType`](Self::LengthType),
/// enabling safe bounds checking operations in both directions.
///
/// [`ByteIndex`]: crate::ByteIndex
pub trait IndexMarker: UnitCompare {
    /// The corresponding length type for this index type.
    ///
    /// The constraint `LengthMarker<IndexType = Self>` creates a bidirectional
    /// relationship: this ensures that the length type's `IndexType` points back to
    /// this same index type, preventing type mismatches.
    type LengthType: LengthMarker<IndexType = Self>;

    /// Convert this index to the corresponding length type.
    ///
    /// This involves adding 1 to the index value since indices are 0-based and
    /// lengths are 1-based.
    fn convert_to_length(&self) -> Self::LengthType;

    /// Answers the question: "Does this index overflow this length?"
    ///
    /// Check if this index overflows the given length's bounds.
    /// Returns true if the index is greater than or equal to the length.
    ///
    /// This is the inverse of [`LengthMarker::is_overflowed_by`] and provides
    /// a natural way to express bounds checking from the index's perspective.
    ///
    /// # Examples
    /// ```
    /// use r3bl_str_view::{IndexMarker, byte_index, byte_len};
    ///
    /// let index = byte_index(10);
    /// let max = byte_len(10);
    /// assert!(index.overflows(max));  // At boundary - overflows
    ///
    /// let smaller_index = byte_index(5);
    /// assert!(!smaller_index.overflows(max));  // Within bounds
    /// ```
    fn overflows(&self, length: Self::LengthType) -> bool
    where
        Self: PartialOrd + Sized + Copy,
    {
        length.is_overflowed_by(*self)
    }
}

/// Marker trait for length-type units (1-based size measurements).
///
/// This trait identifies types that represent sizes or lengths of content, such as
/// [`ByteLength`]. These are 1-based values where a length of 1 means "one unit of
/// size".
///
/// Each length type has a corresponding index type via [`IndexType`](Self::IndexType),
/// enabling safe bounds checking operations.
///
/// [`ByteLength`]: crate::ByteLength
pub trait LengthMarker: UnitCompare {
    /// The corresponding index type for this length type.
    ///
    /// The constraint `IndexMarker<LengthType = Self>` creates a bidirectional
    /// relationship: this ensures that the index type's `LengthType` points back to
    /// this same length type, preventing type mismatches.
    type IndexType: IndexMarker<LengthType = Self>;

    /// Convert this length to the corresponding index type.
    ///
    /// This involves subtracting 1 from the length value since lengths are 1-based
    /// and indices are 0-based.
    fn convert_to_index(&self) -> Self::IndexType;

    /// Answers the question: "Does this length get overflowed by this index?"
    ///
    /// Check if the given index would overflow this length's bounds.
    /// Returns true if the index is greater than or equal to the length.
    ///
    /// # Visual Example
    ///
    /// ```text
    /// Checking overflow for length=10:
    ///
    ///                                             boundary
    ///                                                 │
    /// Index:    0   1   2   3   4   5   6   7   8   9 │ 10  11  12
    ///         ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┼───┬───┬───┐
    ///         │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✗ │ ✗ │ ✗ │
    ///         ├───┴───┴───┴───┴───┴───┴───┴───┴───┴───┼───┴───┴───┤
    ///         ├────────── valid indices ──────────────┼─ overflow ┘
    ///         └────────── length=10 (1-based) ────────┘
    ///
    /// is_overflowed_by(5)  = false (within bounds)
    /// is_overflowed_by(9)  = false (last valid index)
    /// is_overflowed_by(10) = true (at boundary)
    /// is_overflowed_by(11) = true (beyond boundary)
    /// ```
    ///
    /// # Examples
    /// ```
    /// use r3bl_str_view::{LengthMarker, byte_index, byte_len};
    ///
    /// let max = byte_len(10);
    /// assert!(!max.is_overflowed_by(byte_index(5)));  // Within bounds
    /// assert!(max.is_overflowed_by(byte_index(10)));  // At boundary - overflows
    /// assert!(max.is_overflowed_by(byte_index(15)));  // Beyond boundary
    /// ```
    fn is_overflowed_by(&self, index: Self::IndexType) -> bool
    where
        Self::IndexType: PartialOrd,
    {
        // Special case: empty collection (length 0) has no valid indices
        if self.is_zero() {
            return true;
        }
        index > self.convert_to_index()
    }

    /// Calculate the remaining space from the given index to the end of this length.
    ///
    /// Returns the number of units between the index and the boundary defined by this
    /// length. For example, if this is a length of 10 and the index is at position 3,
    /// this returns a length of 7 (positions 3-9, inclusive).
    ///
    /// Returns a zero length if the index is at or beyond the boundary.
    ///
    /// # Visual Example
    ///
    /// ```text
    /// With length=10:
    ///
    ///                 index=3 (0-based)
    ///                       ↓
    /// Byte:     0   1   2   3   4   5   6   7   8   9
    ///         ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┐
    ///         │   │   │   │ × │ × │ × │ × │ × │ × │ × │
    ///         ├───┴───┴───┼───┴───┴───┴───┴───┴───┴───┤
    ///         │           └───── 7 bytes remain ──────┤
    ///         └────────── length=10 (1-based) ────────┘
    ///
    /// remaining_from(3)  = 7 (bytes from index 3 to 9)
    /// remaining_from(9)  = 1 (only position 9 remains)
    /// remaining_from(10) = 0 (at boundary, nothing remains)
    /// ```
    ///
    /// # Examples
    /// ```
    /// use r3bl_str_view::{LengthMarker, byte_index, byte_len};
    ///
    /// let max = byte_len(10);
    /// assert_eq!(max.remaining_from(byte_index(3)), byte_len(7));  // 7 bytes remain
    /// assert_eq!(max.remaining_from(byte_index(10)), byte_len(0)); // At boundary
    /// assert_eq!(max.remaining_from(byte_index(15)), byte_len(0)); // Beyond boundary
    /// ```
    fn remaining_from(&self, index: Self::IndexType) -> Self
    where
        Self: Sized + From<usize>,
        Self::IndexType: PartialOrd + Copy,
    {
        if self.is_overflowed_by(index) {
            Self::from(0)
        } else {
            Self::from(self.as_usize() - index.as_usize())
        }
    }
}

/// Core trait for index bounds validation.
///
/// Provides both array-style bounds checking and content position checking.
/// See the [module documentation](self) for detailed explanations of both paradigms.
///
/// This trait is generic over length types that implement [`LengthMarker`], and can
/// only be implemented by index types that implement [`IndexMarker`]. This ensures
/// type safety and prevents incorrect comparisons between incompatible types.
///
/// # Examples
///
/// ```
/// use r3bl_str_view::{BoundsCheck, BoundsOverflowStatus, byte_index, byte_len};
///
/// let index = byte_index(5);
/// let length = byte_len(5);
/// assert_eq!(index.check_overflows(length), BoundsOverflowStatus::Overflowed);
/// ```
pub trait BoundsCheck<LengthType: LengthMarker>
where
    Self: IndexMarker,
{
    /// Performs array-style bounds checking.
    ///
    /// Returns [`BoundsOverflowStatus::Within`] if the index can safely access
    /// content, [`BoundsOverflowStatus::Overflowed`] if the index would exceed
    /// array bounds. An empty length has no valid indices, so every index
    /// overflows it.
    fn check_overflows(&self, max: LengthType) -> BoundsOverflowStatus;

    /// Performs content position checking.
    ///
    /// Returns [`ContentPositionStatus`] indicating whether the index is within
    /// content, at a content boundary, or beyond content boundaries.
    ///
    /// # Visual Example
    ///
    /// ```text
    /// Content position checking:
    ///
    /// Self
    /// Index:      0   1   2   3   4   5   6   7   8   9   10  11
    /// (0-based) ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┐
    ///           │ S │ W │ W │ W │ W │ W │ W │ W │ W │ W │ E │ B │
    ///           ├─▲─┴─▲─┴───┴───┴───┴───┴───┴───┴───┴─▲─┴─▲─┼─▲─┘
    ///           │ │   │                               │   │ │ │
    ///           │Start│                               │  End│Beyond
    ///           │     └────────── Within ─────────────┘     │
    ///           └───────────── content_length=10 ───────────┘
    ///
    /// S = AtStart (index=0)
    /// W = Within (1 ≤ index < 10)
    /// E = AtEnd (index=10)
    /// B = Beyond (index > 10)
    /// ```
    fn check_content_position(&self, content_length: LengthType)
    -> ContentPositionStatus;
}

/// Generic implementation of [`BoundsCheck`] for any [`IndexMarker`] type with
/// [`LengthMarker`] type.
///
/// This single implementation works with all index and length types that implement the
/// required marker traits, eliminating code duplication and ensuring consistent
/// behavior. The trait system guarantees type safety by only allowing compatible
/// index-length pairs.
impl<IndexType, LengthType> BoundsCheck<LengthType> for IndexType
where
    IndexType: IndexMarker + PartialOrd + Copy,
    LengthType: LengthMarker<IndexType = IndexType>,
{
    fn check_overflows(&self, length: LengthType) -> BoundsOverflowStatus {
        if length.is_overflowed_by(*self) {
            BoundsOverflowStatus::Overflowed
        } else {
            BoundsOverflowStatus::Within
        }
    }

    fn check_content_position(
        &self,
        content_length: LengthType,
    ) -> ContentPositionStatus {
        let position = self.as_usize();
        let length = content_length.as_usize();

        if position > length {
            ContentPositionStatus::Beyond
        } else if position == 0 {
            ContentPositionStatus::AtStart
        } else if position == length {
            ContentPositionStatus::AtEnd
        } else {
            ContentPositionStatus::Within
        }
    }
}

/// Result of content position checking operations.
///
/// Used with [`BoundsCheck::check_content_position`] to determine the relationship
/// between an index and content boundaries. Essential for slicing operations where
/// the "one past the end" position is valid and yields an empty result, while
/// positions beyond that are errors.
///
/// See the [module documentation](self) for detailed explanation of content position
/// checking and use cases for each variant.
///
/// # Examples
///
/// ```
/// use r3bl_str_view::{BoundsCheck, ContentPositionStatus, byte_index, byte_len};
///
/// let content_length = byte_len(5);
///
/// assert_eq!(byte_index(0).check_content_position(content_length), ContentPositionStatus::AtStart);
/// assert_eq!(byte_index(3).check_content_position(content_length), ContentPositionStatus::Within);
/// assert_eq!(byte_index(5).check_content_position(content_length), ContentPositionStatus::AtEnd);
/// assert_eq!(byte_index(7).check_content_position(content_length), ContentPositionStatus::Beyond);
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ContentPositionStatus {
    /// Index is at the start of content (`index == 0`). For empty content, this takes
    /// precedence over `AtEnd`.
    AtStart,

    /// Index points to existing content (`0 < index < length`).
    Within,

    /// Index is at the content end boundary (`index == length && index > 0`), valid for
    /// empty tail slices.
    AtEnd,

    /// Index exceeds content boundaries (`index > length`), requires correction.
    Beyond,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{byte_index, byte_len};

    #[test]
    fn test_bounds_overflow_status_equality() {
        assert_eq!(BoundsOverflowStatus::Within, BoundsOverflowStatus::Within);
        assert_eq!(
            BoundsOverflowStatus::Overflowed,
            BoundsOverflowStatus::Overflowed
        );
        assert_ne!(
            BoundsOverflowStatus::Within,
            BoundsOverflowStatus::Overflowed
        );
    }

    #[test]
    fn test_bounds_overflow_status_copy() {
        let status1 = BoundsOverflowStatus::Within;
        let status2 = status1;
        assert_eq!(status1, status2);

        let status3 = BoundsOverflowStatus::Overflowed;
        let status4 = status3;
        assert_eq!(status3, status4);
    }

    #[test]
    fn test_bounds_overflow_status_debug() {
        assert_eq!(format!("{:?}", BoundsOverflowStatus::Within), "Within");
        assert_eq!(
            format!("{:?}", BoundsOverflowStatus::Overflowed),
            "Overflowed"
        );
    }

    #[test]
    fn test_position_status_equality() {
        assert_eq!(
            ContentPositionStatus::AtStart,
            ContentPositionStatus::AtStart
        );
        assert_eq!(ContentPositionStatus::Within, ContentPositionStatus::Within);
        assert_eq!(ContentPositionStatus::AtEnd, ContentPositionStatus::AtEnd);
        assert_eq!(ContentPositionStatus::Beyond, ContentPositionStatus::Beyond);
        assert_ne!(
            ContentPositionStatus::AtStart,
            ContentPositionStatus::Within
        );
        assert_ne!(ContentPositionStatus::Within, ContentPositionStatus::AtEnd);
        assert_ne!(ContentPositionStatus::AtEnd, ContentPositionStatus::Beyond);
    }

    #[test]
    fn test_position_status_debug() {
        assert_eq!(format!("{:?}", ContentPositionStatus::AtStart), "AtStart");
        assert_eq!(format!("{:?}", ContentPositionStatus::Within), "Within");
        assert_eq!(format!("{:?}", ContentPositionStatus::AtEnd), "AtEnd");
        assert_eq!(format!("{:?}", ContentPositionStatus::Beyond), "Beyond");
    }

    #[test]
    fn test_is_overflowed_by() {
        assert!(!byte_len(3).is_overflowed_by(byte_index(1)), "Within bounds");
        assert!(byte_len(3).is_overflowed_by(byte_index(3)), "At boundary");
        assert!(byte_len(3).is_overflowed_by(byte_index(5)), "Beyond bounds");
        assert!(
            byte_len(0).is_overflowed_by(byte_index(0)),
            "Empty collection edge case"
        );
    }

    #[test]
    fn test_overflows() {
        // Should mirror is_overflowed_by results.
        assert!(!byte_index(1).overflows(byte_len(3)), "Within bounds");
        assert!(byte_index(3).overflows(byte_len(3)), "At boundary");
        assert!(byte_index(5).overflows(byte_len(3)), "Beyond bounds");
        assert!(
            byte_index(0).overflows(byte_len(0)),
            "Empty collection edge case"
        );

        // Verify method matches is_overflowed_by behavior (inverse relationship).
        let test_cases = [(0, 0), (0, 1), (1, 1), (5, 10), (10, 10)];
        for (index_val, length_val) in test_cases {
            let index = byte_index(index_val);
            let length = byte_len(length_val);
            assert_eq!(
                index.overflows(length),
                length.is_overflowed_by(index),
                "overflows() should match is_overflowed_by() for index {index_val} and length {length_val}"
            );
        }
    }

    #[test]
    fn test_check_overflows_matches_is_overflowed_by() {
        let test_cases = [(0, 0), (0, 1), (1, 1), (5, 10), (9, 10), (10, 10)];
        for (index_val, length_val) in test_cases {
            let index = byte_index(index_val);
            let length = byte_len(length_val);
            assert_eq!(
                length.is_overflowed_by(index),
                index.check_overflows(length) == BoundsOverflowStatus::Overflowed,
                "check_overflows should match is_overflowed_by for index {index_val} and length {length_val}"
            );
        }
    }

    #[test]
    fn test_check_overflows_empty_length() {
        // An empty length has no valid indices.
        assert_eq!(
            byte_index(0).check_overflows(byte_len(0)),
            BoundsOverflowStatus::Overflowed
        );
        assert_eq!(
            byte_index(1).check_overflows(byte_len(0)),
            BoundsOverflowStatus::Overflowed
        );
    }

    #[test]
    fn test_check_content_position_basic() {
        let content_length = byte_len(5);

        // At start
        assert_eq!(
            byte_index(0).check_content_position(content_length),
            ContentPositionStatus::AtStart
        );

        // Within content
        assert_eq!(
            byte_index(2).check_content_position(content_length),
            ContentPositionStatus::Within
        );
        assert_eq!(
            byte_index(4).check_content_position(content_length),
            ContentPositionStatus::Within
        );

        // At end boundary
        assert_eq!(
            byte_index(5).check_content_position(content_length),
            ContentPositionStatus::AtEnd
        );

        // Beyond content
        assert_eq!(
            byte_index(6).check_content_position(content_length),
            ContentPositionStatus::Beyond
        );
        assert_eq!(
            byte_index(10).check_content_position(content_length),
            ContentPositionStatus::Beyond
        );
    }

    #[test]
    fn test_check_content_position_edge_cases() {
        // Zero-length content - AtStart takes precedence
        let zero_length = byte_len(0);
        assert_eq!(
            byte_index(0).check_content_position(zero_length),
            ContentPositionStatus::AtStart
        );
        assert_eq!(
            byte_index(1).check_content_position(zero_length),
            ContentPositionStatus::Beyond
        );

        // Single element content
        let single_length = byte_len(1);
        assert_eq!(
            byte_index(0).check_content_position(single_length),
            ContentPositionStatus::AtStart
        );
        assert_eq!(
            byte_index(1).check_content_position(single_length),
            ContentPositionStatus::AtEnd
        );
        assert_eq!(
            byte_index(2).check_content_position(single_length),
            ContentPositionStatus::Beyond
        );
    }

    #[test]
    fn test_position_status_comprehensive() {
        // Test all combinations for a length-3 content
        let content_length = byte_len(3);

        // AtStart: index == 0
        assert_eq!(
            byte_index(0).check_content_position(content_length),
            ContentPositionStatus::AtStart
        );

        // Within: 0 < index < length
        assert_eq!(
            byte_index(1).check_content_position(content_length),
            ContentPositionStatus::Within
        );
        assert_eq!(
            byte_index(2).check_content_position(content_length),
            ContentPositionStatus::Within
        );

        // AtEnd: index == length && index > 0
        assert_eq!(
            byte_index(3).check_content_position(content_length),
            ContentPositionStatus::AtEnd
        );

        // Beyond: index > length
        assert_eq!(
            byte_index(4).check_content_position(content_length),
            ContentPositionStatus::Beyond
        );
    }

    #[test]
    fn test_remaining_from() {
        assert_eq!(
            byte_len(10).remaining_from(byte_index(3)),
            byte_len(7),
            "Normal case: 7 bytes remain from index 3 to 9"
        );
        assert_eq!(
            byte_len(10).remaining_from(byte_index(9)),
            byte_len(1),
            "Edge case: only 1 byte remains at last position"
        );
        assert_eq!(
            byte_len(10).remaining_from(byte_index(10)),
            byte_len(0),
            "Boundary case: at boundary, nothing remains"
        );
        assert_eq!(
            byte_len(10).remaining_from(byte_index(15)),
            byte_len(0),
            "Overflow case: beyond boundary, nothing remains"
        );

        // Empty length edge cases.
        assert_eq!(
            byte_len(0).remaining_from(byte_index(0)),
            byte_len(0),
            "Empty collection: no bytes remain"
        );
        assert_eq!(
            byte_len(0).remaining_from(byte_index(5)),
            byte_len(0),
            "Empty collection with overflow: no bytes remain"
        );

        // Single element case.
        assert_eq!(
            byte_len(1).remaining_from(byte_index(0)),
            byte_len(1),
            "Single element: 1 byte remains from start"
        );
        assert_eq!(
            byte_len(1).remaining_from(byte_index(1)),
            byte_len(0),
            "Single element: at boundary"
        );

        // Start of content.
        assert_eq!(
            byte_len(10).remaining_from(byte_index(0)),
            byte_len(10),
            "From start: entire length remains"
        );
    }

    #[test]
    fn test_convert_to_length() {
        assert_eq!(
            byte_index(0).convert_to_length(),
            byte_len(1),
            "Index 0 converts to length 1"
        );
        assert_eq!(
            byte_index(5).convert_to_length(),
            byte_len(6),
            "Index 5 converts to length 6"
        );
        assert_eq!(
            byte_index(9).convert_to_length(),
            byte_len(10),
            "Index 9 converts to length 10"
        );

        // Round-trip conversion should be consistent.
        let original_index = byte_index(42);
        let converted_length = original_index.convert_to_length();
        let back_to_index = converted_length.convert_to_index();
        assert_eq!(back_to_index, original_index);
    }

    #[test]
    fn test_convert_to_index() {
        assert_eq!(
            byte_len(1).convert_to_index(),
            byte_index(0),
            "Length 1 converts to index 0"
        );
        assert_eq!(
            byte_len(6).convert_to_index(),
            byte_index(5),
            "Length 6 converts to index 5"
        );
        assert_eq!(
            byte_len(10).convert_to_index(),
            byte_index(9),
            "Length 10 converts to index 9"
        );

        // Zero length saturates at index 0.
        assert_eq!(byte_len(0).convert_to_index(), byte_index(0));

        // Round-trip conversion should be consistent.
        let original_length = byte_len(42);
        let converted_index = original_length.convert_to_index();
        let back_to_length = converted_index.convert_to_length();
        assert_eq!(back_to_length, original_length);
    }

    #[test]
    fn test_as_usize_and_is_zero() {
        for value in [0, 1, 5, 10, 42, 100, 999] {
            assert_eq!(
                UnitCompare::as_usize(&byte_index(value)),
                value,
                "Index {value} preserves value"
            );
            assert_eq!(
                UnitCompare::as_usize(&byte_len(value)),
                value,
                "Length {value} preserves value"
            );
        }

        assert!(byte_index(0).is_zero());
        assert!(!byte_index(1).is_zero());
        assert!(byte_len(0).is_zero());
        assert!(!byte_len(1).is_zero());
    }
}
