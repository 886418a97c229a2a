// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Index;

use crate::{BoundsCheck, BoundsOverflowStatus, ByteIndex, CommonResult, StrView,
            StrViewError};

impl StrView<'_> {
    /// Get the byte at the given 0-based position, verifying the position first.
    ///
    /// This is the checked counterpart of subscript access via [`Index`] and of
    /// [`get_unchecked`](StrView::get_unchecked).
    ///
    /// # Errors
    ///
    /// Returns [`StrViewError::IndexOutOfBounds`] when `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use r3bl_str_view::str_view;
    ///
    /// let view = str_view("Hello World");
    /// assert_eq!(view.at(0).unwrap(), b'H');
    /// assert_eq!(view.at(10).unwrap(), b'd');
    /// assert!(view.at(11).is_err());
    /// ```
    pub fn at(&self, arg_index: impl Into<ByteIndex>) -> CommonResult<u8> {
        let index = arg_index.into();
        match index.check_overflows(self.len()) {
            BoundsOverflowStatus::Within => Ok(self.as_bytes()[index.as_usize()]),
            BoundsOverflowStatus::Overflowed => {
                StrViewError::new_index_error_result(index, self.len())
            }
        }
    }

    /// Get the first byte, or `None` when the view is empty.
    #[must_use]
    pub fn front(&self) -> Option<u8> { self.as_bytes().first().copied() }

    /// Get the last byte, or `None` when the view is empty.
    #[must_use]
    pub fn back(&self) -> Option<u8> { self.as_bytes().last().copied() }

    /// Get the byte at the given 0-based position without any bounds check.
    ///
    /// # Safety
    ///
    /// The caller must ensure `index < len()`.
    #[must_use]
    pub unsafe fn get_unchecked(&self, arg_index: impl Into<ByteIndex>) -> u8 {
        let index = arg_index.into();
        // SAFETY: The caller guarantees index < len().
        unsafe { *self.as_bytes().get_unchecked(index.as_usize()) }
    }

    /// Get the first byte without checking for emptiness.
    ///
    /// # Safety
    ///
    /// The caller must ensure the view is not empty.
    #[must_use]
    pub unsafe fn front_unchecked(&self) -> u8 {
        // SAFETY: The caller guarantees the view is not empty.
        unsafe { *self.as_bytes().get_unchecked(0) }
    }

    /// Get the last byte without checking for emptiness.
    ///
    /// # Safety
    ///
    /// The caller must ensure the view is not empty.
    #[must_use]
    pub unsafe fn back_unchecked(&self) -> u8 {
        // SAFETY: The caller guarantees the view is not empty.
        unsafe { *self.as_bytes().get_unchecked(self.len().as_usize() - 1) }
    }
}

/// Subscript access to a single byte. Panics when the position is out of bounds,
/// matching slice indexing. Use [`StrView::at`] for the checked variant.
impl Index<usize> for StrView<'_> {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output { &self.as_bytes()[index] }
}

/// Subscript access via the typed unit, with the same panicking behavior as the
/// `usize` subscript.
impl Index<ByteIndex> for StrView<'_> {
    type Output = u8;

    fn index(&self, index: ByteIndex) -> &Self::Output {
        &self.as_bytes()[index.as_usize()]
    }
}
