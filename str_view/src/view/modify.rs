// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ByteLength, StrView};

impl StrView<'_> {
    /// Drop the first `n` bytes from the view by advancing the data pointer and
    /// shrinking the length. Referenced storage is untouched.
    ///
    /// # Panics
    ///
    /// Panics when `n > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use r3bl_str_view::str_view;
    ///
    /// let mut view = str_view("Hello World");
    /// view.remove_prefix(6);
    /// assert_eq!(view, "World");
    /// ```
    pub fn remove_prefix(&mut self, arg_count: impl Into<ByteLength>) {
        let n = arg_count.into().as_usize();
        let len = self.len().as_usize();
        assert!(n <= len, "cannot remove {n} bytes from a view of length {len}");
        // SAFETY: n <= len, so the advanced pointer and reduced length still
        // describe a subrange of the original view.
        *self = unsafe { Self::from_raw_parts(self.as_ptr().add(n), len - n) };
    }

    /// Drop the last `n` bytes from the view by shrinking the length. The data
    /// pointer and referenced storage are untouched.
    ///
    /// # Panics
    ///
    /// Panics when `n > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use r3bl_str_view::str_view;
    ///
    /// let mut view = str_view("Hello World");
    /// view.remove_suffix(6);
    /// assert_eq!(view, "Hello");
    /// ```
    pub fn remove_suffix(&mut self, arg_count: impl Into<ByteLength>) {
        let n = arg_count.into().as_usize();
        let len = self.len().as_usize();
        assert!(n <= len, "cannot remove {n} bytes from a view of length {len}");
        // SAFETY: The pointer is unchanged and the reduced length stays within
        // the original range.
        *self = unsafe { Self::from_raw_parts(self.as_ptr(), len - n) };
    }

    /// Exchange the (pointer, length) pairs of two views in constant time. No
    /// effect on referenced storage.
    pub fn swap(&mut self, other: &mut Self) { std::mem::swap(self, other); }
}
