// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BoundsCheck, ByteIndex, ByteLength, CommonResult, ContentPositionStatus,
            LengthMarker, StrView, StrViewError, byte_len};

impl<'a> StrView<'a> {
    /// Take a subview of up to `count` bytes starting at `pos`.
    ///
    /// The position must satisfy `pos <= len()`. A position equal to `len()`
    /// yields an empty subview. The count is silently clamped to the available
    /// remainder, so callers can ask for "up to N bytes" without computing the
    /// exact remaining length first.
    ///
    /// The subview borrows the same storage as `self` for the same lifetime. No
    /// bytes are copied.
    ///
    /// # Errors
    ///
    /// Returns [`StrViewError::PositionOutOfRange`] when `pos > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use r3bl_str_view::str_view;
    ///
    /// let view = str_view("Hello World");
    ///
    /// let word = view.substr(6, 5).unwrap();
    /// assert_eq!(word, "World");
    ///
    /// // Counts past the end are clamped to the available remainder.
    /// let clamped = view.substr(6, 100).unwrap();
    /// assert_eq!(clamped, "World");
    ///
    /// // Positions past the end are errors.
    /// assert!(view.substr(12, 1).is_err());
    /// ```
    pub fn substr(
        &self,
        arg_pos: impl Into<ByteIndex>,
        arg_count: impl Into<ByteLength>,
    ) -> CommonResult<StrView<'a>> {
        let pos = arg_pos.into();
        if matches!(
            pos.check_content_position(self.len()),
            ContentPositionStatus::Beyond
        ) {
            return StrViewError::new_position_error_result(pos, self.len());
        }

        let take = arg_count.into().min(self.len().remaining_from(pos));

        // SAFETY: pos <= len and take <= len - pos, so the subrange stays inside
        // the viewed bytes.
        Ok(unsafe {
            Self::from_raw_parts(self.as_ptr().add(pos.as_usize()), take.as_usize())
        })
    }

    /// Take the subview from `pos` to the end of the view.
    ///
    /// Equivalent to [`substr`](StrView::substr) with the count set to the full
    /// remaining length.
    ///
    /// # Errors
    ///
    /// Returns [`StrViewError::PositionOutOfRange`] when `pos > len()`.
    pub fn substr_from(&self, arg_pos: impl Into<ByteIndex>) -> CommonResult<StrView<'a>> {
        self.substr(arg_pos, self.len())
    }

    /// Take a subview of exactly `count` bytes starting at `pos`, without any
    /// bounds check.
    ///
    /// # Safety
    ///
    /// The caller must ensure `pos + count <= len()`.
    #[must_use]
    pub unsafe fn substr_unchecked(
        &self,
        arg_pos: impl Into<ByteIndex>,
        arg_count: impl Into<ByteLength>,
    ) -> StrView<'a> {
        let pos = arg_pos.into().as_usize();
        let count = arg_count.into().as_usize();
        // SAFETY: The caller guarantees pos + count <= len().
        unsafe { Self::from_raw_parts(self.as_ptr().add(pos), count) }
    }

    /// Copy viewed bytes starting at `pos` into the caller-supplied buffer.
    ///
    /// Copies `min(dest.len(), len() - pos)` bytes and returns the number of
    /// bytes actually copied. To copy fewer bytes than the buffer holds, pass a
    /// subslice such as `&mut buf[..count]`. No terminator byte is ever written,
    /// and no byte of `dest` past the copied count is touched.
    ///
    /// # Errors
    ///
    /// Returns [`StrViewError::PositionOutOfRange`] when `pos > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use r3bl_str_view::{byte_len, str_view};
    ///
    /// let view = str_view("Hello World");
    /// let mut buf = [0u8; 5];
    ///
    /// let copied = view.copy_to(&mut buf, 6).unwrap();
    /// assert_eq!(copied, byte_len(5));
    /// assert_eq!(&buf, b"World");
    /// ```
    pub fn copy_to(
        &self,
        dest: &mut [u8],
        arg_pos: impl Into<ByteIndex>,
    ) -> CommonResult<ByteLength> {
        let pos = arg_pos.into();
        if matches!(
            pos.check_content_position(self.len()),
            ContentPositionStatus::Beyond
        ) {
            return StrViewError::new_position_error_result(pos, self.len());
        }

        let count = byte_len(dest.len()).min(self.len().remaining_from(pos));
        let start = pos.as_usize();
        let end = start + count.as_usize();
        dest[..count.as_usize()].copy_from_slice(&self.as_bytes()[start..end]);

        Ok(count)
    }
}
