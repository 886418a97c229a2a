// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Result alias and error type shared by every fallible operation in this
//! crate.
//!
//! There is exactly one recoverable failure family here: a caller-supplied
//! index or position that does not fit the view it is applied to, plus the
//! UTF-8 validation failures surfaced by the checked string conversions.
//! Everything else in the crate is either infallible or `unsafe` with a
//! documented precondition.

use crate::{ByteIndex, ByteLength};

/// Type alias to make it easy to work with [`miette::Result`] across the
/// crate. All checked operations on a view return this.
pub type CommonResult<T> = miette::Result<T>;

/// Error raised by the checked operation family on a view.
///
/// The two out-of-range variants mirror the two bounds-checking paradigms in
/// [`crate::BoundsCheck`]:
/// - [`StrViewError::IndexOutOfBounds`] for element access, where the last
///   valid index is `len - 1`.
/// - [`StrViewError::PositionOutOfRange`] for position arguments, where
///   `pos == len` is still valid (it denotes the empty tail) and only
///   `pos > len` is an error.
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, Copy, PartialEq, Eq)]
pub enum StrViewError {
    #[error("index {index} is out of bounds for a view of length {len}")]
    #[diagnostic(code(r3bl_str_view::index_out_of_bounds))]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("position {pos} is past the end of a view of length {len}")]
    #[diagnostic(code(r3bl_str_view::position_out_of_range))]
    PositionOutOfRange { pos: usize, len: usize },

    #[error("view content is not valid UTF-8: {0}")]
    #[diagnostic(code(r3bl_str_view::invalid_utf8))]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

impl StrViewError {
    /// Build an `Err` variant of [`CommonResult`] for an element access past
    /// the last valid index.
    ///
    /// # Errors
    ///
    /// Always returns an `Err` containing
    /// [`StrViewError::IndexOutOfBounds`].
    pub fn new_index_error_result<T>(
        arg_index: impl Into<ByteIndex>,
        arg_len: impl Into<ByteLength>,
    ) -> CommonResult<T> {
        let index = arg_index.into();
        let len = arg_len.into();
        Err(miette::Report::new(Self::IndexOutOfBounds {
            index: index.as_usize(),
            len: len.as_usize(),
        }))
    }

    /// Build an `Err` variant of [`CommonResult`] for a position argument
    /// past the end of the view.
    ///
    /// # Errors
    ///
    /// Always returns an `Err` containing
    /// [`StrViewError::PositionOutOfRange`].
    pub fn new_position_error_result<T>(
        arg_pos: impl Into<ByteIndex>,
        arg_len: impl Into<ByteLength>,
    ) -> CommonResult<T> {
        let pos = arg_pos.into();
        let len = arg_len.into();
        Err(miette::Report::new(Self::PositionOutOfRange {
            pos: pos.as_usize(),
            len: len.as_usize(),
        }))
    }
}
