// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ByteIndex, StrView, byte_index};

impl StrView<'_> {
    /// Find the position of the first occurrence of `needle` in the view.
    ///
    /// An empty needle matches at position 0. The needle can be anything that
    /// converts into a view, such as a string slice, a byte slice, or another
    /// view.
    ///
    /// # Examples
    ///
    /// ```
    /// use r3bl_str_view::{byte_index, str_view};
    ///
    /// let view = str_view("Hello World");
    /// assert_eq!(view.find("World"), Some(byte_index(6)));
    /// assert_eq!(view.find("xyz"), None);
    /// ```
    #[must_use]
    pub fn find<'a>(&self, arg_needle: impl Into<StrView<'a>>) -> Option<ByteIndex> {
        let needle = arg_needle.into();
        let haystack = self.as_bytes();
        let needle_bytes = needle.as_bytes();

        if needle_bytes.is_empty() {
            return Some(byte_index(0));
        }
        if needle_bytes.len() > haystack.len() {
            return None;
        }

        haystack
            .windows(needle_bytes.len())
            .position(|window| window == needle_bytes)
            .map(ByteIndex)
    }

    /// Find the position of the last occurrence of `needle` in the view.
    ///
    /// An empty needle matches at position `len()`.
    #[must_use]
    pub fn rfind<'a>(&self, arg_needle: impl Into<StrView<'a>>) -> Option<ByteIndex> {
        let needle = arg_needle.into();
        let haystack = self.as_bytes();
        let needle_bytes = needle.as_bytes();

        if needle_bytes.is_empty() {
            return Some(byte_index(haystack.len()));
        }
        if needle_bytes.len() > haystack.len() {
            return None;
        }

        haystack
            .windows(needle_bytes.len())
            .rposition(|window| window == needle_bytes)
            .map(ByteIndex)
    }

    /// Check whether `needle` occurs anywhere in the view.
    #[must_use]
    pub fn contains<'a>(&self, arg_needle: impl Into<StrView<'a>>) -> bool {
        self.find(arg_needle).is_some()
    }

    /// Check whether the view begins with `prefix`. An empty prefix always
    /// matches.
    #[must_use]
    pub fn starts_with<'a>(&self, arg_prefix: impl Into<StrView<'a>>) -> bool {
        self.as_bytes().starts_with(arg_prefix.into().as_bytes())
    }

    /// Check whether the view ends with `suffix`. An empty suffix always
    /// matches.
    #[must_use]
    pub fn ends_with<'a>(&self, arg_suffix: impl Into<StrView<'a>>) -> bool {
        self.as_bytes().ends_with(arg_suffix.into().as_bytes())
    }
}
