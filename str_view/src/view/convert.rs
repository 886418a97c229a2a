// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, InlineString, InlineVec, StrView, StrViewError};

impl<'a> StrView<'a> {
    /// Copy the viewed bytes into freshly allocated owned storage.
    ///
    /// The returned vector is independent of the view. Its storage address
    /// always differs from [`as_ptr`](StrView::as_ptr).
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> { self.as_bytes().to_vec() }

    /// Copy the viewed bytes into inline storage, spilling to the heap only for
    /// content larger than the inline capacity.
    #[must_use]
    pub fn to_inline_vec(&self) -> InlineVec<u8> {
        InlineVec::from_slice(self.as_bytes())
    }

    /// Reinterpret the viewed bytes as UTF-8, borrowing from the same storage.
    ///
    /// This does not copy. The returned slice shares the view's data pointer and
    /// lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`StrViewError::InvalidUtf8`] when the bytes are not valid UTF-8.
    pub fn try_as_str(&self) -> CommonResult<&'a str> {
        std::str::from_utf8(self.as_bytes())
            .map_err(|err| miette::Report::new(StrViewError::from(err)))
    }

    /// Copy the viewed bytes into an owning [`InlineString`].
    ///
    /// # Errors
    ///
    /// Returns [`StrViewError::InvalidUtf8`] when the bytes are not valid UTF-8.
    pub fn try_to_inline_string(&self) -> CommonResult<InlineString> {
        Ok(InlineString::from(self.try_as_str()?))
    }

    /// Iterate over the viewed bytes by value.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'a, u8>> {
        self.as_bytes().iter().copied()
    }
}

impl AsRef<[u8]> for StrView<'_> {
    fn as_ref(&self) -> &[u8] { self.as_bytes() }
}

impl From<StrView<'_>> for Vec<u8> {
    /// Copies the viewed bytes into owned storage.
    fn from(it: StrView<'_>) -> Self { it.to_vec() }
}

impl TryFrom<StrView<'_>> for String {
    type Error = miette::Report;

    /// Copies the viewed bytes into an owning string. Fails when the bytes are
    /// not valid UTF-8.
    fn try_from(it: StrView<'_>) -> Result<Self, Self::Error> {
        Ok(it.try_as_str()?.to_owned())
    }
}

impl TryFrom<StrView<'_>> for InlineString {
    type Error = miette::Report;

    /// Copies the viewed bytes into an owning inline string. Fails when the
    /// bytes are not valid UTF-8.
    fn try_from(it: StrView<'_>) -> Result<Self, Self::Error> {
        it.try_to_inline_string()
    }
}

impl<'a> IntoIterator for StrView<'a> {
    type Item = u8;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter { self.as_bytes().iter().copied() }
}

impl<'a> IntoIterator for &StrView<'a> {
    type Item = u8;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter { self.as_bytes().iter().copied() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, str_view};

    #[test]
    fn test_to_vec_copies_to_new_location() {
        let view = str_view("Hello World");
        let owned = view.to_vec();

        assert_eq2!(owned.as_slice(), view.as_bytes());
        assert_ne!(owned.as_ptr(), view.as_ptr());
    }

    #[test]
    fn test_to_vec_of_empty_view() {
        let owned = StrView::empty().to_vec();
        assert!(owned.is_empty());
    }

    #[test]
    fn test_to_inline_vec() {
        let view = str_view("Hi");
        let small = view.to_inline_vec();
        assert_eq2!(small.as_slice(), b"Hi");
        assert!(!small.spilled());

        let long_view = str_view("Hello World");
        let spilled = long_view.to_inline_vec();
        assert_eq2!(spilled.as_slice(), b"Hello World");
        assert!(spilled.spilled());
    }

    #[test]
    fn test_try_as_str_borrows_same_storage() {
        let view = str_view("Hello World");
        let as_str = view.try_as_str().unwrap();

        assert_eq2!(as_str, "Hello World");

        // No copy is made, the borrow shares the view's data pointer.
        assert_eq2!(as_str.as_ptr(), view.as_ptr());
    }

    #[test]
    fn test_try_as_str_fails_on_invalid_utf8() {
        let bytes = [0xFF, 0xFE];
        let view = StrView::from_bytes(&bytes);
        let report = view.try_as_str().unwrap_err();

        let error = report.downcast_ref::<StrViewError>().unwrap();
        assert!(matches!(error, StrViewError::InvalidUtf8(_)));
    }

    #[test]
    fn test_try_to_inline_string_copies_to_new_location() {
        let view = str_view("Hello World");
        let owned = view.try_to_inline_string().unwrap();

        assert_eq2!(owned.as_str(), "Hello World");
        assert_ne!(owned.as_str().as_ptr(), view.as_ptr());
    }

    #[test]
    fn test_try_to_inline_string_fails_on_invalid_utf8() {
        let bytes = [0xC0, 0x00];
        let view = StrView::from_bytes(&bytes);
        assert!(view.try_to_inline_string().is_err());
    }

    #[test]
    fn test_try_from_for_string_copies_to_new_location() {
        let view = str_view("Hello World");
        let owned = String::try_from(view).unwrap();

        assert_eq2!(owned, "Hello World");
        assert_ne!(owned.as_ptr(), view.as_ptr());
    }

    #[test]
    fn test_try_from_for_string_fails_on_invalid_utf8() {
        let bytes = [0xFF];
        let view = StrView::from_bytes(&bytes);
        assert!(String::try_from(view).is_err());
    }

    #[test]
    fn test_try_from_for_inline_string() {
        let view = str_view("Hello");
        let owned = InlineString::try_from(view).unwrap();
        assert_eq2!(owned.as_str(), "Hello");
    }

    #[test]
    fn test_from_view_for_vec() {
        let view = str_view("Hello World");
        let owned = Vec::from(view);
        assert_eq2!(owned.as_slice(), b"Hello World");
    }

    #[test]
    fn test_as_ref_bytes() {
        let view = str_view("Hello");
        let as_ref: &[u8] = view.as_ref();
        assert_eq2!(as_ref, b"Hello");
    }

    #[test]
    fn test_iter_yields_bytes_by_value() {
        let view = str_view("abc");
        let collected: Vec<u8> = view.iter().collect();
        assert_eq2!(collected, vec![b'a', b'b', b'c']);
    }

    #[test]
    fn test_iter_on_empty_view() {
        let view = StrView::empty();
        assert_eq2!(view.iter().count(), 0);
    }

    #[test]
    fn test_into_iterator_in_for_loop() {
        let view = str_view("abc");
        let mut sum = 0usize;
        for byte in view {
            sum += usize::from(byte);
        }
        assert_eq2!(sum, usize::from(b'a') + usize::from(b'b') + usize::from(b'c'));
    }
}
