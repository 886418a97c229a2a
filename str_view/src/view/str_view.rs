// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt,
          hash::{Hash, Hasher},
          marker::PhantomData,
          ptr,
          slice};

use crate::{ByteLength, InlineString};

/// A non-owning, read-only view over a contiguous sequence of bytes.
///
/// A `StrView` is two machine words wide: a pointer to the first byte and a length.
/// Copying a view copies the (pointer, length) pair only, never the bytes it refers
/// to. This makes it extremely cheap to pass around, store, and slice. The view
/// never allocates and never owns its referenced storage.
///
/// Unlike [`&str`], a `StrView` makes no UTF-8 guarantee. It sees bytes. Use
/// [`try_as_str`](StrView::try_as_str) to reinterpret the content as UTF-8 when
/// needed.
///
/// # Ownership and lifetime
///
/// The view is a borrowed reference. The lifetime parameter `'a` ties each view to
/// the storage it was created from, so the borrow checker prevents the common
/// dangling cases. Views created through the unsafe raw-pointer constructors carry
/// whatever lifetime the caller claims, and the caller is responsible for making
/// that claim true.
///
/// The modifier operations ([`remove_prefix`](StrView::remove_prefix),
/// [`remove_suffix`](StrView::remove_suffix), [`swap`](StrView::swap)) only adjust
/// the (pointer, length) pair of the view itself. They never touch referenced
/// storage.
///
/// # The default view
///
/// A default-constructed (or [`empty`](StrView::empty)) view holds a null pointer
/// and a zero length. Every read operation treats it as "no content". A view with
/// length 0 and a non-null pointer is also valid and also denotes "empty".
///
/// # Examples
///
/// ```
/// use r3bl_str_view::{byte_len, str_view};
///
/// let backing = String::from("Hello World");
/// let view = str_view(&backing);
///
/// assert_eq!(view.len(), byte_len(11));
/// assert_eq!(view, "Hello World");
/// assert_eq!(view.as_ptr(), backing.as_ptr());
/// ```
#[derive(Copy, Clone)]
pub struct StrView<'a> {
    ptr: *const u8,
    len: usize,
    _marker: PhantomData<&'a [u8]>,
}

// SAFETY: A view is a pointer to immutable bytes plus a length. If the underlying
// data is Send + Sync (which &[u8] is), so is the view.
unsafe impl Send for StrView<'_> {}
unsafe impl Sync for StrView<'_> {}

/// Creates a new [`StrView`] from any type that can be converted into it.
///
/// This is a convenience function that is equivalent to calling [`StrView::from`].
///
/// # Examples
///
/// ```
/// use r3bl_str_view::{StrView, str_view};
///
/// let view = str_view("Hello World");
/// assert_eq!(view, StrView::new("Hello World"));
/// ```
pub fn str_view<'a>(arg_view: impl Into<StrView<'a>>) -> StrView<'a> {
    arg_view.into()
}

impl<'a> StrView<'a> {
    /// Create a view over the bytes of a string slice.
    #[must_use]
    pub const fn new(s: &'a str) -> Self {
        Self {
            ptr: s.as_ptr(),
            len: s.len(),
            _marker: PhantomData,
        }
    }

    /// Create a view over a byte slice.
    #[must_use]
    pub const fn from_bytes(bytes: &'a [u8]) -> Self {
        Self {
            ptr: bytes.as_ptr(),
            len: bytes.len(),
            _marker: PhantomData,
        }
    }

    /// Create an empty view holding a null pointer and a zero length.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            ptr: ptr::null(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Create a view from a raw pointer and an explicit length, stored verbatim.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    /// - `ptr` is non-null and points to at least `len` readable bytes, or `len`
    ///   is 0
    /// - The bytes remain valid and unmodified for the lifetime `'a`
    #[must_use]
    pub const unsafe fn from_raw_parts(ptr: *const u8, len: usize) -> Self {
        Self {
            ptr,
            len,
            _marker: PhantomData,
        }
    }

    /// Create a view over a NUL-terminated byte sequence, such as a C string.
    ///
    /// The length is computed by scanning forward to the first zero byte. The
    /// terminator itself is not part of the view. The given pointer is stored as
    /// the view's data pointer even when the sequence is empty.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    /// - `ptr` is non-null and points to a sequence of bytes ending in a zero byte
    /// - The bytes remain valid and unmodified for the lifetime `'a`
    ///
    /// # Examples
    ///
    /// ```
    /// use r3bl_str_view::{StrView, byte_len};
    ///
    /// let c_string = b"Hello World\0";
    /// let view = unsafe { StrView::from_nul_terminated(c_string.as_ptr()) };
    ///
    /// assert_eq!(view.len(), byte_len(11));
    /// assert_eq!(view, "Hello World");
    /// ```
    #[must_use]
    pub unsafe fn from_nul_terminated(ptr: *const u8) -> Self {
        let mut len = 0;
        // SAFETY: The caller guarantees a readable, NUL-terminated sequence.
        unsafe {
            while *ptr.add(len) != 0 {
                len += 1;
            }
        }
        Self {
            ptr,
            len,
            _marker: PhantomData,
        }
    }

    /// Get the number of bytes the view refers to.
    #[must_use]
    pub const fn len(&self) -> ByteLength { ByteLength(self.len) }

    /// Check whether the view refers to zero bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Get the raw starting address of the viewed bytes. Null for a default or
    /// [`empty`](StrView::empty) constructed view.
    ///
    /// The returned pointer is suitable for interop with code expecting a raw
    /// byte address. Note that the view makes no guarantee that a NUL terminator
    /// follows the viewed range. Only when the view was built with
    /// [`from_nul_terminated`](StrView::from_nul_terminated), and no prefix has
    /// been removed since, does a terminator sit at offset `len()`.
    #[must_use]
    pub const fn as_ptr(&self) -> *const u8 { self.ptr }

    /// Get the viewed bytes as a slice borrowed for `'a`.
    ///
    /// A view holding a null pointer yields an empty slice.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        if self.ptr.is_null() {
            &[]
        } else {
            // SAFETY: Construction guarantees (ptr, len) describe a readable
            // range that outlives 'a.
            unsafe { slice::from_raw_parts(self.ptr, self.len) }
        }
    }
}

impl Default for StrView<'_> {
    /// Equivalent to [`StrView::empty`].
    fn default() -> Self { Self::empty() }
}

impl<'a> From<&'a str> for StrView<'a> {
    fn from(it: &'a str) -> Self { Self::new(it) }
}

impl<'a> From<&'a String> for StrView<'a> {
    fn from(it: &'a String) -> Self { Self::new(it.as_str()) }
}

impl<'a> From<&'a [u8]> for StrView<'a> {
    fn from(it: &'a [u8]) -> Self { Self::from_bytes(it) }
}

impl<'a, const N: usize> From<&'a [u8; N]> for StrView<'a> {
    fn from(it: &'a [u8; N]) -> Self { Self::from_bytes(it) }
}

impl<'a> From<&'a Vec<u8>> for StrView<'a> {
    fn from(it: &'a Vec<u8>) -> Self { Self::from_bytes(it.as_slice()) }
}

impl<'a> From<&'a InlineString> for StrView<'a> {
    fn from(it: &'a InlineString) -> Self { Self::new(it.as_str()) }
}

impl fmt::Debug for StrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StrView({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Display for StrView<'_> {
    /// Renders the viewed bytes lossily. Byte sequences that are not valid UTF-8
    /// show up as the replacement character.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl Hash for StrView<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.as_bytes().hash(state); }
}
