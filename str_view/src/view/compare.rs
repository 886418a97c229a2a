// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{InlineString, StrView};

impl StrView<'_> {
    /// Lexicographic three-way comparison against anything that converts into a
    /// view.
    ///
    /// Bytes are compared as unsigned values over the common prefix length. When
    /// the common prefix is equal, the shorter view compares less than the
    /// longer one. All comparison operators on the view derive from this
    /// ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use r3bl_str_view::str_view;
    ///
    /// let view = str_view("Hello World");
    /// assert_eq!(view.compare("Hello World"), Ordering::Equal);
    /// assert_eq!(view.compare("Hello"), Ordering::Greater);
    /// assert_eq!(str_view("Hello").compare(view), Ordering::Less);
    /// ```
    #[must_use]
    pub fn compare<'a>(&self, arg_other: impl Into<StrView<'a>>) -> Ordering {
        self.as_bytes().cmp(arg_other.into().as_bytes())
    }
}

impl PartialEq for StrView<'_> {
    /// Two views are equal iff they have the same length and the same bytes.
    /// The data pointers do not have to match.
    fn eq(&self, other: &Self) -> bool { self.as_bytes() == other.as_bytes() }
}

impl Eq for StrView<'_> {}

impl PartialOrd for StrView<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for StrView<'_> {
    fn cmp(&self, other: &Self) -> Ordering { self.compare(*other) }
}

/// Generates the symmetric comparison operators between [`StrView`] and another
/// byte-sourced type, in both operand orders.
///
/// Every generated operator funnels through byte-slice comparison, which keeps
/// the whole operand matrix consistent with [`StrView::compare`].
macro_rules! create_view_comparison_operators {
    ($other:ty) => {
        impl PartialEq<$other> for StrView<'_> {
            fn eq(&self, other: &$other) -> bool {
                self.as_bytes() == AsRef::<[u8]>::as_ref(other)
            }
        }

        impl PartialEq<StrView<'_>> for $other {
            fn eq(&self, other: &StrView<'_>) -> bool {
                AsRef::<[u8]>::as_ref(self) == other.as_bytes()
            }
        }

        impl PartialOrd<$other> for StrView<'_> {
            fn partial_cmp(&self, other: &$other) -> Option<Ordering> {
                Some(self.as_bytes().cmp(AsRef::<[u8]>::as_ref(other)))
            }
        }

        impl PartialOrd<StrView<'_>> for $other {
            fn partial_cmp(&self, other: &StrView<'_>) -> Option<Ordering> {
                Some(AsRef::<[u8]>::as_ref(self).cmp(other.as_bytes()))
            }
        }
    };
}

create_view_comparison_operators!(str);
create_view_comparison_operators!(&str);
create_view_comparison_operators!(String);
create_view_comparison_operators!([u8]);
create_view_comparison_operators!(&[u8]);
create_view_comparison_operators!(Vec<u8>);

impl PartialEq<InlineString> for StrView<'_> {
    fn eq(&self, other: &InlineString) -> bool {
        self.as_bytes() == other.as_str().as_bytes()
    }
}

impl PartialEq<StrView<'_>> for InlineString {
    fn eq(&self, other: &StrView<'_>) -> bool {
        self.as_str().as_bytes() == other.as_bytes()
    }
}

impl PartialOrd<InlineString> for StrView<'_> {
    fn partial_cmp(&self, other: &InlineString) -> Option<Ordering> {
        Some(self.as_bytes().cmp(other.as_str().as_bytes()))
    }
}

impl PartialOrd<StrView<'_>> for InlineString {
    fn partial_cmp(&self, other: &StrView<'_>) -> Option<Ordering> {
        Some(self.as_str().as_bytes().cmp(other.as_bytes()))
    }
}
