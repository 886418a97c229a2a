// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod access;
pub mod compare;
pub mod convert;
pub mod extract;
pub mod modify;
pub mod search;
pub mod str_view;

// Re-export.
pub use str_view::*;
