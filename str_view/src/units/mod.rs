// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod bounds_check;
pub mod byte_index;
pub mod byte_length;

// Re-export.
pub use bounds_check::*;
pub use byte_index::*;
pub use byte_length::*;
