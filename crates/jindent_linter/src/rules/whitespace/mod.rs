//! Whitespace-related rules.

pub mod indentation;

pub use indentation::Indentation;
