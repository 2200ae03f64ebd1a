//! Lint rules organized by category.

pub mod whitespace;

pub use whitespace::*;
