//! Line lookup and tab-aware column arithmetic over Java source text.

mod line_index;
mod tabs;

pub use line_index::{LineIndex, SourceCode};
pub use tabs::{expanded_column, indentation_width, is_blank};
