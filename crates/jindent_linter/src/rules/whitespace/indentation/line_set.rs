//! Leftmost column per line of a region of source.

use std::collections::BTreeMap;

/// Maps each line of a region to the leftmost column seen on it.
#[derive(Debug, Clone, Default)]
pub struct LineSet {
    lines: BTreeMap<usize, i32>,
}

impl LineSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `column` for `line`, keeping the smaller of the old and new value.
    pub fn add_line_and_col(&mut self, line: usize, column: i32) {
        self.lines
            .entry(line)
            .and_modify(|existing| *existing = (*existing).min(column))
            .or_insert(column);
    }

    pub fn start_column(&self, line: usize) -> Option<i32> {
        self.lines.get(&line).copied()
    }

    pub fn first_line(&self) -> Option<usize> {
        self.lines.keys().next().copied()
    }

    pub fn first_line_col(&self) -> Option<i32> {
        self.lines.values().next().copied()
    }

    pub fn last_line(&self) -> Option<usize> {
        self.lines.keys().next_back().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
