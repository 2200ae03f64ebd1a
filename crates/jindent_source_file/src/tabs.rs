//! Column arithmetic with tabs expanded to the configured tab width.
//!
//! A tab advances to the next multiple of the tab width; every other
//! character counts as one column.

/// Visual column of the byte at `byte_offset` within `line`.
pub fn expanded_column(line: &str, byte_offset: usize, tab_width: usize) -> usize {
    let mut column = 0;
    for (index, ch) in line.char_indices() {
        if index >= byte_offset {
            break;
        }
        column = advance(column, ch, tab_width);
    }
    column
}

/// Visual width of the leading whitespace of `line`, that is the column of
/// its first non-blank character.
pub fn indentation_width(line: &str, tab_width: usize) -> usize {
    line.chars()
        .take_while(|ch| ch.is_whitespace())
        .fold(0, |column, ch| advance(column, ch, tab_width))
}

/// True when the line contains only whitespace.
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

fn advance(column: usize, ch: char, tab_width: usize) -> usize {
    if ch == '\t' && tab_width > 0 {
        (column / tab_width + 1) * tab_width
    } else {
        column + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expanded_column_spaces() {
        assert_eq!(expanded_column("    int x;", 4, 4), 4);
        assert_eq!(expanded_column("    int x;", 8, 4), 8);
    }

    #[test]
    fn test_expanded_column_tabs() {
        // Tab at column 0 goes to column 4
        assert_eq!(expanded_column("\tint x;", 1, 4), 4);
        // Tab at column 2 rounds up to 4
        assert_eq!(expanded_column("ab\tx;", 3, 4), 4);
        // Tab at column 4 goes to 8
        assert_eq!(expanded_column("abcd\tx;", 5, 4), 8);
        assert_eq!(expanded_column("\t\tx", 2, 8), 16);
    }

    #[test]
    fn test_indentation_width() {
        assert_eq!(indentation_width("    int x = 1;", 4), 4);
        assert_eq!(indentation_width("\t\tint x = 1;", 4), 8);
        // 2 spaces, then the tab rounds up to the next tab stop
        assert_eq!(indentation_width("  \tint x = 1;", 4), 4);
        assert_eq!(indentation_width("  \tint x = 1;", 8), 8);
        assert_eq!(indentation_width("x", 4), 0);
    }

    #[test]
    fn test_blank_lines() {
        assert!(is_blank(""));
        assert!(is_blank("  \t "));
        assert!(!is_blank("  x"));
    }
}
