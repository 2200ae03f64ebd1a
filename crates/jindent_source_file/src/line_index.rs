use memchr::memchr_iter;

/// Byte offsets of every line start in a source file.
///
/// Lines are numbered from 1, matching the line numbers carried by the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    /// Builds the index by scanning for `\n`; `\r\n` endings are handled by
    /// trimming the `\r` when a line's text is requested.
    pub fn from_source_text(text: &str) -> Self {
        let mut line_starts = Vec::with_capacity(text.len() / 32 + 1);
        line_starts.push(0);
        line_starts.extend(memchr_iter(b'\n', text.as_bytes()).map(|pos| pos + 1));
        Self {
            line_starts,
            len: text.len(),
        }
    }

    /// Number of physical lines, counting a trailing empty line after a final newline.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where the 1-based `line` starts.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        line.checked_sub(1)
            .and_then(|index| self.line_starts.get(index).copied())
    }

    /// Byte range of the 1-based `line`, excluding its terminator.
    fn line_range(&self, line: usize, text: &str) -> Option<(usize, usize)> {
        let start = self.line_start(line)?;
        let end = self
            .line_starts
            .get(line)
            .map_or(self.len, |next| next.saturating_sub(1));
        let bytes = text.as_bytes();
        let end = if end > start && bytes.get(end - 1) == Some(&b'\r') {
            end - 1
        } else {
            end
        };
        Some((start, end.max(start)))
    }
}

/// Pairs source text with its [`LineIndex`].
#[derive(Debug, Clone, Copy)]
pub struct SourceCode<'src, 'index> {
    text: &'src str,
    index: &'index LineIndex,
}

impl<'src, 'index> SourceCode<'src, 'index> {
    pub fn new(text: &'src str, index: &'index LineIndex) -> Self {
        Self { text, index }
    }

    pub fn text(&self) -> &'src str {
        self.text
    }

    pub fn line_index(&self) -> &'index LineIndex {
        self.index
    }

    /// Text of the 1-based `line` without its line terminator.
    pub fn line_text(&self, line: usize) -> Option<&'src str> {
        let (start, end) = self.index.line_range(line, self.text)?;
        self.text.get(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_starts() {
        let text = "class Foo {\n    int x;\n}";
        let index = LineIndex::from_source_text(text);
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_start(1), Some(0));
        assert_eq!(index.line_start(2), Some(12));
        assert_eq!(index.line_start(3), Some(23));
        assert_eq!(index.line_start(0), None);
        assert_eq!(index.line_start(4), None);
    }

    #[test]
    fn test_line_text_lf() {
        let text = "class Foo {\n    int x;\n}";
        let index = LineIndex::from_source_text(text);
        let source = SourceCode::new(text, &index);
        assert_eq!(source.line_text(1), Some("class Foo {"));
        assert_eq!(source.line_text(2), Some("    int x;"));
        assert_eq!(source.line_text(3), Some("}"));
        assert_eq!(source.line_text(4), None);
    }

    #[test]
    fn test_line_text_crlf() {
        let text = "class Foo {\r\n    int x;\r\n}\r\n";
        let index = LineIndex::from_source_text(text);
        let source = SourceCode::new(text, &index);
        assert_eq!(source.line_text(1), Some("class Foo {"));
        assert_eq!(source.line_text(2), Some("    int x;"));
        assert_eq!(source.line_text(3), Some("}"));
        assert_eq!(source.line_text(4), Some(""));
    }

    #[test]
    fn test_many_lines_crlf() {
        let mut text = String::new();
        for i in 0..130 {
            text.push_str(&format!("line{i}\r\n"));
        }
        text.push_str("    final_line");
        let index = LineIndex::from_source_text(&text);
        let source = SourceCode::new(&text, &index);
        assert_eq!(source.line_text(131), Some("    final_line"));
        assert_eq!(source.line_text(130), Some("line129"));
    }
}
