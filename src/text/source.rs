use super::Position;

/// How the end column of a range is treated by [`SourceText::slice_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd {
    /// The character at the end column is part of the slice
    Inclusive,
    /// The slice stops just before the end column
    Exclusive,
}

/// Read-only view over the lines of a buffer.
///
/// Lines carry no trailing newline. `tab_stop` is the editor's visual tab
/// width and only affects [`SourceText::measure_indent`].
#[derive(Debug, Clone)]
pub struct SourceText {
    lines: Vec<String>,
    tab_stop: usize,
}

impl SourceText {
    pub fn new(lines: Vec<String>, tab_stop: usize) -> Self {
        Self { lines, tab_stop }
    }

    /// Split raw buffer text into lines (`\n` or `\r\n` terminated)
    pub fn from_text(text: &str, tab_stop: usize) -> Self {
        Self::new(text.lines().map(str::to_string).collect(), tab_stop)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of a 1-based line
    pub fn line(&self, line: usize) -> Option<&str> {
        line.checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .map(String::as_str)
    }

    /// Length of a 1-based line in characters (0 for lines outside the buffer)
    pub fn line_len(&self, line: usize) -> usize {
        self.line(line).map_or(0, |text| text.chars().count())
    }

    /// The buffer joined back into a single string for the parser
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }

    /// First column on `line` that is not leading whitespace.
    ///
    /// A blank line yields the column just past its end.
    pub fn first_content_column(&self, line: usize) -> usize {
        let leading = self
            .line(line)
            .map_or(0, |text| text.chars().take_while(|c| c.is_whitespace()).count());
        leading + 1
    }

    /// Buffer content between two positions.
    ///
    /// A single-line range applies both bounds to that line. A multi-line range
    /// trims only the first line's prefix and the last line's suffix. Returns
    /// `None` if `start` is after `end` or either line is outside the buffer.
    pub fn slice_range(
        &self,
        start: Position,
        end: Position,
        range_end: RangeEnd,
    ) -> Option<Vec<String>> {
        if start > end {
            return None;
        }
        let first = self.line(start.line)?;
        let last = self.line(end.line)?;

        let from = start.column.saturating_sub(1);
        let to = match range_end {
            RangeEnd::Inclusive => end.column,
            RangeEnd::Exclusive => end.column.saturating_sub(1),
        };

        if start.line == end.line {
            return Some(vec![char_slice(first, from, to)]);
        }

        let mut result = Vec::with_capacity(end.line - start.line + 1);
        result.push(char_slice(first, from, usize::MAX));
        for line in (start.line + 1)..end.line {
            result.push(self.line(line)?.to_string());
        }
        result.push(char_slice(last, 0, to));
        Some(result)
    }

    /// Visual indentation width of a declaration starting at (`line`, `column`).
    ///
    /// Tabs before the start column count as `tab_stop` columns each, every
    /// other character as one.
    pub fn measure_indent(&self, line: usize, column: usize) -> usize {
        let prefix_len = column.saturating_sub(1);
        let tab_count = self
            .line(line)
            .map_or(0, |text| text.chars().take(prefix_len).filter(|&c| c == '\t').count());
        (prefix_len - tab_count) + tab_count * self.tab_stop
    }
}

fn char_slice(text: &str, from: usize, to: usize) -> String {
    text.chars()
        .skip(from)
        .take(to.saturating_sub(from))
        .collect()
}
