use super::SourceText;
use std::fmt;

/// A 1-based (line, column) buffer position, columns counted in characters.
///
/// Ordering is line-major, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Translate an editor cursor (1-based line, 0-based column) into a buffer position.
    pub const fn from_editor(line: usize, column: usize) -> Self {
        Self::new(line, column + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the position lexically before `pos`, or `None` at the start of the buffer.
pub fn previous_position(text: &SourceText, pos: Position) -> Option<Position> {
    if pos.column > 1 {
        return Some(Position::new(pos.line, pos.column - 1));
    }
    if pos.line <= 1 {
        return None;
    }
    let previous_len = text.line_len(pos.line - 1);
    Some(Position::new(pos.line - 1, previous_len.max(1)))
}

/// Returns the position lexically after `pos`, or `None` at the end of the buffer.
pub fn next_position(text: &SourceText, pos: Position) -> Option<Position> {
    if pos.column < text.line_len(pos.line) {
        return Some(Position::new(pos.line, pos.column + 1));
    }
    if pos.line >= text.line_count() {
        return None;
    }
    Some(Position::new(pos.line + 1, 1))
}

/// Convert a byte offset within a line to a 0-based character offset.
///
/// Offsets that fall inside a multi-byte character resolve to that character.
#[inline(always)]
pub fn convert_byte_to_char_in_line(line_text: &str, byte_pos: usize) -> usize {
    let mut char_offset = 0;
    let mut byte_count = 0;

    for ch in line_text.chars() {
        if byte_count >= byte_pos {
            return char_offset;
        }
        let ch_bytes = ch.len_utf8();
        if byte_count + ch_bytes > byte_pos {
            return char_offset;
        }
        byte_count += ch_bytes;
        char_offset += 1;
    }

    // Past the end of the line: keep counting so exclusive ends stay exclusive
    char_offset + byte_pos.saturating_sub(byte_count)
}
