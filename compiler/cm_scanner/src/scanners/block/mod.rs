//! Line-level block scanners.
//!
//! Each scanner starts at the first non-indentation byte of a line (the
//! caller strips indentation) and reports how many bytes the construct
//! occupies, or `0`.

use crate::char_class::is_space_or_tab;
use crate::limits::{MAX_ATX_LEVEL, MIN_FENCE_LEN, MIN_THEMATIC_BREAK_MARKERS};
use crate::Cursor;

/// Matches the opening of an ATX heading: 1-6 `#` followed by a space, tab,
/// line ending, or end of input.
///
/// The match covers the `#` run plus exactly one following whitespace byte
/// when present. Seven or more `#` never match.
pub fn atx_heading_start(input: &[u8]) -> usize {
    let mut cursor = Cursor::new(input);
    let level = cursor.eat_while_max(MAX_ATX_LEVEL + 1, |b| b == b'#');
    if level == 0 || level > MAX_ATX_LEVEL {
        return 0;
    }
    if cursor.is_eof() {
        return cursor.pos();
    }
    match cursor.current() {
        b' ' | b'\t' | b'\n' | b'\r' => cursor.pos() + 1,
        _ => 0,
    }
}

/// Heading level of a span matched by [`atx_heading_start`].
pub fn atx_level(span: &[u8]) -> Option<u8> {
    let level = span.iter().take_while(|&&b| b == b'#').count();
    if level == 0 || level > MAX_ATX_LEVEL {
        return None;
    }
    u8::try_from(level).ok()
}

/// Matches a setext underline: a run of `=` or a run of `-` (never mixed),
/// optional trailing spaces/tabs, then a line ending or end of input.
///
/// The match covers the whole line including its terminator.
pub fn setext_heading_line(input: &[u8]) -> usize {
    let mut cursor = Cursor::new(input);
    let marker = cursor.current();
    if marker != b'=' && marker != b'-' {
        return 0;
    }
    cursor.eat_while(|b| b == marker);
    cursor.eat_whitespace();
    end_of_line(cursor)
}

/// Heading level of a span matched by [`setext_heading_line`]: `=` is
/// level 1, `-` is level 2.
pub fn setext_level(span: &[u8]) -> Option<u8> {
    match span.first() {
        Some(b'=') => Some(1),
        Some(b'-') => Some(2),
        _ => None,
    }
}

/// Matches a thematic break: three or more of the same `*`, `-` or `_`,
/// optionally separated by spaces/tabs, with nothing else on the line.
///
/// The match covers the whole line including its terminator.
pub fn thematic_break(input: &[u8]) -> usize {
    let mut cursor = Cursor::new(input);
    let marker = cursor.current();
    if !matches!(marker, b'*' | b'-' | b'_') {
        return 0;
    }
    let mut count = 0;
    loop {
        count += cursor.eat_while(|b| b == marker);
        if cursor.eat_whitespace() == 0 {
            break;
        }
    }
    if count < MIN_THEMATIC_BREAK_MARKERS {
        return 0;
    }
    end_of_line(cursor)
}

/// Fence delimiter character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FenceMarker {
    /// `` ` ``
    Backtick,
    /// `~`
    Tilde,
}

impl FenceMarker {
    /// Marker for a fence byte, if `b` is one.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'`' => Some(FenceMarker::Backtick),
            b'~' => Some(FenceMarker::Tilde),
            _ => None,
        }
    }

    /// The delimiter byte.
    pub fn byte(self) -> u8 {
        match self {
            FenceMarker::Backtick => b'`',
            FenceMarker::Tilde => b'~',
        }
    }
}

/// The opening fence a closing fence must match.
///
/// Recovered from an [`open_code_fence`] match with [`Fence::from_open`]
/// and passed explicitly to [`close_code_fence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fence {
    /// Delimiter character.
    pub marker: FenceMarker,
    /// Length of the opening run; a closing run must be at least this long.
    pub len: usize,
}

impl Fence {
    /// Re-derive the fence from the bytes of an opening fence match.
    ///
    /// Returns `None` if `span` does not start with a valid fence run.
    pub fn from_open(span: &[u8]) -> Option<Fence> {
        let marker = FenceMarker::from_byte(*span.first()?)?;
        let len = span.iter().take_while(|&&b| b == marker.byte()).count();
        (len >= MIN_FENCE_LEN).then_some(Fence { marker, len })
    }

    /// Info string of an opening fence match, with surrounding whitespace
    /// and the line terminator removed.
    pub fn info_string(self, span: &[u8]) -> &[u8] {
        let after_run = span.get(self.len..).unwrap_or_default();
        let mut end = after_run.len();
        while end > 0 && matches!(after_run[end - 1], b'\n' | b'\r' | b' ' | b'\t') {
            end -= 1;
        }
        let body = &after_run[..end];
        let start = body.iter().take_while(|&&b| is_space_or_tab(b)).count();
        &body[start..]
    }
}

/// Matches an opening code fence: three or more backticks or tildes (not
/// mixed), an optional info string, then a line ending or end of input.
///
/// A backtick fence's info string may not contain a backtick. The match
/// covers the whole line including its terminator; use [`Fence::from_open`]
/// to recover the marker and run length.
pub fn open_code_fence(input: &[u8]) -> usize {
    let mut cursor = Cursor::new(input);
    let Some(marker) = FenceMarker::from_byte(cursor.current()) else {
        return 0;
    };
    let run = cursor.eat_while(|b| b == marker.byte());
    if run < MIN_FENCE_LEN {
        return 0;
    }

    let info_start = cursor.pos();
    cursor.eat_until_line_end();
    let info = cursor.slice_from(info_start);
    if memchr::memchr(0, info).is_some() {
        return 0;
    }
    if marker == FenceMarker::Backtick && memchr::memchr(b'`', info).is_some() {
        return 0;
    }

    cursor.eat_line_ending();
    cursor.pos()
}

/// Matches a closing code fence for `fence`: at least `fence.len` (and never
/// fewer than three) of the same marker, optional trailing spaces/tabs, then a line ending or end of
/// input.
///
/// Leading indentation must already be stripped. The match covers the whole
/// line including its terminator.
pub fn close_code_fence(input: &[u8], fence: Fence) -> usize {
    let mut cursor = Cursor::new(input);
    let marker = fence.marker.byte();
    let run = cursor.eat_while(|b| b == marker);
    if run < fence.len.max(MIN_FENCE_LEN) {
        return 0;
    }
    cursor.eat_whitespace();
    end_of_line(cursor)
}

/// Finish a line-spanning match: succeed with the consumed length (including
/// the terminator) at a line ending or end of input, otherwise `0`.
fn end_of_line(mut cursor: Cursor<'_>) -> usize {
    if !cursor.at_line_end_or_eof() {
        return 0;
    }
    cursor.eat_line_ending();
    cursor.pos()
}

#[cfg(test)]
mod tests;
