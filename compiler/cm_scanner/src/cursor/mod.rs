//! Bounded cursor over one scan window.
//!
//! The cursor advances through the window byte-by-byte. Reading at or past
//! the end of the window yields a virtual sentinel (`0x00`), so scanners can
//! keep reading until they see a synchronizing byte (line ending, NUL, or a
//! class mismatch) without tracking an explicit end pointer, and without
//! ever touching bytes outside the window.
//!
//! # Interior Null Bytes
//!
//! Markdown input may contain NUL bytes. The cursor distinguishes them from
//! the end of the window by comparing `pos` against the window length: a
//! null at `pos < len` is content, a null at `pos >= len` is the sentinel.

use crate::char_class::{is_line_ending, is_space_or_tab};

/// Returns the earliest (minimum) of two optional positions.
///
/// Combines results from separate memchr calls when more than three
/// needles are involved.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Bounded cursor over a byte window.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for backtracking.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The scan window. Never read past its end.
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: usize,
}

/// Size assertion: a fat pointer plus one index.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.buf.get(pos).copied().unwrap_or(0)
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at the end of the window. Interior null bytes also
    /// return `0x00`; use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Advance the cursor by one byte.
    ///
    /// Advancing at EOF is a no-op: the cursor never moves past the window.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, stopping at the end of the window.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.buf.len());
    }

    /// Returns `true` if the cursor has reached the end of the window.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Current byte offset from the start of the window.
    ///
    /// This is also the number of bytes consumed so far, which is what
    /// scanners report as their match length.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The unread remainder of the window.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Bytes between `start` and the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.buf[start.min(self.pos)..self.pos]
    }

    /// Consume the current byte if it equals `byte`.
    #[inline]
    pub fn eat_byte(&mut self, byte: u8) -> bool {
        if !self.is_eof() && self.current() == byte {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Returns the number of bytes consumed. Stops at the end of the window
    /// even if `pred(0)` is `true`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while !self.is_eof() && pred(self.buf[self.pos]) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Like [`eat_while`](Self::eat_while) but consumes at most `max` bytes.
    ///
    /// Used to enforce grammar ceilings (scheme length, entity digits)
    /// without scanning arbitrarily long runs.
    #[inline]
    pub fn eat_while_max(&mut self, max: usize, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while self.pos - start < max && !self.is_eof() && pred(self.buf[self.pos]) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Advance past horizontal whitespace (spaces and tabs).
    ///
    /// Returns the number of bytes consumed.
    #[inline]
    pub fn eat_whitespace(&mut self) -> usize {
        self.eat_while(is_space_or_tab)
    }

    /// Returns `true` at a line ending (`\n` or `\r`) or at EOF.
    #[inline]
    pub fn at_line_end_or_eof(&self) -> bool {
        self.is_eof() || is_line_ending(self.current())
    }

    /// Consume one line ending: `\n`, `\r\n`, or a lone `\r`.
    ///
    /// Returns `true` if a line ending was consumed.
    #[inline]
    pub fn eat_line_ending(&mut self) -> bool {
        if self.eat_byte(b'\r') {
            self.eat_byte(b'\n');
            true
        } else {
            self.eat_byte(b'\n')
        }
    }

    /// Advance to the next `\n` or `\r`, or to EOF.
    ///
    /// Returns the number of bytes consumed. Uses SIMD-accelerated search.
    pub fn eat_until_line_end(&mut self) -> usize {
        let remaining = self.rest();
        let offset = memchr::memchr2(b'\n', b'\r', remaining).unwrap_or(remaining.len());
        self.pos += offset;
        offset
    }

    /// Advance past ordinary link-title content to the next interesting byte.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// "Interesting" bytes: the closing delimiter, `\`, `\n`, `\r`, NUL, and
    /// (for parenthesized titles) the forbidden nested opener. memchr3 covers
    /// the three most common, with a secondary search for the rest.
    ///
    /// The secondary search is bounded by the primary hit, so repeated calls
    /// over one window stay linear in its length.
    pub fn skip_to_title_delim(&mut self, close: u8, forbidden: Option<u8>) -> u8 {
        let remaining = self.rest();
        let primary = memchr::memchr3(close, b'\\', b'\n', remaining);
        let end = primary.unwrap_or(remaining.len());
        let secondary = memchr::memchr3(b'\r', 0, forbidden.unwrap_or(close), &remaining[..end]);

        if let Some(off) = earliest_of(primary, secondary) {
            self.pos += off;
            self.buf[self.pos]
        } else {
            self.pos = self.buf.len();
            0
        }
    }
}

#[cfg(test)]
mod tests;
