//! Owning side of the buffer reference.
//!
//! [`SourceBuffer`] holds the document bytes that [`Chunk`]s borrow. During
//! construction it records input issues the CommonMark parser must act on:
//!
//! - A leading UTF-8 BOM (`0xEF 0xBB 0xBF`) is stripped from the content.
//! - Interior null bytes are recorded; CommonMark requires callers to treat
//!   U+0000 as U+FFFD. Scanners themselves treat NUL as non-matching content.

use tracing::debug;

use crate::Chunk;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Immutable document buffer that [`Chunk`]s borrow from.
#[derive(Clone, Debug, Default)]
pub struct SourceBuffer {
    /// Document content (BOM stripped).
    buf: Vec<u8>,
    /// Whether a UTF-8 BOM was stripped from the input.
    had_bom: bool,
    /// Byte positions (in `buf`) of interior null bytes.
    nul_positions: Vec<usize>,
}

impl SourceBuffer {
    /// Copy `source` into a new buffer, stripping a leading UTF-8 BOM and
    /// recording interior null bytes.
    pub fn new(source: impl AsRef<[u8]>) -> Self {
        let source = source.as_ref();
        let (had_bom, content) = match source.strip_prefix(UTF8_BOM) {
            Some(rest) => (true, rest),
            None => (false, source),
        };

        let nul_positions: Vec<usize> = memchr::memchr_iter(0, content).collect();

        if had_bom {
            debug!("stripped UTF-8 BOM from source");
        }
        if !nul_positions.is_empty() {
            debug!(count = nul_positions.len(), "source contains interior NUL bytes");
        }

        Self {
            buf: content.to_vec(),
            had_bom,
            nul_positions,
        }
    }

    /// Returns the document bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// View covering the whole document.
    pub fn chunk(&self) -> Chunk<'_> {
        Chunk::whole(&self.buf)
    }

    /// Iterate the document one line at a time.
    ///
    /// Each chunk includes its terminator (`\n`, `\r\n`, or a lone `\r`).
    /// A final line without a terminator is yielded as-is; an empty document
    /// yields nothing.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            source: &self.buf,
            pos: 0,
        }
    }

    /// Length of the document in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns `true` if a UTF-8 BOM was stripped during construction.
    pub fn had_bom(&self) -> bool {
        self.had_bom
    }

    /// Positions of interior null bytes, in ascending order.
    pub fn nul_positions(&self) -> &[usize] {
        &self.nul_positions
    }
}

/// Iterator over the lines of a [`SourceBuffer`].
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    source: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        let remaining = self.source.get(self.pos..).filter(|r| !r.is_empty())?;
        let len = match memchr::memchr2(b'\n', b'\r', remaining) {
            Some(i) if remaining[i] == b'\r' && remaining.get(i + 1) == Some(&b'\n') => i + 2,
            Some(i) => i + 1,
            None => remaining.len(),
        };
        let line = Chunk::new(self.source, self.pos, len).ok()?;
        self.pos += len;
        Some(line)
    }
}
