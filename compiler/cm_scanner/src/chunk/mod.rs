//! Borrowed, bounds-checked view into an externally owned buffer.
//!
//! A [`Chunk`] is the scanning domain handed to the invoker: a start offset
//! and a length over a byte slice it borrows. The lifetime ties the view to
//! its backing storage, so it can never outlive or mutate it.

use thiserror::Error;

/// Error when a requested window does not fit inside its backing storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// The window starts past the end of the backing storage.
    #[error("chunk start {start} exceeds source length {source_len}")]
    StartOutOfBounds { start: usize, source_len: usize },
    /// The window extends past the end of the backing storage.
    #[error("chunk end {end} exceeds source length {source_len}")]
    EndOutOfBounds { end: usize, source_len: usize },
}

/// Read-only view of `len` bytes starting at `start` within `source`.
///
/// # Invariant
///
/// `start + len <= source.len()`. Enforced by every constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk<'a> {
    source: &'a [u8],
    start: usize,
    len: usize,
}

impl<'a> Chunk<'a> {
    /// Create a view of `len` bytes starting at `start`.
    pub fn new(source: &'a [u8], start: usize, len: usize) -> Result<Self, ChunkError> {
        let source_len = source.len();
        if start > source_len {
            return Err(ChunkError::StartOutOfBounds { start, source_len });
        }
        match start.checked_add(len) {
            Some(end) if end <= source_len => Ok(Self { source, start, len }),
            _ => Err(ChunkError::EndOutOfBounds {
                end: start.saturating_add(len),
                source_len,
            }),
        }
    }

    /// View covering all of `source`.
    pub fn whole(source: &'a [u8]) -> Self {
        Self {
            source,
            start: 0,
            len: source.len(),
        }
    }

    /// Narrower view of `len` bytes starting `offset` bytes into this chunk.
    pub fn sub(&self, offset: usize, len: usize) -> Result<Chunk<'a>, ChunkError> {
        let bytes = self.as_bytes();
        let inner = Chunk::new(bytes, offset, len)?;
        Ok(Chunk {
            source: self.source,
            start: self.start + inner.start,
            len: inner.len,
        })
    }

    /// The bytes covered by this view.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.source[self.start..self.start + self.len]
    }

    /// Bytes from `offset` to the end of the view, or `None` if `offset`
    /// lies past the end.
    #[inline]
    pub fn tail(&self, offset: usize) -> Option<&'a [u8]> {
        self.as_bytes().get(offset..)
    }

    /// Byte at `offset` within the view.
    #[inline]
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.as_bytes().get(offset).copied()
    }

    /// Offset of this view within its backing storage.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Length of the view in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the view covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests;
