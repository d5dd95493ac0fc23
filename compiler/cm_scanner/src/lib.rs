//! Lexical scanning layer for a CommonMark parser.
//!
//! Each scanner answers one question: does construct `K` begin at this exact
//! byte offset, and if so, how many bytes does it occupy? A return value of
//! `0` means "no match here", which is an ordinary answer rather than an
//! error. Scanners never allocate, never build nodes, and never normalize.
//!
//! # Layers
//!
//! - [`SourceBuffer`] owns the document bytes and hands out [`Chunk`]s.
//! - [`Chunk`] is a bounds-checked, borrowed view (the scanning domain).
//! - [`Cursor`] walks one scan window and yields a virtual `0x00` sentinel
//!   past its end, so scanners can read until a synchronizing byte without
//!   ever indexing out of bounds.
//! - [`scanners`] holds the primitive recognizers, operating on raw bytes
//!   from offset 0 of their window.
//! - [`scan_at`] is the position-adapting invoker: it is the only place that
//!   translates a chunk offset into a scanner window.
//!
//! # Example
//!
//! ```
//! use cm_scanner::{scan_atx_heading_start, Chunk};
//!
//! let chunk = Chunk::whole(b"## Title\n");
//! assert_eq!(scan_atx_heading_start(&chunk, 0), 3);
//! ```

mod char_class;
mod chunk;
mod cursor;
pub mod entity;
pub mod limits;
pub mod scanners;
mod source_buffer;

pub use char_class::CharClass;
pub use chunk::{Chunk, ChunkError};
pub use cursor::Cursor;
pub use scanners::{
    atx_level, is_dangerous_url, scan_at, scan_atx_heading_start, scan_autolink_email,
    scan_autolink_uri, scan_close_code_fence, scan_dangerous_url, scan_entity, scan_link_title,
    scan_open_code_fence, scan_scheme, scan_setext_heading_line, scan_spacechars,
    scan_thematic_break, setext_level, Fence, FenceMarker, ScannerKind,
};
pub use source_buffer::{Lines, SourceBuffer};
