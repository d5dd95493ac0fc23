//! Primitive scanners and the position-adapting invoker.
//!
//! Every primitive scanner takes the bytes from its start position to the
//! end of the chunk and returns the match length, `0` meaning no match.
//! Scanners never see chunk structure; [`scan_at`] is the only place that
//! turns a chunk offset into a scan window.
//!
//! The `scan_*` functions are the chunk-level entry points a parser calls:
//!
//! ```
//! use cm_scanner::{scan_entity, scan_thematic_break, Chunk};
//!
//! let chunk = Chunk::whole(b"a &amp; b");
//! assert_eq!(scan_entity(&chunk, 2), 5);
//! assert_eq!(scan_thematic_break(&chunk, 0), 0);
//! ```

mod block;
mod inline;
mod url;

use tracing::{debug, trace};

use crate::Chunk;

pub use block::{
    atx_heading_start, atx_level, close_code_fence, open_code_fence, setext_heading_line,
    setext_level, thematic_break, Fence, FenceMarker,
};
pub use inline::{autolink_email, autolink_uri, entity, link_title, scheme, spacechars};
pub use url::{dangerous_url, is_dangerous_url};

/// The closed set of scanners.
///
/// Dispatch is a `match`, not a function pointer: every kind is known at
/// compile time. [`CloseCodeFence`](ScannerKind::CloseCodeFence) carries the
/// opening fence it must match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScannerKind {
    Spacechars,
    AtxHeadingStart,
    SetextHeadingLine,
    ThematicBreak,
    OpenCodeFence,
    CloseCodeFence(Fence),
    Scheme,
    AutolinkUri,
    AutolinkEmail,
    LinkTitle,
    Entity,
    DangerousUrl,
}

impl ScannerKind {
    /// Every kind that needs no parameter.
    pub const NULLARY: [ScannerKind; 11] = [
        ScannerKind::Spacechars,
        ScannerKind::AtxHeadingStart,
        ScannerKind::SetextHeadingLine,
        ScannerKind::ThematicBreak,
        ScannerKind::OpenCodeFence,
        ScannerKind::Scheme,
        ScannerKind::AutolinkUri,
        ScannerKind::AutolinkEmail,
        ScannerKind::LinkTitle,
        ScannerKind::Entity,
        ScannerKind::DangerousUrl,
    ];

    /// Stable name, used in trace output.
    pub fn name(self) -> &'static str {
        match self {
            ScannerKind::Spacechars => "spacechars",
            ScannerKind::AtxHeadingStart => "atx_heading_start",
            ScannerKind::SetextHeadingLine => "setext_heading_line",
            ScannerKind::ThematicBreak => "thematic_break",
            ScannerKind::OpenCodeFence => "open_code_fence",
            ScannerKind::CloseCodeFence(_) => "close_code_fence",
            ScannerKind::Scheme => "scheme",
            ScannerKind::AutolinkUri => "autolink_uri",
            ScannerKind::AutolinkEmail => "autolink_email",
            ScannerKind::LinkTitle => "link_title",
            ScannerKind::Entity => "entity",
            ScannerKind::DangerousUrl => "dangerous_url",
        }
    }

    /// Run the scanner on `input`, starting at byte 0.
    pub fn scan(self, input: &[u8]) -> usize {
        match self {
            ScannerKind::Spacechars => spacechars(input),
            ScannerKind::AtxHeadingStart => atx_heading_start(input),
            ScannerKind::SetextHeadingLine => setext_heading_line(input),
            ScannerKind::ThematicBreak => thematic_break(input),
            ScannerKind::OpenCodeFence => open_code_fence(input),
            ScannerKind::CloseCodeFence(fence) => close_code_fence(input, fence),
            ScannerKind::Scheme => scheme(input),
            ScannerKind::AutolinkUri => autolink_uri(input),
            ScannerKind::AutolinkEmail => autolink_email(input),
            ScannerKind::LinkTitle => link_title(input),
            ScannerKind::Entity => entity(input),
            ScannerKind::DangerousUrl => dangerous_url(input),
        }
    }

    /// Run the scanner at `offset` within `chunk`.
    pub fn scan_at(self, chunk: &Chunk<'_>, offset: usize) -> usize {
        let len = scan_at(|input| self.scan(input), chunk, offset);
        if len > 0 {
            trace!(scanner = self.name(), offset, len, "matched");
        }
        len
    }
}

/// Run `scanner` on `chunk` starting at `offset`.
///
/// Returns the match length, or `0` for no match. An offset at the end of
/// the chunk always yields `0` (no construct can start at end of input), and
/// an offset past the end is a caller defect that also yields `0`. The
/// scanner only ever sees the bytes from `offset` to the end of the chunk,
/// so it cannot read past the chunk's bound, and its result is clamped to
/// that window.
pub fn scan_at(scanner: impl FnOnce(&[u8]) -> usize, chunk: &Chunk<'_>, offset: usize) -> usize {
    let Some(window) = chunk.tail(offset) else {
        debug!(
            offset,
            chunk_len = chunk.len(),
            "scan offset past end of chunk"
        );
        return 0;
    };
    if window.is_empty() {
        return 0;
    }
    let len = scanner(window);
    debug_assert!(len <= window.len(), "scanner overran its window");
    len.min(window.len())
}

/// Length of the space/tab run at `offset`.
pub fn scan_spacechars(chunk: &Chunk<'_>, offset: usize) -> usize {
    ScannerKind::Spacechars.scan_at(chunk, offset)
}

/// Length of the ATX heading opener at `offset`.
pub fn scan_atx_heading_start(chunk: &Chunk<'_>, offset: usize) -> usize {
    ScannerKind::AtxHeadingStart.scan_at(chunk, offset)
}

/// Length of the setext underline line at `offset`.
pub fn scan_setext_heading_line(chunk: &Chunk<'_>, offset: usize) -> usize {
    ScannerKind::SetextHeadingLine.scan_at(chunk, offset)
}

/// Length of the thematic break line at `offset`.
pub fn scan_thematic_break(chunk: &Chunk<'_>, offset: usize) -> usize {
    ScannerKind::ThematicBreak.scan_at(chunk, offset)
}

/// Length of the opening code fence line at `offset`.
pub fn scan_open_code_fence(chunk: &Chunk<'_>, offset: usize) -> usize {
    ScannerKind::OpenCodeFence.scan_at(chunk, offset)
}

/// Length of a closing fence line for `fence` at `offset`.
pub fn scan_close_code_fence(chunk: &Chunk<'_>, offset: usize, fence: Fence) -> usize {
    ScannerKind::CloseCodeFence(fence).scan_at(chunk, offset)
}

/// Length of the URI scheme (with `:`) at `offset`.
pub fn scan_scheme(chunk: &Chunk<'_>, offset: usize) -> usize {
    ScannerKind::Scheme.scan_at(chunk, offset)
}

/// Length of the URI autolink body at `offset` (just after `<`).
pub fn scan_autolink_uri(chunk: &Chunk<'_>, offset: usize) -> usize {
    ScannerKind::AutolinkUri.scan_at(chunk, offset)
}

/// Length of the email autolink body at `offset` (just after `<`).
pub fn scan_autolink_email(chunk: &Chunk<'_>, offset: usize) -> usize {
    ScannerKind::AutolinkEmail.scan_at(chunk, offset)
}

/// Length of the link title at `offset`, delimiters included.
pub fn scan_link_title(chunk: &Chunk<'_>, offset: usize) -> usize {
    ScannerKind::LinkTitle.scan_at(chunk, offset)
}

/// Length of the character reference at `offset`.
pub fn scan_entity(chunk: &Chunk<'_>, offset: usize) -> usize {
    ScannerKind::Entity.scan_at(chunk, offset)
}

/// Length of the dangerous URL scheme prefix at `offset`.
pub fn scan_dangerous_url(chunk: &Chunk<'_>, offset: usize) -> usize {
    ScannerKind::DangerousUrl.scan_at(chunk, offset)
}

#[cfg(test)]
mod tests;
