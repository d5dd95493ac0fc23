//! Drives the scanners over whole documents the way a block parser does:
//! one line chunk at a time, with the open fence threaded from the opening
//! line to the closing one.

use std::sync::Once;

use cm_scanner::{
    atx_level, scan_atx_heading_start, scan_close_code_fence, scan_open_code_fence,
    scan_setext_heading_line, scan_spacechars, scan_thematic_break, setext_level, Chunk, Fence,
    SourceBuffer,
};
use pretty_assertions::assert_eq;

static TRACING_INIT: Once = Once::new();

/// Install a subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=cm_scanner=trace cargo test -p cm_scanner`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer())
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

#[derive(Debug, PartialEq, Eq)]
enum Block {
    Atx(u8),
    SetextUnderline(u8),
    ThematicBreak,
    FenceOpen(Fence, String),
    FenceBody,
    FenceClose,
    Text,
    Blank,
}

fn classify(source: &str) -> Vec<Block> {
    let buf = SourceBuffer::new(source);
    let mut open: Option<Fence> = None;
    let mut blocks = Vec::new();

    for line in buf.lines() {
        let indent = scan_spacechars(&line, 0);
        let bytes = line.as_bytes();

        if let Some(fence) = open {
            if indent < 4 && scan_close_code_fence(&line, indent, fence) > 0 {
                open = None;
                blocks.push(Block::FenceClose);
            } else {
                blocks.push(Block::FenceBody);
            }
            continue;
        }

        let rest = &bytes[indent..];
        if rest.iter().all(|b| b.is_ascii_whitespace()) {
            blocks.push(Block::Blank);
        } else if let Some(level) =
            matched(&line, indent, scan_atx_heading_start).and_then(atx_level)
        {
            blocks.push(Block::Atx(level));
        } else if matched(&line, indent, scan_thematic_break).is_some() {
            blocks.push(Block::ThematicBreak);
        } else if let Some(level) =
            matched(&line, indent, scan_setext_heading_line).and_then(setext_level)
        {
            blocks.push(Block::SetextUnderline(level));
        } else if let Some(span) = matched(&line, indent, scan_open_code_fence) {
            let Some(fence) = Fence::from_open(span) else {
                panic!("open fence match must yield a fence");
            };
            let info = String::from_utf8_lossy(fence.info_string(span)).into_owned();
            open = Some(fence);
            blocks.push(Block::FenceOpen(fence, info));
        } else {
            blocks.push(Block::Text);
        }
    }
    blocks
}

/// Run a chunk-level scanner and return the matched bytes, if any.
fn matched<'a>(
    line: &Chunk<'a>,
    offset: usize,
    scanner: fn(&Chunk<'_>, usize) -> usize,
) -> Option<&'a [u8]> {
    let len = scanner(line, offset);
    (len > 0).then(|| &line.as_bytes()[offset..offset + len])
}

#[test]
fn headings_breaks_and_text() {
    init_tracing();
    let blocks = classify("# One\n\nSome text\n===\n- - -\n###### Six\n####### Seven\n");
    assert_eq!(
        blocks,
        vec![
            Block::Atx(1),
            Block::Blank,
            Block::Text,
            Block::SetextUnderline(1),
            Block::ThematicBreak,
            Block::Atx(6),
            Block::Text,
        ]
    );
}

#[test]
fn dash_line_is_a_thematic_break_before_setext() {
    init_tracing();
    // A parser checks thematic breaks first; `---` is both.
    let blocks = classify("Title\n---\n--\n");
    assert_eq!(
        blocks,
        vec![Block::Text, Block::ThematicBreak, Block::SetextUnderline(2)]
    );
}

#[test]
fn fenced_code_threads_open_fence_to_close() {
    init_tracing();
    let blocks = classify("````rust\n```\nfn main() {}\n  `````\nafter\n");
    let Some(fence) = Fence::from_open(b"````") else {
        panic!("four backticks open a fence");
    };
    assert_eq!(
        blocks,
        vec![
            Block::FenceOpen(fence, "rust".to_owned()),
            Block::FenceBody,
            Block::FenceBody,
            Block::FenceClose,
            Block::Text,
        ]
    );
}

#[test]
fn tilde_fence_is_not_closed_by_backticks() {
    init_tracing();
    let blocks = classify("~~~\n```\n~~~\n");
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[1], Block::FenceBody);
    assert_eq!(blocks[2], Block::FenceClose);
}

#[test]
fn crlf_document() {
    init_tracing();
    let blocks = classify("## A\r\n***\r\n\r\ntext");
    assert_eq!(
        blocks,
        vec![
            Block::Atx(2),
            Block::ThematicBreak,
            Block::Blank,
            Block::Text,
        ]
    );
}

#[test]
fn line_chunks_keep_document_offsets() {
    init_tracing();
    let buf = SourceBuffer::new("text\n## Two\n");
    let Some(second) = buf.lines().nth(1) else {
        panic!("document has two lines");
    };
    assert_eq!(second.start(), 5);
    assert_eq!(scan_atx_heading_start(&second, 0), 3);
    // The same construct, addressed through the whole-document chunk.
    assert_eq!(scan_atx_heading_start(&buf.chunk(), second.start()), 3);
}
