use super::*;
use pretty_assertions::assert_eq;

// === ATX Heading Start ===

#[test]
fn atx_levels_one_through_six() {
    assert_eq!(atx_heading_start(b"# x"), 2);
    assert_eq!(atx_heading_start(b"## x"), 3);
    assert_eq!(atx_heading_start(b"###### x"), 7);
}

#[test]
fn atx_seven_hashes_is_not_heading() {
    assert_eq!(atx_heading_start(b"####### x"), 0);
    assert_eq!(atx_heading_start(b"#######"), 0);
}

#[test]
fn atx_requires_hash() {
    assert_eq!(atx_heading_start(b"x"), 0);
    assert_eq!(atx_heading_start(b" # x"), 0);
    assert_eq!(atx_heading_start(b""), 0);
}

#[test]
fn atx_requires_separator() {
    assert_eq!(atx_heading_start(b"#5 bolt"), 0);
    assert_eq!(atx_heading_start(b"#hashtag"), 0);
}

#[test]
fn atx_consumes_exactly_one_whitespace_byte() {
    assert_eq!(atx_heading_start(b"#   x"), 2);
    assert_eq!(atx_heading_start(b"#\tx"), 2);
}

#[test]
fn atx_empty_heading_at_line_end_or_eof() {
    assert_eq!(atx_heading_start(b"#\n"), 2);
    assert_eq!(atx_heading_start(b"##\r\n"), 3);
    assert_eq!(atx_heading_start(b"###"), 3);
}

#[test]
fn atx_interior_nul_is_not_separator() {
    assert_eq!(atx_heading_start(b"#\0"), 0);
}

#[test]
fn atx_level_from_span() {
    assert_eq!(atx_level(b"### "), Some(3));
    assert_eq!(atx_level(b"#"), Some(1));
    assert_eq!(atx_level(b"x"), None);
    assert_eq!(atx_level(b"#######"), None);
}

// === Setext Heading Line ===

#[test]
fn setext_equals_and_dashes() {
    assert_eq!(setext_heading_line(b"===\n"), 4);
    assert_eq!(setext_heading_line(b"-\n"), 2);
    assert_eq!(setext_heading_line(b"=="), 2);
}

#[test]
fn setext_trailing_whitespace_included() {
    assert_eq!(setext_heading_line(b"---  \t\n"), 7);
    assert_eq!(setext_heading_line(b"=  \r\n"), 5);
}

#[test]
fn setext_rejects_mixed_and_interior_content() {
    assert_eq!(setext_heading_line(b"=-=\n"), 0);
    assert_eq!(setext_heading_line(b"-- -\n"), 0);
    assert_eq!(setext_heading_line(b"== x\n"), 0);
    assert_eq!(setext_heading_line(b"\n"), 0);
}

#[test]
fn setext_stops_at_first_line() {
    assert_eq!(setext_heading_line(b"==\nnext"), 3);
}

#[test]
fn setext_level_from_span() {
    assert_eq!(setext_level(b"===\n"), Some(1));
    assert_eq!(setext_level(b"--"), Some(2));
    assert_eq!(setext_level(b""), None);
}

// === Thematic Break ===

#[test]
fn thematic_break_plain_runs() {
    assert_eq!(thematic_break(b"***"), 3);
    assert_eq!(thematic_break(b"____"), 4);
    assert_eq!(thematic_break(b"---\n"), 4);
}

#[test]
fn thematic_break_with_interior_whitespace() {
    assert_eq!(thematic_break(b"- - -"), 5);
    assert_eq!(thematic_break(b"*  *\t*  \n"), 9);
    assert_eq!(thematic_break(b"_ _ _ _ _\r\n"), 11);
}

#[test]
fn thematic_break_rejects_mixed_markers() {
    assert_eq!(thematic_break(b"** -"), 0);
    assert_eq!(thematic_break(b"*-*"), 0);
}

#[test]
fn thematic_break_requires_three() {
    assert_eq!(thematic_break(b"--"), 0);
    assert_eq!(thematic_break(b"- -\n"), 0);
}

#[test]
fn thematic_break_rejects_other_content() {
    assert_eq!(thematic_break(b"---a"), 0);
    assert_eq!(thematic_break(b"+++"), 0);
    assert_eq!(thematic_break(b"=="), 0);
}

// === Open Code Fence ===

#[test]
fn open_fence_backticks_and_tildes() {
    assert_eq!(open_code_fence(b"```\n"), 4);
    assert_eq!(open_code_fence(b"~~~~"), 4);
}

#[test]
fn open_fence_with_info_string() {
    assert_eq!(open_code_fence(b"``` rust ignore\ncode"), 16);
    assert_eq!(open_code_fence(b"~~~ a`b`\n"), 9);
}

#[test]
fn open_fence_backtick_info_rejects_backtick() {
    assert_eq!(open_code_fence(b"``` a`b\n"), 0);
    assert_eq!(open_code_fence(b"``````a`\n"), 0);
}

#[test]
fn open_fence_requires_three() {
    assert_eq!(open_code_fence(b"``\n"), 0);
    assert_eq!(open_code_fence(b"~~"), 0);
}

#[test]
fn open_fence_rejects_nul_in_info() {
    assert_eq!(open_code_fence(b"~~~ a\0b\n"), 0);
}

#[test]
fn open_fence_crlf_terminator() {
    assert_eq!(open_code_fence(b"```js\r\n"), 7);
}

#[test]
fn fence_from_open_span() {
    let span = b"````rust\n";
    assert_eq!(open_code_fence(span), span.len());
    assert_eq!(
        Fence::from_open(span),
        Some(Fence {
            marker: FenceMarker::Backtick,
            len: 4
        })
    );
    assert_eq!(
        Fence::from_open(b"~~~"),
        Some(Fence {
            marker: FenceMarker::Tilde,
            len: 3
        })
    );
    assert_eq!(Fence::from_open(b"``"), None);
    assert_eq!(Fence::from_open(b""), None);
}

#[test]
fn fence_info_string_is_trimmed() {
    let span = b"```  rust  \n";
    let Some(fence) = Fence::from_open(span) else {
        panic!("span is an opening fence");
    };
    assert_eq!(fence.info_string(span), b"rust");

    let Some(bare) = Fence::from_open(b"~~~~\r\n") else {
        panic!("span is an opening fence");
    };
    assert_eq!(bare.info_string(b"~~~~\r\n"), b"");
}

#[test]
fn fence_marker_bytes() {
    assert_eq!(FenceMarker::from_byte(b'`'), Some(FenceMarker::Backtick));
    assert_eq!(FenceMarker::from_byte(b'~'), Some(FenceMarker::Tilde));
    assert_eq!(FenceMarker::from_byte(b'-'), None);
    assert_eq!(FenceMarker::Tilde.byte(), b'~');
}

// === Close Code Fence ===

const BACKTICK3: Fence = Fence {
    marker: FenceMarker::Backtick,
    len: 3,
};

const TILDE4: Fence = Fence {
    marker: FenceMarker::Tilde,
    len: 4,
};

#[test]
fn close_fence_matches_same_marker() {
    assert_eq!(close_code_fence(b"```\n", BACKTICK3), 4);
    assert_eq!(close_code_fence(b"```", BACKTICK3), 3);
    assert_eq!(close_code_fence(b"~~~~", TILDE4), 4);
}

#[test]
fn close_fence_may_be_longer() {
    assert_eq!(close_code_fence(b"`````\n", BACKTICK3), 6);
    assert_eq!(close_code_fence(b"~~~~~~", TILDE4), 6);
}

#[test]
fn close_fence_rejects_shorter_run() {
    assert_eq!(close_code_fence(b"~~~\n", TILDE4), 0);
}

#[test]
fn close_fence_rejects_other_marker() {
    assert_eq!(close_code_fence(b"~~~\n", BACKTICK3), 0);
    assert_eq!(close_code_fence(b"````\n", TILDE4), 0);
}

#[test]
fn close_fence_trailing_whitespace_only() {
    assert_eq!(close_code_fence(b"```  \t\n", BACKTICK3), 7);
    assert_eq!(close_code_fence(b"``` x\n", BACKTICK3), 0);
    assert_eq!(close_code_fence(b"```rust\n", BACKTICK3), 0);
}

#[test]
fn close_fence_never_shorter_than_minimum() {
    let short = Fence {
        marker: FenceMarker::Backtick,
        len: 1,
    };
    assert_eq!(close_code_fence(b"`\n", short), 0);
    assert_eq!(close_code_fence(b"``\n", short), 0);
    assert_eq!(close_code_fence(b"```\n", short), 4);

    let empty = Fence {
        marker: FenceMarker::Tilde,
        len: 0,
    };
    assert_eq!(close_code_fence(b"\n", empty), 0);
}

#[test]
fn close_fence_round_trip_from_open() {
    let open = b"~~~~~ text\n";
    let Some(fence) = Fence::from_open(&open[..open_code_fence(open)]) else {
        panic!("opening fence must match");
    };
    assert_eq!(close_code_fence(b"~~~~~\n", fence), 6);
    assert_eq!(close_code_fence(b"~~~~\n", fence), 0);
}
