use super::*;
use pretty_assertions::assert_eq;

const BACKTICK3: Fence = Fence {
    marker: FenceMarker::Backtick,
    len: 3,
};

// === Invoker ===

#[test]
fn scan_at_passes_window_from_offset() {
    let chunk = Chunk::whole(b"xx## y");
    assert_eq!(scan_atx_heading_start(&chunk, 2), 3);
    assert_eq!(scan_atx_heading_start(&chunk, 0), 0);
}

#[test]
fn scan_at_end_of_chunk_is_zero() {
    let chunk = Chunk::whole(b"***");
    assert_eq!(scan_thematic_break(&chunk, 3), 0);
    for kind in ScannerKind::NULLARY {
        assert_eq!(kind.scan_at(&chunk, chunk.len()), 0, "{}", kind.name());
    }
}

#[test]
fn scan_at_past_end_is_zero() {
    let chunk = Chunk::whole(b"abc");
    assert_eq!(scan_at(|_| 1, &chunk, 4), 0);
    assert_eq!(scan_spacechars(&chunk, usize::MAX), 0);
}

#[test]
fn scan_at_never_calls_scanner_on_empty_window() {
    let chunk = Chunk::whole(b"");
    let mut called = false;
    let len = scan_at(
        |_| {
            called = true;
            0
        },
        &chunk,
        0,
    );
    assert_eq!(len, 0);
    assert!(!called);
}

#[test]
fn scan_at_respects_sub_chunk_bound() {
    // The sub-chunk ends before the `;`, so the entity cannot complete.
    let source = b"x &amp; y";
    let Ok(chunk) = Chunk::new(source, 2, 4) else {
        panic!("window fits");
    };
    assert_eq!(chunk.as_bytes(), b"&amp");
    assert_eq!(scan_entity(&chunk, 0), 0);

    let Ok(wider) = Chunk::new(source, 2, 5) else {
        panic!("window fits");
    };
    assert_eq!(scan_entity(&wider, 0), 5);
}

#[test]
fn scan_at_line_chunk_does_not_see_next_line() {
    // An ATX heading at the very end of a line chunk is an empty heading,
    // regardless of what follows in the backing buffer.
    let source = b"##x";
    let Ok(line) = Chunk::new(source, 0, 2) else {
        panic!("window fits");
    };
    assert_eq!(scan_atx_heading_start(&line, 0), 2);
}

#[test]
fn scan_at_clamps_result_to_window() {
    let chunk = Chunk::whole(b"ab");
    // Release builds clamp; debug builds assert.
    if !cfg!(debug_assertions) {
        assert_eq!(scan_at(|_| 10, &chunk, 1), 1);
    }
    assert_eq!(scan_at(<[u8]>::len, &chunk, 1), 1);
}

// === Chunk-level wrappers ===

#[test]
fn wrappers_match_primitives() {
    let chunk = Chunk::whole(b"<foo@bar.com> &#x41; \"t\" ```");
    assert_eq!(scan_autolink_email(&chunk, 1), 11);
    assert_eq!(scan_spacechars(&chunk, 13), 1);
    assert_eq!(scan_entity(&chunk, 14), 6);
    assert_eq!(scan_link_title(&chunk, 21), 3);
    assert_eq!(scan_open_code_fence(&chunk, 25), 3);
}

#[test]
fn wrappers_for_uri_and_scheme() {
    let chunk = Chunk::whole(b"see <https://x.y/z> now");
    assert_eq!(scan_scheme(&chunk, 5), 6);
    assert_eq!(scan_autolink_uri(&chunk, 5), 13);
    assert_eq!(scan_autolink_uri(&chunk, 0), 0);
}

#[test]
fn wrappers_for_block_lines() {
    let chunk = Chunk::whole(b"===\n");
    assert_eq!(scan_setext_heading_line(&chunk, 0), 4);
    assert_eq!(scan_thematic_break(&chunk, 0), 0);

    let fence = Chunk::whole(b"  ````\n");
    assert_eq!(scan_close_code_fence(&fence, 2, BACKTICK3), 5);
    assert_eq!(scan_close_code_fence(&fence, 0, BACKTICK3), 0);
}

#[test]
fn wrapper_for_dangerous_url() {
    let chunk = Chunk::whole(b"[x](javascript:alert(1))");
    assert_eq!(scan_dangerous_url(&chunk, 4), 11);
    assert_eq!(scan_dangerous_url(&chunk, 0), 0);
}

// === ScannerKind ===

#[test]
fn kind_names_are_unique() {
    let mut names: Vec<&str> = ScannerKind::NULLARY.iter().map(|k| k.name()).collect();
    names.push(ScannerKind::CloseCodeFence(BACKTICK3).name());
    let count = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), count);
}

#[test]
fn kind_dispatches_to_primitive() {
    let cases: [(ScannerKind, &[u8], usize); 12] = [
        (ScannerKind::Spacechars, b"  x", 2),
        (ScannerKind::AtxHeadingStart, b"# x", 2),
        (ScannerKind::SetextHeadingLine, b"--\n", 3),
        (ScannerKind::ThematicBreak, b"___", 3),
        (ScannerKind::OpenCodeFence, b"~~~\n", 4),
        (ScannerKind::CloseCodeFence(BACKTICK3), b"```", 3),
        (ScannerKind::Scheme, b"ftp:", 4),
        (ScannerKind::AutolinkUri, b"ftp:x>", 5),
        (ScannerKind::AutolinkEmail, b"a@b>", 3),
        (ScannerKind::LinkTitle, b"'t'", 3),
        (ScannerKind::Entity, b"&lt;", 4),
        (ScannerKind::DangerousUrl, b"data:x", 5),
    ];
    for (kind, input, expected) in cases {
        assert_eq!(kind.scan(input), expected, "{}", kind.name());
    }
}

mod proptest_scanners {
    use super::super::*;
    use crate::Chunk;
    use proptest::prelude::*;

    /// Bytes biased towards the ones the grammars care about.
    fn markdownish_byte() -> impl Strategy<Value = u8> {
        prop_oneof![
            3 => prop::sample::select(b"#=-*_`~ \t\n\r<>&;#xX@.:\"'()\\/".to_vec()),
            2 => prop::sample::select(b"abcxyzAZ0189".to_vec()),
            1 => any::<u8>(),
        ]
    }

    fn markdownish_bytes() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(markdownish_byte(), 0..64)
    }

    fn all_kinds() -> Vec<ScannerKind> {
        let mut kinds = ScannerKind::NULLARY.to_vec();
        kinds.push(ScannerKind::CloseCodeFence(super::BACKTICK3));
        kinds.push(ScannerKind::CloseCodeFence(Fence {
            marker: FenceMarker::Tilde,
            len: 5,
        }));
        kinds
    }

    proptest! {
        #[test]
        fn result_never_exceeds_window(bytes in markdownish_bytes(), offset in 0usize..72) {
            let chunk = Chunk::whole(&bytes);
            for kind in all_kinds() {
                let len = kind.scan_at(&chunk, offset);
                let window = bytes.len().saturating_sub(offset);
                prop_assert!(len <= window, "{} returned {} for window {}", kind.name(), len, window);
            }
        }

        #[test]
        fn total_over_arbitrary_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
            for kind in all_kinds() {
                let len = kind.scan(&bytes);
                prop_assert!(len <= bytes.len(), "{}", kind.name());
            }
        }

        #[test]
        fn scanning_is_deterministic(bytes in markdownish_bytes(), offset in 0usize..64) {
            let chunk = Chunk::whole(&bytes);
            for kind in all_kinds() {
                prop_assert_eq!(kind.scan_at(&chunk, offset), kind.scan_at(&chunk, offset));
            }
        }

        #[test]
        fn end_of_input_never_matches(bytes in markdownish_bytes()) {
            let chunk = Chunk::whole(&bytes);
            for kind in all_kinds() {
                prop_assert_eq!(kind.scan_at(&chunk, bytes.len()), 0, "{}", kind.name());
            }
        }

        #[test]
        fn offset_equals_sub_chunk(
            prefix in markdownish_bytes(),
            body in markdownish_bytes(),
        ) {
            let mut source = prefix.clone();
            source.extend_from_slice(&body);
            let whole = Chunk::whole(&source);
            let Ok(sub) = Chunk::new(&source, prefix.len(), body.len()) else {
                return Err(TestCaseError::fail("sub-chunk must fit"));
            };
            for kind in all_kinds() {
                prop_assert_eq!(
                    kind.scan_at(&whole, prefix.len()),
                    kind.scan_at(&sub, 0),
                    "{}", kind.name()
                );
            }
        }

        #[test]
        fn atx_matches_one_to_six_hashes(level in 1usize..=6, tail in "[ \t\n]?") {
            let input = format!("{}{}", "#".repeat(level), tail);
            prop_assert_eq!(atx_heading_start(input.as_bytes()), level + tail.len());
        }

        #[test]
        fn atx_rejects_seven_or_more(level in 7usize..20, tail in "[ \t\n]?") {
            let input = format!("{}{}", "#".repeat(level), tail);
            prop_assert_eq!(atx_heading_start(input.as_bytes()), 0);
        }

        #[test]
        fn thematic_break_spaced_runs(marker in prop::sample::select(vec!['*', '-', '_']),
                                      count in 3usize..10,
                                      gap in "[ \t]{0,3}") {
            let line: String = std::iter::repeat(format!("{marker}{gap}"))
                .take(count)
                .collect();
            prop_assert_eq!(thematic_break(line.as_bytes()), line.len());
        }

        #[test]
        fn decimal_entities_up_to_seven_digits(digits in "[0-9]{1,7}") {
            let input = format!("&#{digits};");
            prop_assert_eq!(entity(input.as_bytes()), input.len());
        }

        #[test]
        fn hex_entities_up_to_six_digits(digits in "[0-9a-fA-F]{1,6}", x in "[xX]") {
            let input = format!("&#{x}{digits};");
            prop_assert_eq!(entity(input.as_bytes()), input.len());
        }
    }
}
