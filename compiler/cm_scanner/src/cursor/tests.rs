use super::Cursor;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new(b"abc");
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new(b"abc");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_stops_at_end() {
    let mut cursor = Cursor::new(b"abc");
    cursor.advance_n(10);
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.pos(), 3);
}

// === Sentinel ===

#[test]
fn current_past_end_returns_sentinel() {
    let mut cursor = Cursor::new(b"ab");
    cursor.advance_n(2);
    assert_eq!(cursor.current(), 0);
    assert!(cursor.is_eof());
}

#[test]
fn empty_window_is_eof() {
    let cursor = Cursor::new(b"");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let mut cursor = Cursor::new(b"a\0b");
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
}

#[test]
fn window_bounds_hide_following_bytes() {
    let backing = b"## heading";
    let mut cursor = Cursor::new(&backing[..2]);
    cursor.advance_n(2);
    assert_eq!(cursor.current(), 0, "byte after the window must not be visible");
}

// === eat_* ===

#[test]
fn eat_while_counts_bytes() {
    let mut cursor = Cursor::new(b"aaab");
    assert_eq!(cursor.eat_while(|b| b == b'a'), 3);
    assert_eq!(cursor.current(), b'b');
}

#[test]
fn eat_while_stops_at_end_even_if_pred_accepts_zero() {
    let mut cursor = Cursor::new(b"\0\0");
    assert_eq!(cursor.eat_while(|_| true), 2);
    assert!(cursor.is_eof());
}

#[test]
fn eat_while_max_respects_ceiling() {
    let mut cursor = Cursor::new(b"12345678");
    assert_eq!(cursor.eat_while_max(7, |b| b.is_ascii_digit()), 7);
    assert_eq!(cursor.current(), b'8');
}

#[test]
fn eat_whitespace_spaces_and_tabs() {
    let mut cursor = Cursor::new(b" \t \nx");
    assert_eq!(cursor.eat_whitespace(), 3);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_byte_only_on_match() {
    let mut cursor = Cursor::new(b"ab");
    assert!(!cursor.eat_byte(b'b'));
    assert!(cursor.eat_byte(b'a'));
    assert!(cursor.eat_byte(b'b'));
    assert!(!cursor.eat_byte(0));
}

#[test]
fn eat_line_ending_variants() {
    let mut lf = Cursor::new(b"\nx");
    assert!(lf.eat_line_ending());
    assert_eq!(lf.pos(), 1);

    let mut crlf = Cursor::new(b"\r\nx");
    assert!(crlf.eat_line_ending());
    assert_eq!(crlf.pos(), 2);

    let mut cr = Cursor::new(b"\rx");
    assert!(cr.eat_line_ending());
    assert_eq!(cr.pos(), 1);

    let mut none = Cursor::new(b"x");
    assert!(!none.eat_line_ending());
    assert_eq!(none.pos(), 0);
}

#[test]
fn at_line_end_or_eof() {
    assert!(Cursor::new(b"").at_line_end_or_eof());
    assert!(Cursor::new(b"\n").at_line_end_or_eof());
    assert!(Cursor::new(b"\r").at_line_end_or_eof());
    assert!(!Cursor::new(b"\0").at_line_end_or_eof());
    assert!(!Cursor::new(b" ").at_line_end_or_eof());
}

#[test]
fn eat_until_line_end_finds_newline() {
    let mut cursor = Cursor::new(b"rust x\nnext");
    assert_eq!(cursor.eat_until_line_end(), 6);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_line_end_without_newline_hits_eof() {
    let mut cursor = Cursor::new(b"no newline");
    assert_eq!(cursor.eat_until_line_end(), 10);
    assert!(cursor.is_eof());
}

// === skip_to_title_delim ===

#[test]
fn skip_to_title_delim_stops_at_close() {
    let mut cursor = Cursor::new(b"hello\" rest");
    assert_eq!(cursor.skip_to_title_delim(b'"', None), b'"');
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn skip_to_title_delim_stops_at_earliest() {
    let mut cursor = Cursor::new(b"a\\\"b\"");
    assert_eq!(cursor.skip_to_title_delim(b'"', None), b'\\');
    assert_eq!(cursor.pos(), 1);

    let mut cursor = Cursor::new(b"ab\r\"");
    assert_eq!(cursor.skip_to_title_delim(b'"', None), b'\r');

    let mut cursor = Cursor::new(b"a(b)");
    assert_eq!(cursor.skip_to_title_delim(b')', Some(b'(')), b'(');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn skip_to_title_delim_reports_interior_null() {
    let mut cursor = Cursor::new(b"ab\0\"");
    assert_eq!(cursor.skip_to_title_delim(b'"', None), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn skip_to_title_delim_secondary_before_primary() {
    // `\r` precedes the closing quote, `\0` precedes a backslash.
    let mut cursor = Cursor::new(b"ab\rcd\"");
    assert_eq!(cursor.skip_to_title_delim(b'"', None), b'\r');
    assert_eq!(cursor.pos(), 2);

    let mut cursor = Cursor::new(b"a\0\\b");
    assert_eq!(cursor.skip_to_title_delim(b'"', None), 0);
    assert_eq!(cursor.pos(), 1);
    assert!(!cursor.is_eof());
}

#[test]
fn skip_to_title_delim_secondary_after_primary_is_ignored() {
    let mut cursor = Cursor::new(b"a\\b\r\0");
    assert_eq!(cursor.skip_to_title_delim(b'"', None), b'\\');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn skip_to_title_delim_eof() {
    let mut cursor = Cursor::new(b"no close");
    assert_eq!(cursor.skip_to_title_delim(b'"', None), 0);
    assert!(cursor.is_eof());
}

// === Slicing ===

#[test]
fn rest_and_slice_from() {
    let mut cursor = Cursor::new(b"```rust");
    cursor.advance_n(3);
    assert_eq!(cursor.rest(), b"rust");
    assert_eq!(cursor.slice_from(0), b"```");
    assert_eq!(cursor.slice_from(10), b"");
}
