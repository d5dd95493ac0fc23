use super::*;

// === Whitespace & Line Endings ===

#[test]
fn space_and_tab_only() {
    assert!(is_space_or_tab(b' '));
    assert!(is_space_or_tab(b'\t'));
    assert!(!is_space_or_tab(b'\n'));
    assert!(!is_space_or_tab(0x0B)); // vertical tab
    assert!(!is_space_or_tab(0x0C)); // form feed
    assert!(!is_space_or_tab(0));
}

#[test]
fn line_endings() {
    assert!(is_line_ending(b'\n'));
    assert!(is_line_ending(b'\r'));
    assert!(!is_line_ending(b' '));
    assert!(!is_line_ending(0));
}

// === Punctuation ===

#[test]
fn punctuation_matches_escapable_set() {
    for &b in br##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"## {
        assert!(is_punctuation(b), "{:?} should be punctuation", b as char);
    }
    for &b in b"aZ09 \t\n" {
        assert!(!is_punctuation(b), "{:?} should not be punctuation", b as char);
    }
}

// === Autolink Classes ===

#[test]
fn scheme_chars() {
    for &b in b"azAZ09+.-" {
        assert!(is_scheme_char(b));
    }
    for &b in b":/_ @" {
        assert!(!is_scheme_char(b));
    }
}

#[test]
fn email_local_chars() {
    for &b in b"aZ9.!#$%&'*+/=?^_`{|}~-" {
        assert!(is_email_local(b), "{:?}", b as char);
    }
    for &b in b"@<> ()[]\\,;:\"" {
        assert!(!is_email_local(b), "{:?}", b as char);
    }
}

#[test]
fn label_chars() {
    assert!(is_label_char(b'a'));
    assert!(is_label_char(b'7'));
    assert!(is_label_char(b'-'));
    assert!(!is_label_char(b'.'));
    assert!(!is_label_char(b'_'));
}

#[test]
fn uri_forbids_controls_space_and_angles() {
    for b in 0..=0x20u8 {
        assert!(!is_uri_char(b), "0x{b:02X} should be forbidden");
    }
    assert!(!is_uri_char(0x7F));
    assert!(!is_uri_char(b'<'));
    assert!(!is_uri_char(b'>'));
    assert!(is_uri_char(b'a'));
    assert!(is_uri_char(b'"'));
    assert!(is_uri_char(b'\\'));
}

// === Non-ASCII ===

#[test]
fn non_ascii_has_no_ascii_classes() {
    for b in 0x80..=0xFFu8 {
        let class = CharClass::of(b);
        assert_eq!(class, CharClass::empty(), "0x{b:02X}");
        // URI_FORBIDDEN is not set, so UTF-8 continuation bytes are allowed in URIs.
        assert!(is_uri_char(b));
    }
}

#[test]
fn dash_is_in_several_classes() {
    let class = CharClass::of(b'-');
    assert!(class.contains(CharClass::PUNCTUATION | CharClass::SCHEME | CharClass::LABEL));
    assert!(class.contains(CharClass::EMAIL_LOCAL));
}
