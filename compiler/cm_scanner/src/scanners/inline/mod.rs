//! Inline-level scanners: whitespace runs, autolinks, link titles, and
//! character references.

use crate::char_class::{
    is_email_local, is_label_char, is_line_ending, is_punctuation, is_scheme_char, is_uri_char,
};
use crate::entity;
use crate::limits::{
    MAX_DECIMAL_ENTITY_DIGITS, MAX_EMAIL_LABEL_LEN, MAX_HEX_ENTITY_DIGITS, MAX_SCHEME_LEN,
    MIN_SCHEME_LEN,
};
use crate::Cursor;

/// Matches a run of one or more spaces and tabs.
pub fn spacechars(input: &[u8]) -> usize {
    Cursor::new(input).eat_whitespace()
}

/// Matches a URI scheme and its trailing `:`.
///
/// A scheme is an ASCII letter followed by 1-31 letters, digits, `+`, `.`
/// or `-`.
pub fn scheme(input: &[u8]) -> usize {
    let mut cursor = Cursor::new(input);
    if !cursor.current().is_ascii_alphabetic() {
        return 0;
    }
    // One past the ceiling, so an over-long run is detected without
    // scanning all of it.
    let len = cursor.eat_while_max(MAX_SCHEME_LEN + 1, is_scheme_char);
    if !(MIN_SCHEME_LEN..=MAX_SCHEME_LEN).contains(&len) || !cursor.eat_byte(b':') {
        return 0;
    }
    cursor.pos()
}

/// Matches the body of a URI autolink, starting just after `<`.
///
/// The body is a scheme, `:`, then any bytes except ASCII controls, space,
/// `<` and `>`, and must be followed by `>`. The match excludes the `>`.
pub fn autolink_uri(input: &[u8]) -> usize {
    let mut cursor = Cursor::new(input);
    let scheme_len = scheme(input);
    if scheme_len == 0 {
        return 0;
    }
    cursor.advance_n(scheme_len);
    cursor.eat_while(is_uri_char);
    if cursor.is_eof() || cursor.current() != b'>' {
        return 0;
    }
    cursor.pos()
}

/// Matches the body of an email autolink, starting just after `<`.
///
/// The local part is one or more of ``[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]``,
/// then `@`, then dot-separated labels of alphanumerics and hyphens (no
/// hyphen at either end, at most 63 bytes each). The address must be
/// followed by `>`, which the match excludes.
pub fn autolink_email(input: &[u8]) -> usize {
    let mut cursor = Cursor::new(input);
    if cursor.eat_while(is_email_local) == 0 || !cursor.eat_byte(b'@') {
        return 0;
    }
    loop {
        if !eat_domain_label(&mut cursor) {
            return 0;
        }
        if !cursor.eat_byte(b'.') {
            break;
        }
    }
    if cursor.is_eof() || cursor.current() != b'>' {
        return 0;
    }
    cursor.pos()
}

/// Consume one domain label, returning `false` if it is malformed.
fn eat_domain_label(cursor: &mut Cursor<'_>) -> bool {
    let start = cursor.pos();
    let len = cursor.eat_while_max(MAX_EMAIL_LABEL_LEN + 1, is_label_char);
    if len == 0 || len > MAX_EMAIL_LABEL_LEN {
        return false;
    }
    let label = cursor.slice_from(start);
    label[0] != b'-' && label[len - 1] != b'-'
}

/// Matches a link title delimited by `"..."`, `'...'` or `(...)`.
///
/// The title may span lines but not contain a blank line. A backslash
/// before ASCII punctuation escapes it, so an escaped delimiter does not
/// close the title. In the parenthesized form an unescaped `(` is not
/// allowed. The match includes both delimiters.
pub fn link_title(input: &[u8]) -> usize {
    let mut cursor = Cursor::new(input);
    let (close, forbidden) = match cursor.current() {
        b'"' => (b'"', None),
        b'\'' => (b'\'', None),
        b'(' => (b')', Some(b'(')),
        _ => return 0,
    };
    cursor.advance();

    loop {
        let b = cursor.skip_to_title_delim(close, forbidden);
        if cursor.is_eof() {
            return 0;
        }
        match b {
            b'\\' => {
                cursor.advance();
                if !cursor.is_eof() && is_punctuation(cursor.current()) {
                    cursor.advance();
                }
            }
            _ if b == close => {
                cursor.advance();
                return cursor.pos();
            }
            b'\n' | b'\r' => {
                cursor.eat_line_ending();
                cursor.eat_whitespace();
                if cursor.is_eof() || is_line_ending(cursor.current()) {
                    return 0;
                }
            }
            // Interior NUL or a nested `(`.
            _ => return 0,
        }
    }
}

/// Matches a character reference: `&#` + 1-7 decimal digits + `;`,
/// `&#x`/`&#X` + 1-6 hex digits + `;`, or `&name;` for a name in the
/// [entity table](crate::entity).
pub fn entity(input: &[u8]) -> usize {
    let mut cursor = Cursor::new(input);
    if !cursor.eat_byte(b'&') {
        return 0;
    }

    let body_len = if cursor.eat_byte(b'#') {
        if cursor.eat_byte(b'x') || cursor.eat_byte(b'X') {
            cursor.eat_while_max(MAX_HEX_ENTITY_DIGITS, |b| b.is_ascii_hexdigit())
        } else {
            cursor.eat_while_max(MAX_DECIMAL_ENTITY_DIGITS, |b| b.is_ascii_digit())
        }
    } else {
        let start = cursor.pos();
        cursor.eat_while_max(entity::MAX_NAME_LEN + 1, |b| b.is_ascii_alphanumeric());
        if entity::lookup(cursor.slice_from(start)).is_none() {
            return 0;
        }
        cursor.pos() - start
    };

    if body_len == 0 || !cursor.eat_byte(b';') {
        return 0;
    }
    cursor.pos()
}
