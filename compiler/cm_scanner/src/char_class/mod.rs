//! Byte classification shared by all scanners.
//!
//! A static 256-entry table maps every byte to a [`CharClass`] set, so each
//! predicate is one load and one mask. Non-ASCII bytes carry no class and
//! therefore never match any ASCII-only grammar rule.

use bitflags::bitflags;

bitflags! {
    /// Lexical classes a byte can belong to.
    ///
    /// A byte may belong to several classes (e.g. `-` is punctuation, a
    /// scheme char, an email local-part char and a domain label char).
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CharClass: u8 {
        /// Space (`0x20`) or horizontal tab (`0x09`).
        const SPACE_TAB = 1 << 0;
        /// `\n` or `\r`.
        const LINE_ENDING = 1 << 1;
        /// ASCII punctuation: the characters a backslash can escape.
        const PUNCTUATION = 1 << 2;
        /// Continuation byte of a URI scheme: `[A-Za-z0-9+.-]`.
        const SCHEME = 1 << 3;
        /// Email local-part byte: alphanumerics plus ``.!#$%&'*+/=?^_`{|}~-``.
        const EMAIL_LOCAL = 1 << 4;
        /// Domain label byte: `[A-Za-z0-9-]`.
        const LABEL = 1 << 5;
        /// Forbidden inside an autolink URI: ASCII controls, space, `<`, `>`.
        const URI_FORBIDDEN = 1 << 6;
    }
}

const fn classify(b: u8) -> CharClass {
    let mut bits = 0u8;
    if b == b' ' || b == b'\t' {
        bits |= CharClass::SPACE_TAB.bits();
    }
    if b == b'\n' || b == b'\r' {
        bits |= CharClass::LINE_ENDING.bits();
    }
    if b.is_ascii_punctuation() {
        bits |= CharClass::PUNCTUATION.bits();
    }
    let alnum = b.is_ascii_alphanumeric();
    if alnum || b == b'+' || b == b'.' || b == b'-' {
        bits |= CharClass::SCHEME.bits();
    }
    if alnum
        || matches!(
            b,
            b'.' | b'!'
                | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'/'
                | b'='
                | b'?'
                | b'^'
                | b'_'
                | b'`'
                | b'{'
                | b'|'
                | b'}'
                | b'~'
                | b'-'
        )
    {
        bits |= CharClass::EMAIL_LOCAL.bits();
    }
    if alnum || b == b'-' {
        bits |= CharClass::LABEL.bits();
    }
    if b <= 0x20 || b == 0x7F || b == b'<' || b == b'>' {
        bits |= CharClass::URI_FORBIDDEN.bits();
    }
    CharClass::from_bits_truncate(bits)
}

#[allow(clippy::cast_possible_truncation, reason = "index is always < 256")]
static TABLE: [CharClass; 256] = {
    let mut table = [CharClass::empty(); 256];
    let mut i = 0;
    while i < 256 {
        table[i] = classify(i as u8);
        i += 1;
    }
    table
};

impl CharClass {
    /// Class set of a single byte.
    #[inline]
    pub fn of(b: u8) -> CharClass {
        TABLE[b as usize]
    }
}

#[inline]
pub(crate) fn is_space_or_tab(b: u8) -> bool {
    CharClass::of(b).contains(CharClass::SPACE_TAB)
}

#[inline]
pub(crate) fn is_line_ending(b: u8) -> bool {
    CharClass::of(b).contains(CharClass::LINE_ENDING)
}

#[inline]
pub(crate) fn is_punctuation(b: u8) -> bool {
    CharClass::of(b).contains(CharClass::PUNCTUATION)
}

#[inline]
pub(crate) fn is_scheme_char(b: u8) -> bool {
    CharClass::of(b).contains(CharClass::SCHEME)
}

#[inline]
pub(crate) fn is_email_local(b: u8) -> bool {
    CharClass::of(b).contains(CharClass::EMAIL_LOCAL)
}

#[inline]
pub(crate) fn is_label_char(b: u8) -> bool {
    CharClass::of(b).contains(CharClass::LABEL)
}

#[inline]
pub(crate) fn is_uri_char(b: u8) -> bool {
    !CharClass::of(b).contains(CharClass::URI_FORBIDDEN)
}

#[cfg(test)]
mod tests;
