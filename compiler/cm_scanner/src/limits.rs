//! Grammar ceilings and floors mandated by CommonMark.
//!
//! These bound the work any single scan can do on pathological input.

/// Maximum number of `#` characters in an ATX heading opener.
pub const MAX_ATX_LEVEL: usize = 6;

/// Minimum run of backticks or tildes that opens a fenced code block.
pub const MIN_FENCE_LEN: usize = 3;

/// Minimum number of `*`, `-` or `_` markers in a thematic break.
pub const MIN_THEMATIC_BREAK_MARKERS: usize = 3;

/// Maximum length of a URI scheme name, excluding the trailing `:`.
pub const MAX_SCHEME_LEN: usize = 32;

/// Minimum length of a URI scheme name, excluding the trailing `:`.
pub const MIN_SCHEME_LEN: usize = 2;

/// Maximum digits in a decimal character reference (`&#1234567;`).
pub const MAX_DECIMAL_ENTITY_DIGITS: usize = 7;

/// Maximum digits in a hexadecimal character reference (`&#x10FFFF;`).
pub const MAX_HEX_ENTITY_DIGITS: usize = 6;

/// Maximum length of a single domain label in an email autolink.
pub const MAX_EMAIL_LABEL_LEN: usize = 63;
