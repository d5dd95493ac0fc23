//! Unsafe URL scheme detection for HTML rendering.

/// Schemes that must not reach rendered HTML unmodified.
const DANGEROUS_SCHEMES: [&[u8]; 4] = [b"javascript:", b"vbscript:", b"file:", b"data:"];

/// `data:` URLs with one of these image subtypes are allowed.
const SAFE_DATA_PREFIX: &[u8] = b"data:image/";
const SAFE_IMAGE_SUBTYPES: [&[u8]; 4] = [b"png", b"gif", b"jpeg", b"webp"];

fn starts_with_ignore_case(input: &[u8], prefix: &[u8]) -> bool {
    input
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Matches a dangerous URL scheme prefix (case-insensitive): `javascript:`,
/// `vbscript:`, `file:`, or `data:`.
///
/// Returns the length of the scheme prefix, or `0` when the URL is safe.
/// `data:image/png`, `gif`, `jpeg` and `webp` are allowed and return `0`.
pub fn dangerous_url(input: &[u8]) -> usize {
    if starts_with_ignore_case(input, SAFE_DATA_PREFIX) {
        let subtype = &input[SAFE_DATA_PREFIX.len()..];
        if SAFE_IMAGE_SUBTYPES
            .iter()
            .any(|safe| starts_with_ignore_case(subtype, safe))
        {
            return 0;
        }
    }
    DANGEROUS_SCHEMES
        .iter()
        .find(|scheme| starts_with_ignore_case(input, scheme))
        .map_or(0, |scheme| scheme.len())
}

/// Returns `true` if `url` starts with a dangerous scheme.
pub fn is_dangerous_url(url: &[u8]) -> bool {
    dangerous_url(url) > 0
}

#[cfg(test)]
mod tests;
