use super::*;

#[test]
fn javascript_is_dangerous() {
    assert_eq!(dangerous_url(b"javascript:alert(1)"), 11);
    assert_eq!(dangerous_url(b"JaVaScRiPt:alert(1)"), 11);
}

#[test]
fn other_dangerous_schemes() {
    assert_eq!(dangerous_url(b"vbscript:msgbox"), 9);
    assert_eq!(dangerous_url(b"file:///etc/passwd"), 5);
    assert_eq!(dangerous_url(b"FILE:x"), 5);
}

#[test]
fn data_urls_are_dangerous_by_default() {
    assert_eq!(dangerous_url(b"data:text/html,x"), 5);
    assert_eq!(dangerous_url(b"data:image/svg+xml,<svg>"), 5);
    assert_eq!(dangerous_url(b"data:"), 5);
}

#[test]
fn allow_listed_data_images_are_safe() {
    assert_eq!(dangerous_url(b"data:image/png;base64,AA>"), 0);
    assert_eq!(dangerous_url(b"data:image/gif;base64,R0lG"), 0);
    assert_eq!(dangerous_url(b"DATA:IMAGE/JPEG;base64,/9j/"), 0);
    assert_eq!(dangerous_url(b"data:image/webp,x"), 0);
}

#[test]
fn truncated_data_image_is_dangerous() {
    assert_eq!(dangerous_url(b"data:image/"), 5);
    assert_eq!(dangerous_url(b"data:image/pn"), 5);
}

#[test]
fn safe_urls() {
    assert_eq!(dangerous_url(b"https://example.com"), 0);
    assert_eq!(dangerous_url(b"javascript"), 0);
    assert_eq!(dangerous_url(b" javascript:x"), 0);
    assert_eq!(dangerous_url(b""), 0);
}

#[test]
fn is_dangerous_url_predicate() {
    assert!(is_dangerous_url(b"javascript:void(0)"));
    assert!(!is_dangerous_url(b"/relative/path"));
    assert!(!is_dangerous_url(b"data:image/png,x"));
}
