use super::*;
use pretty_assertions::assert_eq;

#[test]
fn whole_covers_source() {
    let chunk = Chunk::whole(b"hello");
    assert_eq!(chunk.start(), 0);
    assert_eq!(chunk.len(), 5);
    assert_eq!(chunk.as_bytes(), b"hello");
    assert!(!chunk.is_empty());
}

#[test]
fn new_within_bounds() {
    let chunk = Chunk::new(b"hello world", 6, 5);
    assert_eq!(chunk.map(|c| c.as_bytes()), Ok(&b"world"[..]));
}

#[test]
fn new_empty_at_end() {
    let chunk = Chunk::new(b"abc", 3, 0);
    assert_eq!(chunk.map(|c| c.is_empty()), Ok(true));
}

#[test]
fn new_rejects_start_past_end() {
    assert_eq!(
        Chunk::new(b"abc", 4, 0),
        Err(ChunkError::StartOutOfBounds {
            start: 4,
            source_len: 3
        })
    );
}

#[test]
fn new_rejects_end_past_end() {
    assert_eq!(
        Chunk::new(b"abc", 1, 3),
        Err(ChunkError::EndOutOfBounds {
            end: 4,
            source_len: 3
        })
    );
}

#[test]
fn new_rejects_overflowing_len() {
    assert_eq!(
        Chunk::new(b"abc", 1, usize::MAX),
        Err(ChunkError::EndOutOfBounds {
            end: usize::MAX,
            source_len: 3
        })
    );
}

#[test]
fn error_messages() {
    let err = ChunkError::EndOutOfBounds {
        end: 9,
        source_len: 4,
    };
    assert_eq!(err.to_string(), "chunk end 9 exceeds source length 4");
}

#[test]
fn sub_offsets_compose() {
    let outer = Chunk::whole(b"# a\n## b\n");
    let Ok(line) = outer.sub(4, 5) else {
        panic!("second line should fit");
    };
    assert_eq!(line.start(), 4);
    assert_eq!(line.as_bytes(), b"## b\n");

    let Ok(inner) = line.sub(3, 1) else {
        panic!("inner window should fit");
    };
    assert_eq!(inner.start(), 7);
    assert_eq!(inner.as_bytes(), b"b");
}

#[test]
fn sub_cannot_escape_parent() {
    let outer = Chunk::whole(b"abcdef");
    let Ok(inner) = outer.sub(1, 2) else {
        panic!("window should fit");
    };
    assert!(inner.sub(0, 3).is_err());
}

#[test]
fn tail_and_byte_at() {
    let chunk = Chunk::whole(b"xyz");
    assert_eq!(chunk.tail(1), Some(&b"yz"[..]));
    assert_eq!(chunk.tail(3), Some(&b""[..]));
    assert_eq!(chunk.tail(4), None);
    assert_eq!(chunk.byte_at(2), Some(b'z'));
    assert_eq!(chunk.byte_at(3), None);
}
