//! Named character reference table.
//!
//! A static, sorted table of every HTML5 named reference that ends in `;`.
//! It is built at compile time and never mutated, so concurrent lookups
//! need no synchronization.

mod table;

/// One named character reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entity {
    /// Name without the leading `&` and trailing `;` (case-sensitive).
    pub name: &'static str,
    /// The text the reference expands to (one or two code points).
    pub characters: &'static str,
}

impl Entity {
    const fn new(name: &'static str, characters: &'static str) -> Self {
        Self { name, characters }
    }
}

/// Shortest entity name in the table (`gt`, `lt`, ...).
pub const MIN_NAME_LEN: usize = 2;

/// Longest entity name in the table (`CounterClockwiseContourIntegral`).
pub const MAX_NAME_LEN: usize = 31;

/// All named references, sorted by name in byte order.
pub static ENTITIES: &[Entity] = table::ENTITIES;

/// Look up a named reference by its exact (case-sensitive) name.
///
/// `name` excludes the `&` and `;`. Names outside
/// `MIN_NAME_LEN..=MAX_NAME_LEN` are rejected without searching.
pub fn lookup(name: &[u8]) -> Option<&'static Entity> {
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&name.len()) {
        return None;
    }
    ENTITIES
        .binary_search_by(|entity| entity.name.as_bytes().cmp(name))
        .ok()
        .map(|i| &ENTITIES[i])
}
