//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities are compared by identity: two instances with the same id refer to
/// the same roster entry even when their data fields differ. "Editing" an
/// entity means constructing a new value with the same id and replacing the
/// old one in the backing store.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity equality: same id, regardless of data fields.
    fn is_same(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
