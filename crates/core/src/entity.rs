//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Equality and hashing of an entity are expected to follow its identifier,
/// not its attributes.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
