//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A customer keeps its identifier for its whole lifetime, even when its name
/// or statement change.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
