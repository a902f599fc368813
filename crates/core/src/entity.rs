//! Entity trait: identity + continuity across state changes.

/// Marker trait for objects identified by an id rather than by their values.
///
/// The bookkeeping session is the one entity in this system: its ledger
/// contents change with every recorded transaction, but it stays the same
/// session for as long as it lives.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
