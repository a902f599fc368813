//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - they have no
/// identity of their own. `Money` is the canonical case here: two amounts of
/// `100` are the same amount wherever they appear in the ledger.
///
/// The trait requires `Clone + PartialEq + Debug` so values stay cheap to
/// copy, comparable by their attributes, and printable in tests and logs.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
