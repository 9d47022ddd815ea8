//! Aggregate root trait for mutable, in-memory domain models.

/// Aggregate root marker + minimal interface.
///
/// Kept small on purpose: an aggregate owns its children and is the only thing
/// callers mutate directly.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing revision of the aggregate's state.
    ///
    /// Every mutation bumps it by one, so two snapshots with the same version
    /// describe the same state.
    fn version(&self) -> u64;
}
