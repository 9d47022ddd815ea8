//! Entities: objects that keep their identity while their fields change.

/// Something with an identity that survives edits and the removal of its
/// siblings (e.g. a line item on an invoice).
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Whether `self` and `other` are the same thing, whatever their fields say.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
