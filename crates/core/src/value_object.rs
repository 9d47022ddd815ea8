//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new one.
///
/// ```ignore
/// let a = Money::from_minor(2000);
/// let b = Money::from_minor(2000);
/// assert_eq!(a, b); // equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
