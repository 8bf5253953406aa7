//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two values with the same attributes are
/// the same value. They are immutable; "changing" one means building a new one.
///
/// - **Value Object**: `Money(24990)`, a `Category` label
/// - **Entity**: a `Product` or an `Order`, compared by identifier
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
