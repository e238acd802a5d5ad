//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: a price band, a sort key or a whole
/// filter selection is defined entirely by its values. Two value objects with
/// the same values are interchangeable.
///
/// Value objects are **immutable**. To "modify" one, build a new value; in the
/// catalog this is what makes filter transitions safe to observe from the
/// renderer at any time.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// enum SortKey { Default, PriceAsc }
///
/// impl ValueObject for SortKey {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
