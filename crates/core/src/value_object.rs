//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Every value type
/// of the catalog (`Name`, `Description`, `Media`, `Price`, `Quantity`,
/// `Status`) validates itself on construction, so holding one means holding a
/// valid value. To "modify" one, build a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (`Price(2.50)` equals any other `Price(2.50)`)
/// - **Entity**: Has identity (two options with the same `OptionId` are the same option)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
