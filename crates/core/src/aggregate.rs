//! Aggregate root trait for catalog domain models.

use crate::error::DomainResult;

/// Aggregate root marker + minimal interface.
///
/// An aggregate is loaded whole, mutated through its own methods, validated,
/// and handed back whole for persistence. Nothing below the root is stored or
/// addressed independently.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Check every aggregate-wide invariant against the current state.
    ///
    /// Never cached: the result is a pure function of the current contents.
    fn validate(&self) -> DomainResult<()>;
}
