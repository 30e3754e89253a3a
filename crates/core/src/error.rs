//! Domain error model.

use thiserror::Error;

use crate::id::{CustomizationId, OptionId};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic invariant violation: retrying the same
/// operation against the same tree yields the same error. Storage and lookup
/// failures of the surrounding use-case layer belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank name, negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A customization was built without any option.
    #[error("customization {0} must have at least one option")]
    CustomizationOptionsEmpty(CustomizationId),

    /// Fewer options are available than the customization requires.
    #[error(
        "customization {customization_id} requires {min_permitted} available options, found {available}"
    )]
    CustomizationMinPermitted {
        customization_id: CustomizationId,
        min_permitted: u32,
        available: usize,
    },

    #[error("option {0} already exists")]
    OptionAlreadyExists(OptionId),

    #[error("option {0} not found")]
    OptionNotFound(OptionId),

    #[error("customization {0} already exists")]
    CustomizationAlreadyExists(CustomizationId),

    #[error("customization {0} not found")]
    CustomizationNotFound(CustomizationId),

    /// Customization ids occurring more than once anywhere in an offer tree.
    #[error("duplicated customization ids: {}", join_ids(.0))]
    DuplicatedCustomization(Vec<CustomizationId>),

    /// Option ids occurring more than once anywhere in an offer tree.
    #[error("duplicated option ids: {}", join_ids(.0))]
    DuplicatedOption(Vec<OptionId>),

    #[error("offer price must be greater than zero")]
    OfferPriceZero,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

fn join_ids<T: core::fmt::Display>(ids: &[T]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
