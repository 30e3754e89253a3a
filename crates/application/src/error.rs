use thiserror::Error;

use catalog_core::{CustomizationId, DomainError, OfferId, OptionId, ProductId};

use crate::ports::RepositoryError;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Outcome of a rejected use case, ready to be mapped onto a transport
/// (not found, conflict, unprocessable).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("offer {0} not found")]
    OfferNotFound(OfferId),

    #[error("offer {0} already exists")]
    OfferAlreadyExists(OfferId),

    /// A parent customization addressed by the caller is not in the tree.
    #[error("customization {0} not found in offer")]
    CustomizationNotFound(CustomizationId),

    /// A parent option addressed by the caller is not in the tree.
    #[error("option {0} not found in offer")]
    OptionNotFound(OptionId),

    #[error("products not found: {0:?}")]
    ProductsNotFound(Vec<ProductId>),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
