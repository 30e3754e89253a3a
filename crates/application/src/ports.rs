//! Ports the use cases are driven through.
//!
//! Implementations live outside the domain: a database, a remote product
//! catalog, or the in-memory adapters used for tests/dev.

use thiserror::Error;

use catalog_core::{OfferId, ProductId};
use catalog_offers::Offer;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Whole-aggregate storage for offers.
///
/// Concurrent writers to the same offer are the implementation's concern
/// (e.g. conditional writes); the use cases assume exclusive access for the
/// duration of one load/save cycle.
pub trait OfferRepository: Send + Sync {
    fn load(&self, id: OfferId) -> Result<Option<Offer>, RepositoryError>;

    /// Insert or replace the offer with the same id.
    fn save(&self, offer: &Offer) -> Result<(), RepositoryError>;
}

/// Existence check against the product catalog.
pub trait ProductDirectory: Send + Sync {
    /// The subset of `ids` that does not resolve to a known product, sorted
    /// and without repeats. Empty when everything resolves.
    fn missing_products(&self, ids: &[ProductId]) -> Result<Vec<ProductId>, RepositoryError>;
}
