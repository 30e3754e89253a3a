use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use catalog_core::{OfferId, ProductId};
use catalog_offers::Offer;

use crate::ports::{OfferRepository, ProductDirectory, RepositoryError};

fn poisoned() -> RepositoryError {
    RepositoryError::Unavailable("lock poisoned".to_string())
}

/// In-memory offer storage.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryOfferRepository {
    offers: RwLock<HashMap<OfferId, Offer>>,
}

impl InMemoryOfferRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.offers.read().map_err(|_| poisoned())?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}

impl OfferRepository for InMemoryOfferRepository {
    fn load(&self, id: OfferId) -> Result<Option<Offer>, RepositoryError> {
        let offers = self.offers.read().map_err(|_| poisoned())?;
        Ok(offers.get(&id).cloned())
    }

    fn save(&self, offer: &Offer) -> Result<(), RepositoryError> {
        let mut offers = self.offers.write().map_err(|_| poisoned())?;
        offers.insert(offer.id_typed(), offer.clone());
        Ok(())
    }
}

/// In-memory product catalog: a set of known product ids.
#[derive(Debug, Default)]
pub struct InMemoryProductDirectory {
    known: RwLock<HashSet<ProductId>>,
}

impl InMemoryProductDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(ids: impl IntoIterator<Item = ProductId>) -> Self {
        Self {
            known: RwLock::new(ids.into_iter().collect()),
        }
    }

    pub fn register(&self, id: ProductId) -> Result<(), RepositoryError> {
        self.known.write().map_err(|_| poisoned())?.insert(id);
        Ok(())
    }

    pub fn forget(&self, id: &ProductId) -> Result<(), RepositoryError> {
        self.known.write().map_err(|_| poisoned())?.remove(id);
        Ok(())
    }
}

impl ProductDirectory for InMemoryProductDirectory {
    fn missing_products(&self, ids: &[ProductId]) -> Result<Vec<ProductId>, RepositoryError> {
        let known = self.known.read().map_err(|_| poisoned())?;
        let mut missing: Vec<ProductId> = ids
            .iter()
            .filter(|id| !known.contains(id))
            .copied()
            .collect();
        missing.sort_unstable();
        missing.dedup();
        Ok(missing)
    }
}
