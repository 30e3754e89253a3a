//! Offer use cases.

use catalog_core::{AggregateRoot, CustomizationId, OfferId, OptionId, Price, ProductId};
use catalog_offers::{Customization, Offer, OfferOption};

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::{OfferRepository, ProductDirectory};

/// Drives one offer change per call: load, mutate, validate, check products,
/// save. A rejected change is never saved.
///
/// Nested nodes are addressed by their parent: a customization either sits
/// directly on the offer (`parent: None`) or under an option anywhere in the
/// tree; an option always sits under a customization anywhere in the tree.
#[derive(Debug)]
pub struct OfferService<R, P> {
    repository: R,
    products: P,
}

impl<R, P> OfferService<R, P>
where
    R: OfferRepository,
    P: ProductDirectory,
{
    pub fn new(repository: R, products: P) -> Self {
        Self {
            repository,
            products,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn products(&self) -> &P {
        &self.products
    }

    pub fn offer(&self, offer_id: OfferId) -> ApplicationResult<Offer> {
        self.repository
            .load(offer_id)?
            .ok_or(ApplicationError::OfferNotFound(offer_id))
    }

    pub fn minimal_price(&self, offer_id: OfferId) -> ApplicationResult<Price> {
        Ok(self.offer(offer_id)?.minimal_price())
    }

    #[tracing::instrument(skip_all, fields(offer_id = %offer.id_typed()))]
    pub fn create_offer(&self, offer: Offer) -> ApplicationResult<Offer> {
        let offer_id = offer.id_typed();
        if self.repository.load(offer_id)?.is_some() {
            tracing::warn!("offer already exists");
            return Err(ApplicationError::OfferAlreadyExists(offer_id));
        }
        self.commit(offer)
    }

    #[tracing::instrument(skip_all, fields(%offer_id, %price))]
    pub fn set_offer_price(&self, offer_id: OfferId, price: Price) -> ApplicationResult<Offer> {
        self.change(offer_id, |offer| Ok(offer.set_price(price)?))
    }

    #[tracing::instrument(skip_all, fields(%offer_id, customization_id = %customization.id_typed()))]
    pub fn add_customization(
        &self,
        offer_id: OfferId,
        parent: Option<OptionId>,
        customization: Customization,
    ) -> ApplicationResult<Offer> {
        self.change(offer_id, |offer| match parent {
            None => Ok(offer.add_customization(customization)?),
            Some(option_id) => Ok(parent_option(offer, option_id)?.add_customization(customization)?),
        })
    }

    #[tracing::instrument(skip_all, fields(%offer_id, customization_id = %customization.id_typed()))]
    pub fn update_customization(
        &self,
        offer_id: OfferId,
        parent: Option<OptionId>,
        customization: Customization,
    ) -> ApplicationResult<Offer> {
        self.change(offer_id, |offer| match parent {
            None => Ok(offer.update_customization(customization)?),
            Some(option_id) => {
                Ok(parent_option(offer, option_id)?.update_customization(customization)?)
            }
        })
    }

    /// Removing an id the parent does not hold is a no-op; a missing parent
    /// is still an error.
    #[tracing::instrument(skip_all, fields(%offer_id, %customization_id))]
    pub fn remove_customization(
        &self,
        offer_id: OfferId,
        parent: Option<OptionId>,
        customization_id: CustomizationId,
    ) -> ApplicationResult<Offer> {
        self.change(offer_id, |offer| {
            match parent {
                None => offer.remove_customization(&customization_id),
                Some(option_id) => {
                    parent_option(offer, option_id)?.remove_customization(&customization_id)
                }
            }
            Ok(())
        })
    }

    #[tracing::instrument(skip_all, fields(%offer_id, %customization_id, option_id = %option.id_typed()))]
    pub fn add_option(
        &self,
        offer_id: OfferId,
        customization_id: CustomizationId,
        option: OfferOption,
    ) -> ApplicationResult<Offer> {
        self.change(offer_id, |offer| {
            Ok(parent_customization(offer, customization_id)?.add_option(option)?)
        })
    }

    #[tracing::instrument(skip_all, fields(%offer_id, %customization_id, option_id = %option.id_typed()))]
    pub fn update_option(
        &self,
        offer_id: OfferId,
        customization_id: CustomizationId,
        option: OfferOption,
    ) -> ApplicationResult<Offer> {
        self.change(offer_id, |offer| {
            Ok(parent_customization(offer, customization_id)?.update_option(option)?)
        })
    }

    #[tracing::instrument(skip_all, fields(%offer_id, %customization_id, %option_id))]
    pub fn remove_option(
        &self,
        offer_id: OfferId,
        customization_id: CustomizationId,
        option_id: OptionId,
    ) -> ApplicationResult<Offer> {
        self.change(offer_id, |offer| {
            Ok(parent_customization(offer, customization_id)?.remove_option(&option_id)?)
        })
    }

    fn change<F>(&self, offer_id: OfferId, mutate: F) -> ApplicationResult<Offer>
    where
        F: FnOnce(&mut Offer) -> ApplicationResult<()>,
    {
        let mut offer = self.offer(offer_id)?;
        if let Err(err) = mutate(&mut offer) {
            tracing::warn!(error = %err, "offer change rejected");
            return Err(err);
        }
        self.commit(offer)
    }

    fn commit(&self, offer: Offer) -> ApplicationResult<Offer> {
        if let Err(err) = offer.validate() {
            tracing::warn!(error = %err, "offer failed validation");
            return Err(err.into());
        }

        let product_ids: Vec<ProductId> =
            offer.all_products().iter().map(|p| p.id_typed()).collect();
        if !product_ids.is_empty() {
            let missing = self.products.missing_products(&product_ids)?;
            if !missing.is_empty() {
                tracing::warn!(missing = missing.len(), "offer references unknown products");
                return Err(ApplicationError::ProductsNotFound(missing));
            }
        }

        self.repository.save(&offer)?;
        tracing::info!(minimal_price = %offer.minimal_price(), "offer saved");
        Ok(offer)
    }
}

fn parent_option(offer: &mut Offer, option_id: OptionId) -> ApplicationResult<&mut OfferOption> {
    offer
        .find_option_in_children_by_id_mut(&option_id)
        .ok_or(ApplicationError::OptionNotFound(option_id))
}

fn parent_customization(
    offer: &mut Offer,
    customization_id: CustomizationId,
) -> ApplicationResult<&mut Customization> {
    offer
        .find_customization_in_children_by_id_mut(&customization_id)
        .ok_or(ApplicationError::CustomizationNotFound(customization_id))
}
