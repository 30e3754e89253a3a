//! Offer: the sellable aggregate and root of the customization tree.

use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use catalog_core::entity::{duplicated_ids, position_of};
use catalog_core::{
    AggregateRoot, CustomizationId, Description, DomainError, DomainResult, Entity, Media, Name,
    OfferId, OptionId, Price, Status,
};

use crate::customization::Customization;
use crate::option::OfferOption;
use crate::product::Product;

/// Attributes of an offer; also its load shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOffer {
    #[serde(default)]
    pub id: OfferId,
    pub name: Name,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    pub price: Price,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub customizations: Vec<Customization>,
    #[serde(default)]
    pub media: Vec<Media>,
}

/// Aggregate root: Offer.
///
/// Owns its customizations, which own their options, which may own further
/// customizations. The tree is loaded whole, changed through one of the
/// methods below, checked with [`AggregateRoot::validate`], and stored whole.
///
/// `price` is strictly positive at all times. Tree-wide id uniqueness is only
/// checked by `validate`, since direct-child operations cannot see siblings
/// elsewhere in the tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "NewOffer")]
pub struct Offer {
    id: OfferId,
    name: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Description>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product: Option<Product>,
    price: Price,
    status: Status,
    customizations: Vec<Customization>,
    media: Vec<Media>,
}

impl Offer {
    pub fn new(new: NewOffer) -> DomainResult<Self> {
        ensure_price_positive(new.id, new.price)?;
        Ok(Self {
            id: new.id,
            name: new.name,
            description: new.description,
            product: new.product,
            price: new.price,
            status: new.status,
            customizations: new.customizations,
            media: new.media,
        })
    }

    pub fn id_typed(&self) -> OfferId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn customizations(&self) -> &[Customization] {
        &self.customizations
    }

    pub fn media(&self) -> &[Media] {
        &self.media
    }

    /// Replace the price. A non-positive price is rejected and the previous
    /// one kept.
    pub fn set_price(&mut self, price: Price) -> DomainResult<()> {
        ensure_price_positive(self.id, price)?;
        self.price = price;
        Ok(())
    }

    pub fn add_customization(&mut self, customization: Customization) -> DomainResult<()> {
        let customization_id = *customization.id();
        if position_of(&self.customizations, &customization_id).is_some() {
            tracing::debug!(offer_id = %self.id, %customization_id, "customization already exists");
            return Err(DomainError::CustomizationAlreadyExists(customization_id));
        }
        self.customizations.push(customization);
        Ok(())
    }

    pub fn update_customization(&mut self, customization: Customization) -> DomainResult<()> {
        let customization_id = *customization.id();
        let Some(idx) = position_of(&self.customizations, &customization_id) else {
            tracing::debug!(offer_id = %self.id, %customization_id, "customization not found");
            return Err(DomainError::CustomizationNotFound(customization_id));
        };
        self.customizations[idx] = customization;
        Ok(())
    }

    /// Missing ids are a no-op.
    pub fn remove_customization(&mut self, id: &CustomizationId) {
        self.customizations.retain(|c| c.id() != id);
    }

    /// Every customization in the tree, direct ones included (pre-order).
    pub fn all_customizations(&self) -> Vec<&Customization> {
        let mut all = Vec::new();
        for customization in &self.customizations {
            all.push(customization);
            all.extend(customization.all_customizations_in_children());
        }
        all
    }

    /// Every option in the tree, at any depth (pre-order).
    pub fn all_options(&self) -> Vec<&OfferOption> {
        self.customizations
            .iter()
            .flat_map(Customization::all_options_in_children)
            .collect()
    }

    /// Look up a customization anywhere in the tree. Walks the whole tree on
    /// every call.
    pub fn find_customization_in_children_by_id(
        &self,
        id: &CustomizationId,
    ) -> Option<&Customization> {
        self.all_customizations()
            .into_iter()
            .find(|customization| customization.id() == id)
    }

    /// Look up an option anywhere in the tree. Walks the whole tree on every
    /// call.
    pub fn find_option_in_children_by_id(&self, id: &OptionId) -> Option<&OfferOption> {
        self.all_options()
            .into_iter()
            .find(|option| option.id() == id)
    }

    /// Mutable access to a customization anywhere in the tree. Its own
    /// methods keep its invariants; the tree-wide ones still need `validate`.
    pub fn find_customization_in_children_by_id_mut(
        &mut self,
        id: &CustomizationId,
    ) -> Option<&mut Customization> {
        self.customizations
            .iter_mut()
            .find_map(|customization| customization.find_customization_mut(id))
    }

    /// Mutable access to an option anywhere in the tree, for editing its
    /// nested customizations.
    pub fn find_option_in_children_by_id_mut(&mut self, id: &OptionId) -> Option<&mut OfferOption> {
        self.customizations
            .iter_mut()
            .find_map(|customization| customization.find_option_mut(id))
    }

    /// The offer's own product followed by the product of every option in
    /// the tree. Not deduplicated.
    pub fn all_products(&self) -> Vec<&Product> {
        self.product
            .iter()
            .chain(self.all_options().into_iter().filter_map(OfferOption::product))
            .collect()
    }

    /// Lowest price a customer can pay: the offer price plus the cheapest
    /// valid selection of every top-level customization. Nested
    /// customizations are already folded into their option's minimal price.
    pub fn minimal_price(&self) -> Price {
        let selections: Price = self
            .customizations
            .iter()
            .map(Customization::minimal_price)
            .sum();
        self.price + selections
    }
}

fn ensure_price_positive(offer_id: OfferId, price: Price) -> DomainResult<()> {
    if !price.is_positive() {
        tracing::debug!(%offer_id, %price, "offer price must be positive");
        return Err(DomainError::OfferPriceZero);
    }
    Ok(())
}

impl AggregateRoot for Offer {
    type Id = OfferId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    /// Tree-wide checks, in order: unique customization ids, unique option
    /// ids, positive price.
    fn validate(&self) -> DomainResult<()> {
        let duplicated = duplicated_ids(self.all_customizations().into_iter().map(|c| *c.id()));
        if !duplicated.is_empty() {
            tracing::debug!(offer_id = %self.id, count = duplicated.len(), "duplicated customizations");
            return Err(DomainError::DuplicatedCustomization(duplicated));
        }

        let duplicated = duplicated_ids(self.all_options().into_iter().map(|o| *o.id()));
        if !duplicated.is_empty() {
            tracing::debug!(offer_id = %self.id, count = duplicated.len(), "duplicated options");
            return Err(DomainError::DuplicatedOption(duplicated));
        }

        ensure_price_positive(self.id, self.price)
    }
}

impl PartialEq for Offer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.description == other.description
            && self.product == other.product
            && self.price == other.price
            && self.status == other.status
            && self.customizations == other.customizations
    }
}

impl Eq for Offer {}

impl Hash for Offer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.description.hash(state);
        self.product.hash(state);
        self.price.hash(state);
        self.status.hash(state);
        self.customizations.hash(state);
    }
}

impl TryFrom<NewOffer> for Offer {
    type Error = DomainError;

    fn try_from(new: NewOffer) -> Result<Self, Self::Error> {
        Self::new(new)
    }
}

impl From<Offer> for NewOffer {
    fn from(o: Offer) -> Self {
        Self {
            id: o.id,
            name: o.name,
            description: o.description,
            product: o.product,
            price: o.price,
            status: o.status,
            customizations: o.customizations,
            media: o.media,
        }
    }
}
