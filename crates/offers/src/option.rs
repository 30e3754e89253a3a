//! Option: a selectable item inside a customization.

use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use catalog_core::entity::position_of;
use catalog_core::{
    CustomizationId, Description, DomainError, DomainResult, Entity, Media, Name, OptionId, Price,
    Quantity, Status,
};

use crate::customization::Customization;
use crate::product::Product;

/// Attributes of an option; also its load shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOption {
    #[serde(default)]
    pub id: OptionId,
    pub name: Name,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    pub quantity: Quantity,
    #[serde(default)]
    pub status: Status,
    pub price: Price,
    #[serde(default)]
    pub customizations: Vec<Customization>,
    #[serde(default)]
    pub media: Vec<Media>,
}

/// Selectable item of a customization. May own nested customizations, which
/// is what makes an offer an arbitrarily deep tree.
///
/// Everything except the nested customizations is fixed at construction, so
/// holding `&mut OfferOption` cannot change the availability count its parent
/// customization guards. To change other attributes, rebuild through
/// [`NewOption`] (or the `with_*` helpers) and hand the result to
/// `Customization::update_option`.
///
/// Equality and hashing cover id, name, description, product, price, status
/// and nested customizations. `media` and `quantity` do not take part.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "NewOption")]
pub struct OfferOption {
    id: OptionId,
    name: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Description>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product: Option<Product>,
    quantity: Quantity,
    status: Status,
    price: Price,
    customizations: Vec<Customization>,
    media: Vec<Media>,
}

impl OfferOption {
    pub fn new(new: NewOption) -> Self {
        Self {
            id: new.id,
            name: new.name,
            description: new.description,
            product: new.product,
            quantity: new.quantity,
            status: new.status,
            price: new.price,
            customizations: new.customizations,
            media: new.media,
        }
    }

    pub fn id_typed(&self) -> OptionId {
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

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn customizations(&self) -> &[Customization] {
        &self.customizations
    }

    pub fn media(&self) -> &[Media] {
        &self.media
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price = price;
        self
    }

    pub fn with_product(mut self, product: Option<Product>) -> Self {
        self.product = product;
        self
    }

    pub fn with_customizations(mut self, customizations: Vec<Customization>) -> Self {
        self.customizations = customizations;
        self
    }

    pub fn with_media(mut self, media: Vec<Media>) -> Self {
        self.media = media;
        self
    }

    pub fn add_customization(&mut self, customization: Customization) -> DomainResult<()> {
        let customization_id = *customization.id();
        if position_of(&self.customizations, &customization_id).is_some() {
            tracing::debug!(option_id = %self.id, %customization_id, "customization already exists");
            return Err(DomainError::CustomizationAlreadyExists(customization_id));
        }
        self.customizations.push(customization);
        Ok(())
    }

    pub fn update_customization(&mut self, customization: Customization) -> DomainResult<()> {
        let customization_id = *customization.id();
        let Some(idx) = position_of(&self.customizations, &customization_id) else {
            tracing::debug!(option_id = %self.id, %customization_id, "customization not found");
            return Err(DomainError::CustomizationNotFound(customization_id));
        };
        self.customizations[idx] = customization;
        Ok(())
    }

    /// Missing ids are a no-op.
    pub fn remove_customization(&mut self, id: &CustomizationId) {
        self.customizations.retain(|c| c.id() != id);
    }

    /// Own price, counted at least once even when the option is optional,
    /// plus the minimal price of every nested customization.
    pub fn minimal_price(&self) -> Price {
        let units = self.quantity.min_permitted().max(1);
        let nested: Price = self
            .customizations
            .iter()
            .map(Customization::minimal_price)
            .sum();
        self.price.times(units) + nested
    }

    /// Every customization nested below this option, at any depth (pre-order).
    pub fn all_customizations_in_children(&self) -> Vec<&Customization> {
        let mut all = Vec::new();
        for customization in &self.customizations {
            all.push(customization);
            all.extend(customization.all_customizations_in_children());
        }
        all
    }

    /// Every option nested below this option, at any depth. Does not include
    /// `self`.
    pub fn all_options_in_children(&self) -> Vec<&OfferOption> {
        self.customizations
            .iter()
            .flat_map(Customization::all_options_in_children)
            .collect()
    }

    pub(crate) fn find_customization_mut(
        &mut self,
        id: &CustomizationId,
    ) -> Option<&mut Customization> {
        self.customizations
            .iter_mut()
            .find_map(|customization| customization.find_customization_mut(id))
    }

    pub(crate) fn find_option_mut(&mut self, id: &OptionId) -> Option<&mut OfferOption> {
        if self.id == *id {
            return Some(self);
        }
        self.customizations
            .iter_mut()
            .find_map(|customization| customization.find_option_mut(id))
    }
}

impl Entity for OfferOption {
    type Id = OptionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for OfferOption {
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

impl Eq for OfferOption {}

impl Hash for OfferOption {
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

impl From<NewOption> for OfferOption {
    fn from(new: NewOption) -> Self {
        Self::new(new)
    }
}

impl From<OfferOption> for NewOption {
    fn from(o: OfferOption) -> Self {
        Self {
            id: o.id,
            name: o.name,
            description: o.description,
            product: o.product,
            quantity: o.quantity,
            status: o.status,
            price: o.price,
            customizations: o.customizations,
            media: o.media,
        }
    }
}
