//! Customization: a bounded "pick N options" group.

use serde::{Deserialize, Serialize};

use catalog_core::entity::position_of;
use catalog_core::{
    CustomizationId, Description, DomainError, DomainResult, Entity, Name, OptionId, Price,
    Quantity, Status,
};

use crate::option::OfferOption;

/// Attributes of a customization, before its invariants are checked.
///
/// Also the load shape: every deserialized `Customization` goes through
/// `Customization::new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomization {
    #[serde(default)]
    pub id: CustomizationId,
    pub name: Name,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    pub quantity: Quantity,
    #[serde(default)]
    pub status: Status,
    pub options: Vec<OfferOption>,
}

/// Named selection group owning a non-empty, ordered list of options.
///
/// Invariant: the number of `Available` options is never below
/// `quantity.min_permitted()`. Every mutator re-checks it before returning and
/// leaves the customization untouched when it fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NewCustomization")]
pub struct Customization {
    id: CustomizationId,
    name: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Description>,
    quantity: Quantity,
    status: Status,
    options: Vec<OfferOption>,
}

impl Customization {
    pub fn new(new: NewCustomization) -> DomainResult<Self> {
        if new.options.is_empty() {
            tracing::debug!(customization_id = %new.id, "rejected customization without options");
            return Err(DomainError::CustomizationOptionsEmpty(new.id));
        }
        check_min_available(new.id, &new.quantity, &new.options)?;

        Ok(Self {
            id: new.id,
            name: new.name,
            description: new.description,
            quantity: new.quantity,
            status: new.status,
            options: new.options,
        })
    }

    pub fn id_typed(&self) -> CustomizationId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn options(&self) -> &[OfferOption] {
        &self.options
    }

    pub fn option(&self, id: &OptionId) -> Option<&OfferOption> {
        self.options.iter().find(|o| o.id() == id)
    }

    /// Replace the selection bounds; fails if the current options can no
    /// longer satisfy the new minimum.
    pub fn set_quantity(&mut self, quantity: Quantity) -> DomainResult<()> {
        check_min_available(self.id, &quantity, &self.options)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Append a new direct option. Only direct children are checked for id
    /// collisions; tree-wide uniqueness is `Offer::validate`'s job.
    pub fn add_option(&mut self, option: OfferOption) -> DomainResult<()> {
        let option_id = *option.id();
        if position_of(&self.options, &option_id).is_some() {
            tracing::debug!(customization_id = %self.id, %option_id, "option already exists");
            return Err(DomainError::OptionAlreadyExists(option_id));
        }

        self.options.push(option);
        if let Err(err) = self.ensure_min_available() {
            self.options.pop();
            return Err(err);
        }
        Ok(())
    }

    /// Replace the direct option sharing `option`'s id, keeping its position.
    pub fn update_option(&mut self, option: OfferOption) -> DomainResult<()> {
        let option_id = *option.id();
        let Some(idx) = position_of(&self.options, &option_id) else {
            tracing::debug!(customization_id = %self.id, %option_id, "option not found");
            return Err(DomainError::OptionNotFound(option_id));
        };

        let previous = std::mem::replace(&mut self.options[idx], option);
        if let Err(err) = self.ensure_min_available() {
            self.options[idx] = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Remove the direct option with `id`. Missing ids are a no-op.
    pub fn remove_option(&mut self, id: &OptionId) -> DomainResult<()> {
        let Some(idx) = position_of(&self.options, id) else {
            return Ok(());
        };

        let removed = self.options.remove(idx);
        if let Err(err) = self.ensure_min_available() {
            self.options.insert(idx, removed);
            return Err(err);
        }
        Ok(())
    }

    /// Cheapest total for this group: the `min_permitted` cheapest options,
    /// each at its own minimal price.
    pub fn minimal_price(&self) -> Price {
        let mut prices: Vec<Price> = self.options.iter().map(OfferOption::minimal_price).collect();
        prices.sort_unstable();
        prices
            .into_iter()
            .take(self.quantity.min_permitted() as usize)
            .sum()
    }

    /// Every option below this customization, at any depth (pre-order).
    pub fn all_options_in_children(&self) -> Vec<&OfferOption> {
        let mut all = Vec::new();
        for option in &self.options {
            all.push(option);
            all.extend(option.all_options_in_children());
        }
        all
    }

    /// Every customization nested below this one, at any depth. Does not
    /// include `self`.
    pub fn all_customizations_in_children(&self) -> Vec<&Customization> {
        self.options
            .iter()
            .flat_map(OfferOption::all_customizations_in_children)
            .collect()
    }

    pub(crate) fn find_customization_mut(
        &mut self,
        id: &CustomizationId,
    ) -> Option<&mut Customization> {
        if self.id == *id {
            return Some(self);
        }
        self.options
            .iter_mut()
            .find_map(|option| option.find_customization_mut(id))
    }

    pub(crate) fn find_option_mut(&mut self, id: &OptionId) -> Option<&mut OfferOption> {
        self.options
            .iter_mut()
            .find_map(|option| option.find_option_mut(id))
    }

    fn ensure_min_available(&self) -> DomainResult<()> {
        check_min_available(self.id, &self.quantity, &self.options)
    }
}

fn check_min_available(
    customization_id: CustomizationId,
    quantity: &Quantity,
    options: &[OfferOption],
) -> DomainResult<()> {
    let available = options.iter().filter(|o| o.status().is_available()).count();
    let min_permitted = quantity.min_permitted();
    if available < min_permitted as usize {
        tracing::debug!(
            %customization_id,
            min_permitted,
            available,
            "not enough available options"
        );
        return Err(DomainError::CustomizationMinPermitted {
            customization_id,
            min_permitted,
            available,
        });
    }
    Ok(())
}

impl Entity for Customization {
    type Id = CustomizationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TryFrom<NewCustomization> for Customization {
    type Error = DomainError;

    fn try_from(new: NewCustomization) -> Result<Self, Self::Error> {
        Self::new(new)
    }
}

impl From<Customization> for NewCustomization {
    fn from(c: Customization) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            quantity: c.quantity,
            status: c.status,
            options: c.options,
        }
    }
}
