//! Tree builders shared by the unit tests.

use rust_decimal::Decimal;

use catalog_core::{CustomizationId, Name, OfferId, OptionId, Price, ProductId, Quantity, Status};

use crate::{Customization, NewCustomization, NewOffer, NewOption, Offer, OfferOption, Product};

pub(crate) fn price(value: Decimal) -> Price {
    Price::new(value).unwrap()
}

pub(crate) fn product(name: &str) -> Product {
    Product::new(ProductId::new(), Name::new(name).unwrap(), None, vec![])
}

/// Available option with a fresh id and no nested customizations.
pub(crate) fn option(value: Decimal, min: u32, max: u32) -> OfferOption {
    OfferOption::new(NewOption {
        id: OptionId::new(),
        name: Name::new("Option").unwrap(),
        description: None,
        product: None,
        quantity: Quantity::new(min, max).unwrap(),
        status: Status::Available,
        price: price(value),
        customizations: vec![],
        media: vec![],
    })
}

pub(crate) fn customization(min: u32, max: u32, options: Vec<OfferOption>) -> Customization {
    Customization::new(NewCustomization {
        id: CustomizationId::new(),
        name: Name::new("Customization").unwrap(),
        description: None,
        quantity: Quantity::new(min, max).unwrap(),
        status: Status::Available,
        options,
    })
    .unwrap()
}

pub(crate) fn offer(value: Decimal, customizations: Vec<Customization>) -> Offer {
    Offer::new(NewOffer {
        id: OfferId::new(),
        name: Name::new("Offer").unwrap(),
        description: None,
        product: None,
        price: price(value),
        status: Status::Available,
        customizations,
        media: vec![],
    })
    .unwrap()
}
