//! Offers domain module.
//!
//! An offer owns a tree of customizations and options. This crate holds the
//! tree, its invariants, the minimal-price computation and id-based search at
//! any depth, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage).

pub mod customization;
pub mod offer;
pub mod option;
pub mod product;

#[cfg(test)]
pub(crate) mod fixtures;

#[cfg(test)]
mod properties;

pub use customization::{Customization, NewCustomization};
pub use offer::{NewOffer, Offer};
pub use option::{NewOption, OfferOption};
pub use product::Product;
