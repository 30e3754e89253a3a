//! `catalog-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! typed identifiers, self-validating value types and the error model shared
//! by every catalog module.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod media;
pub mod price;
pub mod quantity;
pub mod status;
pub mod text;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CustomizationId, OfferId, OptionId, ProductId};
pub use media::{Media, MediaKind};
pub use price::Price;
pub use quantity::Quantity;
pub use status::Status;
pub use text::{Description, Name};
pub use value_object::ValueObject;
