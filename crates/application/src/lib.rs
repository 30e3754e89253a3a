//! Use-case layer around the offer aggregate.
//!
//! Each operation loads one whole offer, applies exactly one change, validates
//! the tree, checks that every referenced product still exists, and stores the
//! offer back. Storage and the product catalog are reached through the ports
//! in [`ports`].

pub mod error;
pub mod in_memory;
pub mod ports;
pub mod service;

pub use error::{ApplicationError, ApplicationResult};
pub use in_memory::{InMemoryOfferRepository, InMemoryProductDirectory};
pub use ports::{OfferRepository, ProductDirectory, RepositoryError};
pub use service::OfferService;
