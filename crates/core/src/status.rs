//! Availability status.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Availability of a catalog node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Available,
    Unavailable,
}

impl Status {
    pub fn is_available(self) -> bool {
        self == Status::Available
    }
}

impl ValueObject for Status {}
