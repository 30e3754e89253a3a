//! Selection bounds.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// How many units (for an option) or options (for a customization) may be
/// picked: `min_permitted ..= max_permitted`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "QuantityRecord")]
pub struct Quantity {
    min_permitted: u32,
    max_permitted: u32,
}

#[derive(Deserialize)]
struct QuantityRecord {
    min_permitted: u32,
    max_permitted: u32,
}

impl Quantity {
    pub fn new(min_permitted: u32, max_permitted: u32) -> DomainResult<Self> {
        if min_permitted > max_permitted {
            return Err(DomainError::validation(format!(
                "min_permitted ({min_permitted}) cannot exceed max_permitted ({max_permitted})"
            )));
        }
        Ok(Self {
            min_permitted,
            max_permitted,
        })
    }

    /// Nothing required, at most `max_permitted`.
    pub fn optional(max_permitted: u32) -> Self {
        Self {
            min_permitted: 0,
            max_permitted,
        }
    }

    /// Exactly `count` required.
    pub fn exactly(count: u32) -> Self {
        Self {
            min_permitted: count,
            max_permitted: count,
        }
    }

    pub fn min_permitted(&self) -> u32 {
        self.min_permitted
    }

    pub fn max_permitted(&self) -> u32 {
        self.max_permitted
    }
}

impl ValueObject for Quantity {}

impl TryFrom<QuantityRecord> for Quantity {
    type Error = DomainError;

    fn try_from(record: QuantityRecord) -> Result<Self, Self::Error> {
        Self::new(record.min_permitted, record.max_permitted)
    }
}
