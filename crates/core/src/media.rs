//! Media attached to catalog nodes.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

/// A picture or clip attached to a product, option or offer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MediaRecord")]
pub struct Media {
    url: String,
    kind: MediaKind,
}

#[derive(Deserialize)]
struct MediaRecord {
    url: String,
    #[serde(default)]
    kind: MediaKind,
}

impl Media {
    pub fn new(url: impl Into<String>, kind: MediaKind) -> DomainResult<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(DomainError::validation("media url cannot be empty"));
        }
        Ok(Self { url, kind })
    }

    pub fn image(url: impl Into<String>) -> DomainResult<Self> {
        Self::new(url, MediaKind::Image)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }
}

impl ValueObject for Media {}

impl TryFrom<MediaRecord> for Media {
    type Error = DomainError;

    fn try_from(record: MediaRecord) -> Result<Self, Self::Error> {
        Self::new(record.url, record.kind)
    }
}
