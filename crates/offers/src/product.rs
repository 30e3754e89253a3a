//! Product embedded in offers and options.

use serde::{Deserialize, Serialize};

use catalog_core::{Description, Entity, Media, Name, ProductId};

/// Catalog item an offer or option sells.
///
/// Embedded by value: the offer tree keeps its own copy, and whether the id
/// still resolves in the product catalog is checked by the use-case layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: Name,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<Description>,
    #[serde(default)]
    media: Vec<Media>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: Name,
        description: Option<Description>,
        media: Vec<Media>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            media,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn media(&self) -> &[Media] {
        &self.media
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
