use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    types::{ArtistAttributes, ArtistRelationships, Resource},
    utils,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    pub id: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

/// An artist as known to another streaming provider, carrying a list of
/// images ordered from largest to smallest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<ArtistImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistImage {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Artist {
    pub fn new(name: impl Into<String>, id: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            image_url: image_url.into(),
        }
    }

    /// Builds an artist from a catalog artist resource.
    ///
    /// The image is taken from the artwork of the first related album, if the
    /// resource was fetched with `include=albums`. Returns `None` when the
    /// resource carries no attributes.
    pub fn from_resource(resource: &Resource<ArtistAttributes, ArtistRelationships>) -> Option<Self> {
        let attributes = resource.attributes.as_ref()?;

        let image_url = resource
            .relationships
            .as_ref()
            .and_then(|rel| rel.albums.data.as_ref())
            .and_then(|albums| albums.first())
            .and_then(|album| album.attributes.as_ref())
            .and_then(|album| album.artwork.as_ref())
            .map(|artwork| utils::resolve_artwork_url(&artwork.url))
            .unwrap_or_default();

        Some(Self {
            name: attributes.name.clone(),
            id: resource.id.clone(),
            image_url,
        })
    }

    /// Builds an artist from its flat map representation. All of `name`, `id`
    /// and `imageURL` must be present as strings.
    pub fn from_map(data: &HashMap<String, Value>) -> Option<Self> {
        let name = data.get("name")?.as_str()?;
        let id = data.get("id")?.as_str()?;
        let image_url = data.get("imageURL")?.as_str()?;

        Some(Self::new(name, id, image_url))
    }

    /// Builds an artist from another provider's profile, using its first
    /// (largest) image. The image url is empty when the profile has none.
    pub fn from_profile(profile: &ArtistProfile) -> Self {
        Self {
            name: profile.name.clone(),
            id: profile.id.clone(),
            image_url: profile
                .images
                .first()
                .map(|image| image.url.clone())
                .unwrap_or_default(),
        }
    }

    /// Flat string map with the keys [`Artist::from_map`] reads back.
    ///
    /// # Example
    ///
    /// ```
    /// let artist = Artist::new("Tame Impala", "46813393", "");
    /// assert_eq!(artist.json_representation()["imageURL"], "");
    /// ```
    pub fn json_representation(&self) -> HashMap<String, String> {
        HashMap::from([
            ("name".to_string(), self.name.clone()),
            ("id".to_string(), self.id.clone()),
            ("imageURL".to_string(), self.image_url.clone()),
        ])
    }
}
