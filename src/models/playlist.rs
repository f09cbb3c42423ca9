use serde::{Deserialize, Serialize};

use crate::{
    types::{PlaylistAttributes, Resource},
    utils,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: String,
    pub can_edit: bool,
    pub is_public: bool,
    pub date_added: Option<String>,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

impl Playlist {
    pub fn from_resource(resource: &Resource<PlaylistAttributes>) -> Option<Self> {
        let attributes = resource.attributes.as_ref()?;

        // library playlists expose the long description as `standard`
        let description = attributes
            .description
            .as_ref()
            .and_then(|d| d.standard.clone().or_else(|| d.short.clone()))
            .unwrap_or_default();

        Some(Self {
            id: resource.id.clone(),
            name: attributes.name.clone(),
            description,
            can_edit: attributes.can_edit,
            is_public: attributes.is_public,
            date_added: attributes.date_added.clone(),
            image_url: attributes
                .artwork
                .as_ref()
                .map(|artwork| utils::resolve_artwork_url(&artwork.url))
                .unwrap_or_default(),
        })
    }
}
