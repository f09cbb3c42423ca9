use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    types::{Resource, SongAttributes},
    utils,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    pub album: String,
    pub artist: String,
    pub name: String,
    pub isrc: String,
    /// Opaque catalog identifier used for later lookups and playback.
    pub context: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

impl Track {
    /// Projects a catalog song into a track, resolving its artwork template.
    ///
    /// `context` is supplied by the caller since it is not always the
    /// resource id (e.g. when the lookup key was given by the user).
    /// Returns `None` when the resource carries no attributes.
    pub fn from_resource(resource: &Resource<SongAttributes>, context: impl Into<String>) -> Option<Self> {
        let attributes = resource.attributes.as_ref()?;
        Some(Self::from_attributes(attributes, context))
    }

    /// Builds a track from song attributes alone, for responses where the
    /// resource id is not at hand. A missing ISRC becomes an empty string.
    pub fn from_attributes(attributes: &SongAttributes, context: impl Into<String>) -> Self {
        Self {
            album: attributes.album_name.clone(),
            artist: attributes.artist_name.clone(),
            name: attributes.name.clone(),
            isrc: attributes.isrc.clone().unwrap_or_default(),
            context: context.into(),
            image_url: utils::resolve_artwork_url(&attributes.artwork.url),
        }
    }

    /// Builds a track from its flat map representation. Every key written by
    /// [`Track::json_representation`] must be present as a string.
    pub fn from_map(data: &HashMap<String, Value>) -> Option<Self> {
        let field = |key: &str| data.get(key).and_then(Value::as_str).map(str::to_string);

        Some(Self {
            album: field("album")?,
            artist: field("artist")?,
            name: field("name")?,
            isrc: field("isrc")?,
            context: field("context")?,
            image_url: field("imageURL")?,
        })
    }

    /// Flat string map with the keys [`Track::from_map`] reads back.
    pub fn json_representation(&self) -> HashMap<String, String> {
        HashMap::from([
            ("album".to_string(), self.album.clone()),
            ("artist".to_string(), self.artist.clone()),
            ("name".to_string(), self.name.clone()),
            ("isrc".to_string(), self.isrc.clone()),
            ("context".to_string(), self.context.clone()),
            ("imageURL".to_string(), self.image_url.clone()),
        ])
    }
}
