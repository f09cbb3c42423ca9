use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Placeholder for resources that carry no relationships.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoRelationships {}

/// The envelope every Apple Music list and detail response is wrapped in.
///
/// `data` is optional because the API omits it entirely for some empty
/// results instead of returning an empty array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRoot<A, R = NoRelationships> {
    pub data: Option<Vec<Resource<A, R>>>,
}

impl<A, R> ResponseRoot<A, R> {
    /// Returns the resources only when at least one is present.
    pub fn into_non_empty(self) -> Option<Vec<Resource<A, R>>> {
        self.data.filter(|data| !data.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource<A, R = NoRelationships> {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub attributes: Option<A>,
    pub relationships: Option<R>,
}

/// Templated artwork as returned by the API, e.g.
/// `https://is1-ssl.mzstatic.com/.../{w}x{h}bb.jpg`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongAttributes {
    pub name: String,
    pub album_name: String,
    pub artist_name: String,
    pub isrc: Option<String>,
    pub artwork: Artwork,
    pub duration_in_millis: Option<u64>,
    pub url: Option<String>,
}

/// A song as it lives in the user's library. Only the id is needed to look
/// up the matching catalog song.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySongAttributes {
    pub name: Option<String>,
    pub album_name: Option<String>,
    pub artist_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistDescription {
    pub standard: Option<String>,
    pub short: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistAttributes {
    pub name: String,
    pub description: Option<PlaylistDescription>,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub is_public: bool,
    pub date_added: Option<String>,
    pub artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistAttributes {
    pub name: String,
    #[serde(default)]
    pub genre_names: Vec<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumAttributes {
    pub name: Option<String>,
    pub artist_name: Option<String>,
    pub artwork: Option<Artwork>,
}

/// A to-many relationship, itself shaped like an envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship<A> {
    pub data: Option<Vec<Resource<A>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRelationships {
    pub albums: Relationship<AlbumAttributes>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddTracksRequest {
    pub data: Vec<TrackReference>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackReference {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub id: String,
    pub name: String,
    pub added: String,
    pub editable: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artist: String,
    pub album: String,
    pub isrc: String,
    pub context: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub id: String,
    pub name: String,
    pub image: String,
}
