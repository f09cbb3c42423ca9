use reqwest::Method;

use crate::{
    apple_music::{AppleMusicService, TokenScope, error::ApiServiceError, fetch::fetch_resources},
    models::{Artist, Track},
    types::{ArtistAttributes, ArtistRelationships, ResponseRoot, SongAttributes},
    utils,
};

impl AppleMusicService {
    /// Looks up a catalog song by its ISRC in the given storefront, falling
    /// back to the service storefront.
    ///
    /// Several catalog songs can share an ISRC; the first match wins.
    pub async fn search_by_isrc(
        &self,
        isrc: &str,
        country_code: Option<&str>,
    ) -> Result<Track, ApiServiceError> {
        let storefront = country_code.unwrap_or(self.storefront());
        let request = self.request(
            Method::GET,
            TokenScope::Catalog,
            &["catalog", storefront, "songs"],
            &[("filter[isrc]", isrc)],
        )?;

        let root: ResponseRoot<SongAttributes> =
            fetch_resources(self.transport(), request).await?;
        let songs = root.into_non_empty().ok_or(ApiServiceError::NoData)?;

        let song = &songs[0];
        let attributes = song.attributes.as_ref().ok_or(ApiServiceError::NoData)?;

        let mut track = Track::from_attributes(attributes, song.id.as_str());
        if track.isrc.is_empty() {
            track.isrc = isrc.to_string();
        }
        Ok(track)
    }

    /// Fetches a single catalog song by id.
    pub async fn get_track_info(&self, id: &str) -> Result<Track, ApiServiceError> {
        let request = self.request(
            Method::GET,
            TokenScope::Catalog,
            &["catalog", self.storefront(), "songs", id],
            &[],
        )?;

        let root: ResponseRoot<SongAttributes> =
            fetch_resources(self.transport(), request).await?;

        root.data
            .as_ref()
            .and_then(|songs| songs.first())
            .and_then(|song| Track::from_resource(song, id))
            .ok_or(ApiServiceError::Api)
    }

    /// Fetches a catalog artist, with its albums so an image can be picked.
    pub async fn get_artist(&self, id: &str) -> Result<Artist, ApiServiceError> {
        let request = self.request(
            Method::GET,
            TokenScope::Catalog,
            &["catalog", self.storefront(), "artists", id],
            &[("include", "albums")],
        )?;

        let root: ResponseRoot<ArtistAttributes, ArtistRelationships> =
            fetch_resources(self.transport(), request).await?;
        let artists = root.into_non_empty().ok_or(ApiServiceError::NoData)?;

        Artist::from_resource(&artists[0]).ok_or(ApiServiceError::Api)
    }

    /// Batch lookup of catalog songs by id.
    pub(crate) async fn get_catalog_songs(&self, ids: &[String]) -> Result<Vec<Track>, ApiServiceError> {
        let joined = utils::join_ids(ids);
        let request = self.request(
            Method::GET,
            TokenScope::Catalog,
            &["catalog", self.storefront(), "songs"],
            &[("ids", joined.as_str())],
        )?;

        let root: ResponseRoot<SongAttributes> =
            fetch_resources(self.transport(), request).await?;
        let songs = root.into_non_empty().ok_or(ApiServiceError::NoData)?;

        Ok(songs
            .iter()
            .filter_map(|song| Track::from_resource(song, song.id.as_str()))
            .collect())
    }
}
