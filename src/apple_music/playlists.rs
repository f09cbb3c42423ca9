use std::collections::HashMap;

use log::debug;
use reqwest::Method;

use crate::{
    apple_music::{
        AppleMusicService, TokenScope,
        error::ApiServiceError,
        fetch::{fetch_resources, send_request_no_payload},
    },
    models::{Playlist, Track},
    types::{
        AddTracksRequest, LibrarySongAttributes, PlaylistAttributes, ResponseRoot, TrackReference,
    },
    utils,
};

/// Page size for library playlist listings. Only the first page is fetched.
pub const PLAYLIST_PAGE_LIMIT: &str = "100";

impl AppleMusicService {
    /// Lists the playlists in the user's library.
    pub async fn get_playlists(&self) -> Result<Vec<Playlist>, ApiServiceError> {
        let request = self.request(
            Method::GET,
            TokenScope::Library,
            &["me", "library", "playlists"],
            &[("limit", PLAYLIST_PAGE_LIMIT)],
        )?;

        let root: ResponseRoot<PlaylistAttributes> =
            fetch_resources(self.transport(), request).await?;
        let resources = root.into_non_empty().ok_or(ApiServiceError::NoData)?;

        Ok(resources.iter().filter_map(Playlist::from_resource).collect())
    }

    /// Fetches the tracks of a library playlist as full catalog songs.
    ///
    /// Library songs only carry library ids, so this takes two requests: one
    /// for the playlist's tracks and one batched catalog lookup for all of
    /// them.
    pub async fn get_all_tracks_for_playlist(
        &self,
        playlist_id: &str,
    ) -> Result<Vec<Track>, ApiServiceError> {
        let request = self.request(
            Method::GET,
            TokenScope::Library,
            &["me", "library", "playlists", playlist_id, "tracks"],
            &[],
        )?;

        let root: ResponseRoot<LibrarySongAttributes> =
            fetch_resources(self.transport(), request).await?;
        let songs = root.into_non_empty().ok_or(ApiServiceError::NoData)?;

        let ids: Vec<String> = songs
            .iter()
            .map(|song| utils::catalog_id_from_library_id(&song.id))
            .collect();
        debug!("Playlist {} resolved to {} catalog ids", playlist_id, ids.len());

        self.get_catalog_songs(&ids).await
    }

    /// Appends a catalog song to a library playlist.
    ///
    /// Returns an empty map on success.
    pub async fn add_to_playlist(
        &self,
        playlist_id: &str,
        track_id: &str,
    ) -> Result<HashMap<String, String>, ApiServiceError> {
        let request = self.request(
            Method::POST,
            TokenScope::Library,
            &["me", "library", "playlists", playlist_id, "tracks"],
            &[],
        )?;

        let body = AddTracksRequest {
            data: vec![TrackReference {
                id: track_id.to_string(),
                kind: "songs".to_string(),
            }],
        };
        let body = serde_json::to_vec(&body).map_err(|_| ApiServiceError::InvalidCompiledUrl)?;

        send_request_no_payload(self.transport(), request.json_body(body)).await?;
        Ok(HashMap::new())
    }
}
