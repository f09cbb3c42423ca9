use chrono::DateTime;
use tabled::Table;

use crate::{
    apple_music::{AppleMusicService, ApiServiceError},
    cli::{spinner, track_rows},
    error, info, success,
    types::PlaylistTableRow,
    warning,
};

pub async fn playlists(service: &AppleMusicService) {
    let pb = spinner("Fetching library playlists...");
    let result = service.get_playlists().await;
    pb.finish_and_clear();

    match result {
        Ok(mut playlists) => {
            playlists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

            let table_rows: Vec<PlaylistTableRow> = playlists
                .into_iter()
                .map(|p| PlaylistTableRow {
                    id: p.id,
                    name: p.name,
                    added: format_date(p.date_added.as_deref()),
                    editable: (if p.can_edit { "yes" } else { "no" }).to_string(),
                })
                .collect();

            println!("{}", Table::new(table_rows));
        }
        Err(ApiServiceError::NoData) => info!("Your library has no playlists."),
        Err(e) => error!("Failed to load playlists. Err: {}", e),
    }
}

pub async fn tracks(service: &AppleMusicService, playlist_id: &str) {
    let pb = spinner("Fetching playlist tracks...");
    let result = service.get_all_tracks_for_playlist(playlist_id).await;
    pb.finish_and_clear();

    match result {
        Ok(tracks) => println!("{}", Table::new(track_rows(tracks))),
        Err(ApiServiceError::NoData) => warning!("Playlist {} has no tracks", playlist_id),
        Err(e) => error!("Failed to load tracks for {}. Err: {}", playlist_id, e),
    }
}

pub async fn add(service: &AppleMusicService, playlist_id: &str, track_id: &str) {
    info!("Adding {} to playlist {}", track_id, playlist_id);

    match service.add_to_playlist(playlist_id, track_id).await {
        Ok(_) => success!("Track added to playlist {}", playlist_id),
        Err(e) => error!("Failed to add track to playlist. Err: {}", e),
    }
}

fn format_date(date: Option<&str>) -> String {
    match date {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|_| raw.to_string()),
        None => "-".to_string(),
    }
}
