use tabled::Table;

use crate::{
    apple_music::{AppleMusicService, ApiServiceError},
    cli::{spinner, track_rows},
    error,
    types::ArtistTableRow,
    warning,
};

pub async fn isrc(service: &AppleMusicService, isrc: &str, country: Option<&str>) {
    let pb = spinner("Searching catalog...");
    let result = service.search_by_isrc(isrc, country).await;
    pb.finish_and_clear();

    match result {
        Ok(track) => println!("{}", Table::new(track_rows(vec![track]))),
        Err(ApiServiceError::NoData) => warning!("No catalog song found for ISRC {}", isrc),
        Err(e) => error!("Failed to search for {}. Err: {}", isrc, e),
    }
}

pub async fn track(service: &AppleMusicService, id: &str) {
    let pb = spinner("Fetching track...");
    let result = service.get_track_info(id).await;
    pb.finish_and_clear();

    match result {
        Ok(track) => {
            let image_url = track.image_url.clone();
            println!("{}", Table::new(track_rows(vec![track])));
            if !image_url.is_empty() {
                println!("{}", image_url);
            }
        }
        Err(e) => error!("Failed to load track {}. Err: {}", id, e),
    }
}

pub async fn artist(service: &AppleMusicService, id: &str) {
    let pb = spinner("Fetching artist...");
    let result = service.get_artist(id).await;
    pb.finish_and_clear();

    match result {
        Ok(artist) => {
            let row = ArtistTableRow {
                id: artist.id,
                name: artist.name,
                image: artist.image_url,
            };
            println!("{}", Table::new(vec![row]));
        }
        Err(ApiServiceError::NoData) => warning!("No catalog artist with id {}", id),
        Err(e) => error!("Failed to load artist {}. Err: {}", id, e),
    }
}
