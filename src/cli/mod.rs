//! # CLI Module
//!
//! Command implementations for the `socially` binary. Each command builds
//! on [`crate::apple_music::AppleMusicService`], shows a spinner while the
//! request is in flight and prints the result as a table or a status line.
//!
//! ## Commands
//!
//! - [`playlists`] - Lists the playlists in the user's library
//! - [`tracks`] - Lists the catalog tracks of a library playlist
//! - [`isrc`] - Looks up a catalog song by ISRC
//! - [`track`] - Looks up a catalog song by id
//! - [`artist`] - Looks up a catalog artist by id
//! - [`add`] - Adds a catalog song to a library playlist
//! - [`play`] - Plays a catalog song
//!
//! Library commands need both `APPLE_MUSIC_DEVELOPER_TOKEN` and
//! `APPLE_MUSIC_USER_TOKEN`; catalog commands only the developer token.

mod catalog;
mod play;
mod playlists;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    apple_music::AppleMusicService,
    config,
    models::Track,
    types::TrackTableRow,
};

pub use catalog::{artist, isrc, track};
pub use play::play;
pub use playlists::{add, playlists, tracks};

/// Builds a service from the loaded configuration.
pub fn service() -> AppleMusicService {
    let service = AppleMusicService::new()
        .with_base_url(config::api_url())
        .with_storefront(config::storefront());

    match config::developer_token() {
        Some(token) => service.configure(token, config::user_token()),
        None => log::debug!("{} is not set", config::DEVELOPER_TOKEN_VAR),
    }

    service
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

fn track_rows(tracks: Vec<Track>) -> Vec<TrackTableRow> {
    tracks
        .into_iter()
        .map(|t| TrackTableRow {
            name: t.name,
            artist: t.artist,
            album: t.album,
            isrc: t.isrc,
            context: t.context,
        })
        .collect()
}
