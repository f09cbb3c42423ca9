use async_trait::async_trait;
use log::{debug, warn};
use tokio::sync::Mutex;

use crate::apple_music::{AppleMusicService, error::ApiServiceError};

/// A device-side player that can be handed catalog ids.
///
/// Neither call reports back whether playback actually started.
#[async_trait]
pub trait MusicPlayer: Send + Sync {
    async fn set_queue(&self, store_ids: Vec<String>);
    async fn play(&self);
}

/// Plays the head of the queue in the Apple Music web player by opening it
/// in the default browser.
#[derive(Debug)]
pub struct BrowserPlayer {
    storefront: String,
    queue: Mutex<Vec<String>>,
}

impl BrowserPlayer {
    /// Creates a player with an empty queue that opens songs in `storefront`.
    pub fn new(storefront: impl Into<String>) -> Self {
        Self {
            storefront: storefront.into(),
            queue: Mutex::new(Vec::new()),
        }
    }

    pub fn storefront(&self) -> &str {
        &self.storefront
    }

    /// Web player url of a catalog song, e.g.
    /// `https://music.apple.com/us/song/1440818839`.
    pub fn song_url(&self, store_id: &str) -> String {
        format!(
            "https://music.apple.com/{storefront}/song/{id}",
            storefront = self.storefront,
            id = store_id
        )
    }
}

#[async_trait]
impl MusicPlayer for BrowserPlayer {
    async fn set_queue(&self, store_ids: Vec<String>) {
        *self.queue.lock().await = store_ids;
    }

    async fn play(&self) {
        // Opening the browser blocks, so the lock is released first
        let head = self.queue.lock().await.first().cloned();
        let Some(store_id) = head else {
            debug!("Play requested with an empty queue");
            return;
        };

        let url = self.song_url(&store_id);
        if let Err(e) = webbrowser::open(&url) {
            warn!("Failed to open {} in the browser: {}", url, e);
        }
    }
}

impl AppleMusicService {
    /// Queues `context` on the player and starts playback.
    ///
    /// Reports success as soon as the player has been told to play.
    pub async fn trigger_playback(&self, context: &str) -> Result<(), ApiServiceError> {
        self.player.set_queue(vec![context.to_string()]).await;
        self.player.play().await;
        Ok(())
    }
}
