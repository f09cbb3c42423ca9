use crate::{apple_music::AppleMusicService, error, success};

pub async fn play(service: &AppleMusicService, context: &str) {
    match service.trigger_playback(context).await {
        Ok(()) => success!("Playback started for {}", context),
        Err(e) => error!("Failed to start playback. Err: {}", e),
    }
}
