#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use socially::apple_music::{
    ApiRequest, ApiResponse, AppleMusicService, MusicPlayer, Transport, TransportError,
};

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct SpyTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl SpyTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(ApiResponse {
            status,
            body: body.as_bytes().to_vec(),
        }));
    }

    pub fn fail(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError(message.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for SpyTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no response queued".to_string())))
    }
}

/// A player that ignores everything.
pub struct SilentPlayer;

#[async_trait]
impl MusicPlayer for SilentPlayer {
    async fn set_queue(&self, _store_ids: Vec<String>) {}
    async fn play(&self) {}
}

pub fn unconfigured_service(spy: &Arc<SpyTransport>) -> AppleMusicService {
    AppleMusicService::with_collaborators(spy.clone(), Arc::new(SilentPlayer))
}

pub fn catalog_service(spy: &Arc<SpyTransport>) -> AppleMusicService {
    let service = unconfigured_service(spy);
    service.configure("dev-token", None);
    service
}

pub fn library_service(spy: &Arc<SpyTransport>) -> AppleMusicService {
    let service = unconfigured_service(spy);
    service.configure("dev-token", Some("user-token".to_string()));
    service
}

pub fn query_value(request: &ApiRequest, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

pub fn song_json(id: &str, name: &str, isrc: &str) -> String {
    format!(
        r#"{{
            "id": "{id}",
            "type": "songs",
            "attributes": {{
                "name": "{name}",
                "albumName": "Currents",
                "artistName": "Tame Impala",
                "isrc": "{isrc}",
                "durationInMillis": 467586,
                "artwork": {{
                    "url": "https://is1-ssl.mzstatic.com/image/thumb/Music/{{w}}x{{h}}bb.jpg",
                    "width": 3000,
                    "height": 3000
                }}
            }}
        }}"#
    )
}

pub fn envelope(resources: &[String]) -> String {
    format!(r#"{{"data": [{}]}}"#, resources.join(","))
}
