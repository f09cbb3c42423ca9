//! # Apple Music Integration Module
//!
//! A thin client over the Apple Music Web API. Every endpoint follows the
//! same shape:
//!
//! ```text
//! Endpoint operation (playlists, catalog, playback)
//!          ↓
//! Authorization gate (developer token, user token for library calls)
//!          ↓
//! Fetch/decode pipeline (status check, key normalization, serde)
//!          ↓
//! Transport (reqwest by default)
//! ```
//!
//! Responses are reshaped into the models in [`crate::models`]. Each call is a
//! single request; nothing is retried or cached.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let service = AppleMusicService::new();
//! service.configure(developer_token, Some(user_token));
//!
//! let playlists = service.get_playlists().await?;
//! let tracks = service.get_all_tracks_for_playlist(&playlists[0].id).await?;
//! service.trigger_playback(&tracks[0].context).await?;
//! ```

mod catalog;
pub mod error;
pub mod fetch;
mod playback;
mod playlists;
pub mod transport;

use std::sync::Arc;

use arc_swap::ArcSwap;
use reqwest::Method;
use url::Url;

pub use error::ApiServiceError;
pub use playback::{BrowserPlayer, MusicPlayer};
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport, TransportError};

pub const DEFAULT_BASE_URL: &str = "https://api.music.apple.com/v1/";
pub const DEFAULT_STOREFRONT: &str = "us";

/// Tokens sent with every request.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub developer_token: Option<String>,
    pub user_token: Option<String>,
}

/// Which credentials an endpoint needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenScope {
    /// Public catalog data, developer token only.
    Catalog,
    /// Anything under `me/library`, also needs the user token.
    Library,
}

pub struct AppleMusicService {
    base_url: String,
    storefront: String,
    credentials: ArcSwap<Credentials>,
    transport: Arc<dyn Transport>,
    player: Arc<dyn MusicPlayer>,
    /// Set while `player` is the built-in browser player, so it can follow
    /// storefront changes.
    browser: Option<Arc<BrowserPlayer>>,
}

impl AppleMusicService {
    /// Creates a service talking to the public API over reqwest, playing
    /// tracks through the Apple Music web player.
    ///
    /// The browser player opens songs in the same storefront the catalog
    /// calls use, including one set later through [`Self::with_storefront`].
    pub fn new() -> Self {
        let browser = Arc::new(BrowserPlayer::new(DEFAULT_STOREFRONT));
        let mut service =
            Self::with_collaborators(Arc::new(ReqwestTransport::default()), browser.clone());
        service.browser = Some(browser);
        service
    }

    /// Creates a service on top of the given transport and player, with the
    /// default base url and storefront and no tokens configured.
    ///
    /// An injected player is used as is; it does not follow
    /// [`Self::with_storefront`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let service = AppleMusicService::with_collaborators(
    ///     Arc::new(ReqwestTransport::default()),
    ///     Arc::new(BrowserPlayer::new("de")),
    /// )
    /// .with_storefront("de");
    /// ```
    pub fn with_collaborators(transport: Arc<dyn Transport>, player: Arc<dyn MusicPlayer>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            storefront: DEFAULT_STOREFRONT.to_string(),
            credentials: ArcSwap::from_pointee(Credentials::default()),
            transport,
            player,
            browser: None,
        }
    }

    /// Points the service at another API root, e.g. a local stub server.
    /// An unparseable url makes every call fail with `InvalidCompiledUrl`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the storefront (a two letter country code such as `de`) used for
    /// catalog lookups. The built-in browser player is rebuilt for the same
    /// storefront.
    pub fn with_storefront(mut self, storefront: impl Into<String>) -> Self {
        self.storefront = storefront.into();
        if self.browser.is_some() {
            let browser = Arc::new(BrowserPlayer::new(self.storefront.clone()));
            self.player = browser.clone();
            self.browser = Some(browser);
        }
        self
    }

    /// The storefront catalog calls are made against.
    pub fn storefront(&self) -> &str {
        &self.storefront
    }

    /// The built-in browser player, if the service was created with
    /// [`Self::new`].
    pub fn browser_player(&self) -> Option<&BrowserPlayer> {
        self.browser.as_deref()
    }

    /// Sets the tokens used for every subsequent request.
    ///
    /// Calls already in flight keep the tokens they started with.
    pub fn configure(&self, developer_token: impl Into<String>, user_token: Option<String>) {
        self.credentials.store(Arc::new(Credentials {
            developer_token: Some(developer_token.into()),
            user_token,
        }));
    }

    /// Returns the auth headers for `scope`, or `TokenNil` if a required
    /// token is missing.
    pub(crate) fn authorize(&self, scope: TokenScope) -> Result<Vec<(String, String)>, ApiServiceError> {
        let credentials = self.credentials.load();

        let developer_token = credentials
            .developer_token
            .as_deref()
            .ok_or(ApiServiceError::TokenNil)?;
        let mut headers = vec![(
            "Authorization".to_string(),
            format!("Bearer {}", developer_token),
        )];

        if scope == TokenScope::Library {
            let user_token = credentials
                .user_token
                .as_deref()
                .ok_or(ApiServiceError::TokenNil)?;
            headers.push(("Music-User-Token".to_string(), user_token.to_string()));
        }

        Ok(headers)
    }

    /// Appends `segments` to the base url, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, ApiServiceError> {
        let mut url = Url::parse(&self.base_url).map_err(|_| ApiServiceError::InvalidCompiledUrl)?;
        url.path_segments_mut()
            .map_err(|_| ApiServiceError::InvalidCompiledUrl)?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    /// Runs the authorization gate, then builds the request. No request is
    /// built when the gate fails.
    pub(crate) fn request(
        &self,
        method: Method,
        scope: TokenScope,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<ApiRequest, ApiServiceError> {
        let headers = self.authorize(scope)?;
        let url = self.endpoint(segments, query)?;

        Ok(headers
            .into_iter()
            .fold(ApiRequest::new(method, url), |req, (name, value)| {
                req.header(&name, value)
            }))
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

impl Default for AppleMusicService {
    fn default() -> Self {
        Self::new()
    }
}
