//! Configuration management for the Apple Music client.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage the API tokens, the storefront and the API root.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::apple_music::{DEFAULT_BASE_URL, DEFAULT_STOREFRONT};

pub const DEVELOPER_TOKEN_VAR: &str = "APPLE_MUSIC_DEVELOPER_TOKEN";
pub const USER_TOKEN_VAR: &str = "APPLE_MUSIC_USER_TOKEN";
pub const STOREFRONT_VAR: &str = "APPLE_MUSIC_STOREFRONT";
pub const API_URL_VAR: &str = "APPLE_MUSIC_API_URL";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// variables from `socially/.env` under the platform-specific local data
/// directory:
/// - Linux: `~/.local/share/socially/.env`
/// - macOS: `~/Library/Application Support/socially/.env`
/// - Windows: `%LOCALAPPDATA%/socially/.env`
///
/// A missing file is not an error since every value can also come from the
/// process environment. Variables already set are never overridden.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    load_env_from(&env_path()).await
}

/// Loads environment variables from the `.env` file at `path`, creating its
/// parent directory first.
///
/// # Errors
///
/// Same as [`load_env`].
pub async fn load_env_from(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.exists() {
        log::debug!("No .env file at {}", path.display());
        return Ok(());
    }

    dotenv::from_path(path).map_err(|e| e.to_string())
}

/// Location of the `.env` file read by [`load_env`]. Falls back to the
/// working directory when the platform has no local data directory.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("socially/.env");
    path
}

/// Returns the developer token (a signed JWT issued for the application).
pub fn developer_token() -> Option<String> {
    non_empty_var(DEVELOPER_TOKEN_VAR)
}

/// Returns the music user token, needed for anything in the user's library.
pub fn user_token() -> Option<String> {
    non_empty_var(USER_TOKEN_VAR)
}

/// Returns the storefront (two-letter country code) for catalog requests.
///
/// Defaults to `us`.
pub fn storefront() -> String {
    non_empty_var(STOREFRONT_VAR).unwrap_or_else(|| DEFAULT_STOREFRONT.to_string())
}

/// Returns the API root requests are sent to, `DEFAULT_BASE_URL` unless
/// overridden (e.g. to point at a local stub server).
pub fn api_url() -> String {
    non_empty_var(API_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

// Blank values count as unset
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
