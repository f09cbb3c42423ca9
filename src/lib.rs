//! Apple Music Client Library
//!
//! This library wraps the Apple Music Web API: listing and reading library
//! playlists, looking up catalog songs by id or ISRC, adding songs to
//! playlists and handing songs to a player. API responses are mapped onto a
//! small set of models (artist, track, playlist).
//!
//! # Modules
//!
//! - `apple_music` - The service, its fetch pipeline and collaborators
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `models` - Application-level value objects
//! - `types` - Wire types for the API's JSON envelope
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use socially::{apple_music::AppleMusicService, config};
//!
//! #[tokio::main]
//! async fn main() -> socially::Res<()> {
//!     config::load_env().await?;
//!     let service = AppleMusicService::new();
//!     service.configure(config::developer_token().unwrap_or_default(), config::user_token());
//!     let playlists = service.get_playlists().await?;
//!     Ok(())
//! }
//! ```

pub mod apple_music;
pub mod cli;
pub mod config;
pub mod models;
pub mod types;
pub mod utils;

/// Boxed error result used by the CLI layer, where failures are only
/// reported to the user.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a progress line prefixed with a blue `o`.
///
/// ```
/// info!("Fetching library playlists...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a green `✓` line once a command has finished.
///
/// ```
/// success!("Loaded {} playlists", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line and exits with status 1.
///
/// Commands call this when a service call fails, so nothing after it runs.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line for problems the command can carry on from,
/// such as a missing token or songs without a catalog match.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
