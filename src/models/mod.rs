//! Application-level value objects.
//!
//! Each model has one constructor per source shape (an API resource, a flat
//! key/value map, another internal representation). Constructors that can
//! fail return `Option` and never produce a partially filled value.

mod artist;
mod playlist;
mod track;

pub use artist::{Artist, ArtistImage, ArtistProfile};
pub use playlist::Playlist;
pub use track::Track;
