//! Riff Core
//!
//! Platform-agnostic domain types, traits, and error handling for Riff.
//!
//! This crate provides the building blocks shared by the playback engine,
//! the playlist catalog and the server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `Playlist` and their identifiers
//! - **Core Traits**: `PlaylistProvider`, the seam through which playlists are resolved
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use riff_core::{Playlist, Song, UserId};
//! use std::path::PathBuf;
//!
//! let owner = UserId::new("alice");
//! let song = Song::new("My Favorite Song", PathBuf::from("/music/song.mp3"));
//!
//! let mut playlist = Playlist::new(owner, "My Favorites");
//! playlist.push(song);
//! assert_eq!(playlist.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use traits::PlaylistProvider;
pub use types::{AlbumId, ArtistId, Playlist, PlaylistId, Song, SongId, UserId};
