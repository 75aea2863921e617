//! Riff - Playback Sessions
//!
//! Per-user playback sessions and playlist navigation for Riff.
//!
//! This crate provides:
//! - Four playback modes (Sequential, Repeat All, Repeat One, Shuffle)
//! - Mode switching mid-session without losing the current song
//! - Peeking at the upcoming song without moving
//! - Shuffle algorithms (Random + Smart) with one-song-once-per-pass passes
//! - Playback history (configurable size)
//! - A thread-safe registry holding one session per user
//!
//! # Architecture
//!
//! `riff-playback` never decodes or streams audio and keeps no state on disk:
//! - [`navigation`] holds the pure cursor arithmetic of each mode
//! - [`PlaylistNavigator`] binds one playlist snapshot to the active mode
//! - [`SessionRegistry`] maps users to navigators
//!
//! Playlists are resolved through the [`PlaylistProvider`](riff_core::PlaylistProvider)
//! trait, so the registry works with any catalog.
//!
//! # Example: Sessions
//!
//! ```rust
//! use riff_core::{Playlist, PlaylistId, PlaylistProvider, Song, UserId};
//! use riff_playback::{PlaybackConfig, SessionRegistry};
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! struct OnePlaylist(Playlist);
//!
//! impl PlaylistProvider for OnePlaylist {
//!     fn get_playlist_by_id(&self, id: &PlaylistId) -> riff_core::Result<Option<Playlist>> {
//!         Ok((self.0.id == *id).then(|| self.0.clone()))
//!     }
//! }
//!
//! let owner = UserId::new("alice");
//! let playlist = Playlist::new(owner.clone(), "Mix").with_songs(vec![
//!     Song::new("A", PathBuf::from("/music/a.mp3")),
//!     Song::new("B", PathBuf::from("/music/b.mp3")),
//! ]);
//! let playlist_id = playlist.id.clone();
//!
//! let registry = SessionRegistry::new(Arc::new(OnePlaylist(playlist)), PlaybackConfig::default());
//!
//! let first = registry.start_playlist(&playlist_id, &owner).unwrap().unwrap();
//! assert_eq!(first.title, "A");
//!
//! registry.set_repeat_all_mode(&owner);
//! assert_eq!(registry.next_song(&owner).unwrap().title, "B");
//! assert_eq!(registry.next_song(&owner).unwrap().title, "A");
//! ```
//!
//! # Example: Navigator
//!
//! ```rust
//! use riff_core::{Playlist, Song, UserId};
//! use riff_playback::{PlaybackConfig, PlaybackMode, PlaylistNavigator};
//! use std::path::PathBuf;
//!
//! let playlist = Playlist::new(UserId::new("bob"), "Loop").with_songs(vec![
//!     Song::new("Only", PathBuf::from("/music/only.mp3")),
//! ]);
//!
//! let mut navigator = PlaylistNavigator::new(&PlaybackConfig::default());
//! navigator.set_playlist(playlist);
//! navigator.set_mode(PlaybackMode::RepeatOne);
//!
//! assert_eq!(navigator.next_song().unwrap().title, "Only");
//! assert_eq!(navigator.next_song().unwrap().title, "Only");
//! assert!(navigator.has_more_songs());
//! ```

mod error;
mod history;
pub mod navigation;
mod navigator;
mod registry;
mod shuffle;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use navigator::PlaylistNavigator;
pub use registry::{SessionInfo, SessionRegistry};
pub use types::{Direction, PlaybackConfig, PlaybackMode, SessionStatus, ShuffleAlgorithm};
