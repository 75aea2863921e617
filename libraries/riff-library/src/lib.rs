//! Riff - Playlist Catalog
//!
//! A small JSON-document-backed catalog of songs and playlists. It is the
//! default [`PlaylistProvider`](riff_core::PlaylistProvider) the server hands
//! to the playback engine.
//!
//! # Document format
//!
//! ```json
//! {
//!   "songs": [
//!     { "id": "s1", "title": "Intro", "file_path": "/music/intro.flac", "duration_ms": 61000 }
//!   ],
//!   "playlists": [
//!     { "id": "p1", "name": "Morning", "owner_id": "alice", "song_ids": ["s1"] }
//!   ]
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use riff_core::{PlaylistId, PlaylistProvider};
//! use riff_library::Library;
//!
//! let library = Library::from_json_str(r#"{
//!     "songs": [{ "id": "s1", "title": "Intro", "file_path": "/music/intro.flac" }],
//!     "playlists": [{ "id": "p1", "name": "Morning", "owner_id": "alice", "song_ids": ["s1", "s1"] }]
//! }"#).unwrap();
//!
//! let playlist = library.get_playlist_by_id(&PlaylistId::new("p1")).unwrap().unwrap();
//! assert_eq!(playlist.len(), 2);
//! ```

mod catalog;
mod error;

pub use catalog::{Library, LibraryDocument, PlaylistRecord};
pub use error::{LibraryError, Result};
