/// Song domain type
use crate::types::{AlbumId, ArtistId, SongId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// A song in the library
///
/// Songs are plain values: the playback engine copies them into playlist
/// snapshots and hands clones back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Performing artist
    #[serde(default)]
    pub artist_id: Option<ArtistId>,

    /// Album the song appears on
    #[serde(default)]
    pub album_id: Option<AlbumId>,

    /// Genre
    #[serde(default)]
    pub genre: Option<String>,

    /// Song duration in milliseconds
    #[serde(default)]
    pub duration_ms: u64,

    /// File path on disk
    pub file_path: PathBuf,
}

impl Song {
    /// Create a new song with minimal metadata
    pub fn new(title: impl Into<String>, file_path: PathBuf) -> Self {
        Self::with_id(SongId::generate(), title, file_path)
    }

    /// Create a song with a specific ID (for catalog loading)
    pub fn with_id(id: SongId, title: impl Into<String>, file_path: PathBuf) -> Self {
        Self {
            id,
            title: title.into(),
            artist_id: None,
            album_id: None,
            genre: None,
            duration_ms: 0,
            file_path,
        }
    }

    /// Get the song duration as a Duration
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Set the song duration from a Duration
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_ms = duration.as_millis() as u64;
    }
}
