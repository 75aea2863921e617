/// Playlist domain type
use crate::types::{PlaylistId, Song, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist with its songs in playback order
///
/// The same song may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Owner user ID
    pub owner_id: UserId,

    /// Songs in playback order
    pub songs: Vec<Song>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(owner_id: UserId, name: impl Into<String>) -> Self {
        Self::with_id(PlaylistId::generate(), owner_id, name, Utc::now())
    }

    /// Create a playlist with a specific ID (for catalog loading)
    pub fn with_id(
        id: PlaylistId,
        owner_id: UserId,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            owner_id,
            songs: Vec::new(),
            created_at,
        }
    }

    /// Builder-style song list
    pub fn with_songs(mut self, songs: Vec<Song>) -> Self {
        self.songs = songs;
        self
    }

    /// Append a song
    pub fn push(&mut self, song: Song) {
        self.songs.push(song);
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if the playlist has no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
