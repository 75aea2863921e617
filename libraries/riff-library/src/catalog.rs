//! In-memory catalog loaded from and saved to a JSON document

use crate::error::{LibraryError, Result};
use chrono::{DateTime, Utc};
use riff_core::{Playlist, PlaylistId, PlaylistProvider, Song, SongId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

/// Playlist as stored in the catalog document
///
/// Songs are referenced by ID; they are resolved against the song table
/// whenever the playlist is looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRecord {
    pub id: PlaylistId,
    pub name: String,
    pub owner_id: UserId,
    #[serde(default)]
    pub song_ids: Vec<SongId>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl PlaylistRecord {
    /// Create a record with a fresh ID and no songs
    pub fn new(owner_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            owner_id,
            song_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// On-disk shape of the catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryDocument {
    #[serde(default)]
    pub songs: Vec<Song>,
    #[serde(default)]
    pub playlists: Vec<PlaylistRecord>,
}

#[derive(Debug, Default)]
struct Catalog {
    songs: BTreeMap<SongId, Song>,
    playlists: BTreeMap<PlaylistId, PlaylistRecord>,
}

impl Catalog {
    fn resolve(&self, record: &PlaylistRecord) -> Playlist {
        let songs = record
            .song_ids
            .iter()
            .filter_map(|id| {
                let song = self.songs.get(id).cloned();
                if song.is_none() {
                    warn!(playlist = %record.id, song = %id, "Skipping unknown song in playlist");
                }
                song
            })
            .collect();

        Playlist::with_id(
            record.id.clone(),
            record.owner_id.clone(),
            record.name.clone(),
            record.created_at,
        )
        .with_songs(songs)
    }
}

/// Song and playlist catalog
///
/// Safe to share behind an `Arc`: lookups take a read lock, edits a write
/// lock.
#[derive(Debug, Default)]
pub struct Library {
    inner: RwLock<Catalog>,
}

impl Library {
    /// Create an empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from a parsed document
    ///
    /// Later songs with a duplicate ID replace earlier ones.
    pub fn from_document(document: LibraryDocument) -> Self {
        let mut catalog = Catalog::default();

        for song in document.songs {
            if let Some(previous) = catalog.songs.insert(song.id.clone(), song) {
                warn!(song = %previous.id, "Duplicate song ID in library document");
            }
        }
        for record in document.playlists {
            catalog.playlists.insert(record.id.clone(), record);
        }

        debug!(
            songs = catalog.songs.len(),
            playlists = catalog.playlists.len(),
            "Library catalog built"
        );

        Self {
            inner: RwLock::new(catalog),
        }
    }

    /// Parse a catalog from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: LibraryDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(document))
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LibraryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let library = Self::from_json_str(&json)?;
        info!(
            "Loaded library from {:?} ({} songs, {} playlists)",
            path,
            library.song_count(),
            library.playlist_count()
        );
        Ok(library)
    }

    /// Snapshot the catalog as a document
    pub fn to_document(&self) -> LibraryDocument {
        let catalog = self.read();
        LibraryDocument {
            songs: catalog.songs.values().cloned().collect(),
            playlists: catalog.playlists.values().cloned().collect(),
        }
    }

    /// Write the catalog to a JSON file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source| LibraryError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(&self.to_document())?;
        std::fs::write(path, json).map_err(io_err)?;

        debug!("Saved library to {:?}", path);
        Ok(())
    }

    /// Add or replace a song, returning the replaced one
    pub fn insert_song(&self, song: Song) -> Option<Song> {
        self.write().songs.insert(song.id.clone(), song)
    }

    /// Add or replace a playlist
    ///
    /// Every referenced song must already be in the catalog.
    pub fn insert_playlist(&self, record: PlaylistRecord) -> Result<()> {
        let mut catalog = self.write();

        if let Some(missing) = record
            .song_ids
            .iter()
            .find(|id| !catalog.songs.contains_key(*id))
        {
            return Err(LibraryError::UnknownSong {
                playlist: record.id.clone(),
                song: missing.clone(),
            });
        }

        catalog.playlists.insert(record.id.clone(), record);
        Ok(())
    }

    /// Remove a playlist, returning its record
    pub fn remove_playlist(&self, id: &PlaylistId) -> Option<PlaylistRecord> {
        self.write().playlists.remove(id)
    }

    /// Look up a song by ID
    pub fn song(&self, id: &SongId) -> Option<Song> {
        self.read().songs.get(id).cloned()
    }

    /// All playlist records, ordered by ID
    pub fn playlists(&self) -> Vec<PlaylistRecord> {
        self.read().playlists.values().cloned().collect()
    }

    /// Number of songs in the catalog
    pub fn song_count(&self) -> usize {
        self.read().songs.len()
    }

    /// Number of playlists in the catalog
    pub fn playlist_count(&self) -> usize {
        self.read().playlists.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PlaylistProvider for Library {
    fn get_playlist_by_id(&self, id: &PlaylistId) -> riff_core::Result<Option<Playlist>> {
        let catalog = self.read();
        Ok(catalog.playlists.get(id).map(|record| catalog.resolve(record)))
    }
}
