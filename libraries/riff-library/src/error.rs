//! Error types for the playlist catalog

use riff_core::{CoreError, PlaylistId, SongId};
use std::path::PathBuf;
use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Reading or writing the catalog file failed
    #[error("Library file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not valid JSON for the expected shape
    #[error("Invalid library document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A playlist refers to a song the catalog does not contain
    #[error("Playlist {playlist} references unknown song {song}")]
    UnknownSong { playlist: PlaylistId, song: SongId },
}

impl From<LibraryError> for CoreError {
    fn from(err: LibraryError) -> Self {
        match err {
            LibraryError::Io { source, .. } => CoreError::Io(source),
            LibraryError::Parse(e) => CoreError::Serialization(e),
            LibraryError::UnknownSong { song, .. } => CoreError::not_found("Song", song.as_str()),
        }
    }
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, LibraryError>;
