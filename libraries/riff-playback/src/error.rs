//! Error types for playback sessions

use riff_core::CoreError;
use thiserror::Error;

/// Playback errors
///
/// Navigation itself never fails: absent sessions and exhausted playlists
/// are reported as `None`. Errors only come from resolving playlists or from
/// parsing caller input.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The playlist provider failed (not "playlist missing")
    #[error("Playlist provider error: {0}")]
    Provider(#[from] CoreError),

    /// Unrecognised playback mode name
    #[error("Unknown playback mode: {0}")]
    InvalidMode(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
