/// Core traits for Riff
use crate::error::Result;
use crate::types::{Playlist, PlaylistId};

/// Playlist resolution
///
/// Implemented by whatever owns playlists (a JSON catalog, a database, a test
/// fixture). The playback engine only ever reads through this trait.
///
/// `Ok(None)` means the playlist does not exist; `Err` is reserved for the
/// provider itself failing (I/O, corrupt data).
pub trait PlaylistProvider: Send + Sync {
    /// Look up a playlist with its songs in playlist order
    fn get_playlist_by_id(&self, id: &PlaylistId) -> Result<Option<Playlist>>;
}

impl<P: PlaylistProvider + ?Sized> PlaylistProvider for std::sync::Arc<P> {
    fn get_playlist_by_id(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        (**self).get_playlist_by_id(id)
    }
}
