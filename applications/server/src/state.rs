/// Shared application state
use riff_core::PlaylistProvider;
use riff_library::Library;
use riff_playback::{PlaybackConfig, SessionRegistry};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub library: Arc<Library>,
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    /// Build the session registry on top of the catalog
    pub fn new(library: Arc<Library>, playback: PlaybackConfig) -> Self {
        let provider: Arc<dyn PlaylistProvider> = library.clone();
        Self {
            library,
            sessions: Arc::new(SessionRegistry::new(provider, playback)),
        }
    }
}
