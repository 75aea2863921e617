//! Playback session registry
//!
//! Maps each user to their own [`PlaylistNavigator`]. The map lock only guards
//! insert/lookup/remove; every navigator sits behind its own mutex, so calls
//! for one user are serialized without blocking other users.

use crate::error::Result;
use crate::navigator::PlaylistNavigator;
use crate::types::{PlaybackConfig, PlaybackMode, SessionStatus};
use riff_core::{Playlist, PlaylistId, PlaylistProvider, Song, UserId};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, info};

type SharedNavigator = Arc<Mutex<PlaylistNavigator>>;

/// Point-in-time view of one session, read under a single lock
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    pub playlist_id: PlaylistId,
    pub playlist_name: String,
    pub mode: PlaybackMode,
    pub status: SessionStatus,
    pub current_song: Option<Song>,
    pub current_index: Option<usize>,
    pub remaining: i64,
    pub has_more_songs: bool,
}

/// Per-user playback sessions
///
/// Owned by the composition root and shared by reference (usually inside an
/// `Arc`). At most one session exists per user; starting another replaces it.
pub struct SessionRegistry {
    provider: Arc<dyn PlaylistProvider>,
    config: PlaybackConfig,
    sessions: RwLock<HashMap<UserId, SharedNavigator>>,
}

impl SessionRegistry {
    /// Create a registry resolving playlists through `provider`
    pub fn new(provider: Arc<dyn PlaylistProvider>, config: PlaybackConfig) -> Self {
        Self {
            provider,
            config,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Configuration new sessions are created with
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Start playing a playlist for a user
    ///
    /// Returns the first song. A missing or empty playlist returns `Ok(None)`
    /// and leaves the user's existing session (if any) untouched. Only a
    /// failing provider is an error.
    pub fn start_playlist(&self, playlist_id: &PlaylistId, user_id: &UserId) -> Result<Option<Song>> {
        let Some(playlist) = self.provider.get_playlist_by_id(playlist_id)? else {
            debug!(user = %user_id, playlist = %playlist_id, "Playlist not found, no session started");
            return Ok(None);
        };

        if playlist.is_empty() {
            debug!(user = %user_id, playlist = %playlist_id, "Playlist is empty, no session started");
            return Ok(None);
        }

        let mut navigator = PlaylistNavigator::new(&self.config);
        navigator.set_playlist(playlist);
        let first = navigator.next_song();

        let replaced = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user_id.clone(), Arc::new(Mutex::new(navigator)))
            .is_some();

        info!(
            user = %user_id,
            playlist = %playlist_id,
            replaced,
            "Playback session started"
        );
        Ok(first)
    }

    /// Advance the user's session
    pub fn next_song(&self, user_id: &UserId) -> Option<Song> {
        self.with_session(user_id, |nav| nav.next_song()).flatten()
    }

    /// Go back in the user's session
    pub fn previous_song(&self, user_id: &UserId) -> Option<Song> {
        self.with_session(user_id, |nav| nav.previous_song()).flatten()
    }

    /// The user's current song
    pub fn current_song(&self, user_id: &UserId) -> Option<Song> {
        self.with_session(user_id, |nav| nav.current_song()).flatten()
    }

    /// The song the next advance would return, without moving
    pub fn peek_next_song(&self, user_id: &UserId) -> Option<Song> {
        self.with_session(user_id, |nav| nav.peek_next_song()).flatten()
    }

    /// Switch the user's mode, keeping the current song
    ///
    /// Returns `false` (and does nothing) when the user has no session.
    pub fn set_mode(&self, user_id: &UserId, mode: PlaybackMode) -> bool {
        self.with_session(user_id, |nav| nav.set_mode(mode)).is_some()
    }

    pub fn set_sequential_mode(&self, user_id: &UserId) -> bool {
        self.set_mode(user_id, PlaybackMode::Sequential)
    }

    pub fn set_shuffle_mode(&self, user_id: &UserId) -> bool {
        self.set_mode(user_id, PlaybackMode::Shuffle)
    }

    pub fn set_repeat_one_mode(&self, user_id: &UserId) -> bool {
        self.set_mode(user_id, PlaybackMode::RepeatOne)
    }

    pub fn set_repeat_all_mode(&self, user_id: &UserId) -> bool {
        self.set_mode(user_id, PlaybackMode::RepeatAll)
    }

    /// Display name of the user's active mode
    pub fn playback_mode(&self, user_id: &UserId) -> Option<&'static str> {
        self.with_session(user_id, |nav| nav.strategy_name())
    }

    /// The user's active mode
    pub fn mode(&self, user_id: &UserId) -> Option<PlaybackMode> {
        self.with_session(user_id, |nav| nav.mode())
    }

    /// The playlist snapshot the user's session is bound to
    pub fn current_playlist(&self, user_id: &UserId) -> Option<Arc<Playlist>> {
        self.with_session(user_id, |nav| nav.playlist()).flatten()
    }

    /// End the user's session; returns whether one existed
    pub fn stop_playback(&self, user_id: &UserId) -> bool {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(user_id)
            .is_some();

        if removed {
            info!(user = %user_id, "Playback session stopped");
        }
        removed
    }

    /// Whether the user has a session
    pub fn has_active_playlist(&self, user_id: &UserId) -> bool {
        self.session(user_id).is_some()
    }

    /// Songs left after the current one, or -1 without a session or current song
    pub fn remaining_count(&self, user_id: &UserId) -> i64 {
        self.with_session(user_id, |nav| nav.remaining_count())
            .flatten()
            .map_or(-1, |count| count as i64)
    }

    /// Put the user's session back to "not started"
    pub fn reset(&self, user_id: &UserId) -> bool {
        self.with_session(user_id, |nav| nav.reset()).is_some()
    }

    /// Whether an advance would produce a song; `false` without a session
    pub fn has_more_songs(&self, user_id: &UserId) -> bool {
        self.with_session(user_id, |nav| nav.has_more_songs())
            .unwrap_or(false)
    }

    /// Lifecycle state of the user's session
    pub fn session_status(&self, user_id: &UserId) -> Option<SessionStatus> {
        self.with_session(user_id, |nav| nav.status())
    }

    /// Recently played songs, oldest first; empty without a session
    pub fn history(&self, user_id: &UserId) -> Vec<Song> {
        self.with_session(user_id, |nav| nav.history())
            .unwrap_or_default()
    }

    /// Consistent summary of the user's session
    pub fn session_info(&self, user_id: &UserId) -> Option<SessionInfo> {
        self.with_session(user_id, |nav| {
            let playlist = nav.playlist()?;
            Some(SessionInfo {
                playlist_id: playlist.id.clone(),
                playlist_name: playlist.name.clone(),
                mode: nav.mode(),
                status: nav.status(),
                current_song: nav.current_song(),
                current_index: nav.current_index(),
                remaining: nav.remaining_count().map_or(-1, |count| count as i64),
                has_more_songs: nav.has_more_songs(),
            })
        })
        .flatten()
    }

    /// Number of live sessions
    pub fn active_sessions(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn session(&self, user_id: &UserId) -> Option<SharedNavigator> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id)
            .cloned()
    }

    /// Run `f` against the user's navigator under its session lock
    ///
    /// The map lock is released before the session lock is taken.
    fn with_session<R>(&self, user_id: &UserId, f: impl FnOnce(&mut PlaylistNavigator) -> R) -> Option<R> {
        let session = self.session(user_id)?;
        let mut navigator = session.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f(&mut navigator))
    }
}

impl std::fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("config", &self.config)
            .field("active_sessions", &self.active_sessions())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riff_core::{CoreError, SongId};
    use std::path::PathBuf;

    /// Fixed set of playlists keyed by ID
    struct Fixture(HashMap<PlaylistId, Playlist>);

    impl PlaylistProvider for Fixture {
        fn get_playlist_by_id(&self, id: &PlaylistId) -> riff_core::Result<Option<Playlist>> {
            Ok(self.0.get(id).cloned())
        }
    }

    struct Failing;

    impl PlaylistProvider for Failing {
        fn get_playlist_by_id(&self, _id: &PlaylistId) -> riff_core::Result<Option<Playlist>> {
            Err(CoreError::storage("disk on fire"))
        }
    }

    fn create_test_song(id: &str) -> Song {
        Song::with_id(
            SongId::new(id),
            format!("Song {}", id),
            PathBuf::from(format!("/music/{}.mp3", id)),
        )
    }

    fn registry() -> SessionRegistry {
        let mut playlists = HashMap::new();
        for (id, songs) in [("abc", vec!["a", "b", "c"]), ("xy", vec!["x", "y"]), ("empty", vec![])] {
            let mut playlist = Playlist::new(UserId::new("owner"), id)
                .with_songs(songs.into_iter().map(create_test_song).collect());
            playlist.id = PlaylistId::new(id);
            playlists.insert(playlist.id.clone(), playlist);
        }
        SessionRegistry::new(Arc::new(Fixture(playlists)), PlaybackConfig::default())
    }

    fn id(song: Option<Song>) -> Option<String> {
        song.map(|s| s.id.to_string())
    }

    #[test]
    fn start_returns_first_song() {
        let registry = registry();
        let user = UserId::new("alice");

        let first = registry.start_playlist(&PlaylistId::new("abc"), &user).unwrap();
        assert_eq!(id(first).as_deref(), Some("a"));
        assert!(registry.has_active_playlist(&user));
        assert_eq!(registry.playback_mode(&user), Some("Sequential"));
        assert_eq!(registry.active_sessions(), 1);
    }

    #[test]
    fn start_with_missing_or_empty_playlist_creates_nothing() {
        let registry = registry();
        let user = UserId::new("alice");

        assert!(registry.start_playlist(&PlaylistId::new("empty"), &user).unwrap().is_none());
        assert!(!registry.has_active_playlist(&user));

        assert!(registry.start_playlist(&PlaylistId::new("nope"), &user).unwrap().is_none());
        assert!(!registry.has_active_playlist(&user));
    }

    #[test]
    fn failed_start_keeps_existing_session() {
        let registry = registry();
        let user = UserId::new("alice");
        registry.start_playlist(&PlaylistId::new("abc"), &user).unwrap();

        registry.start_playlist(&PlaylistId::new("empty"), &user).unwrap();
        assert_eq!(id(registry.current_song(&user)).as_deref(), Some("a"));
    }

    #[test]
    fn provider_failure_is_an_error() {
        let registry = SessionRegistry::new(Arc::new(Failing), PlaybackConfig::default());
        let result = registry.start_playlist(&PlaylistId::new("abc"), &UserId::new("alice"));
        assert!(result.is_err());
    }

    #[test]
    fn absent_session_degrades_to_nothing() {
        let registry = registry();
        let ghost = UserId::new("ghost");

        assert!(registry.next_song(&ghost).is_none());
        assert!(registry.previous_song(&ghost).is_none());
        assert!(registry.current_song(&ghost).is_none());
        assert!(registry.peek_next_song(&ghost).is_none());
        assert!(registry.playback_mode(&ghost).is_none());
        assert!(registry.current_playlist(&ghost).is_none());
        assert!(!registry.set_shuffle_mode(&ghost));
        assert!(!registry.reset(&ghost));
        assert!(!registry.has_more_songs(&ghost));
        assert!(registry.history(&ghost).is_empty());
        assert_eq!(registry.remaining_count(&ghost), -1);
        assert!(!registry.stop_playback(&ghost));
    }

    #[test]
    fn remaining_count_tracks_position() {
        let registry = registry();
        let user = UserId::new("alice");
        registry.start_playlist(&PlaylistId::new("abc"), &user).unwrap();
        registry.next_song(&user);

        assert_eq!(id(registry.current_song(&user)).as_deref(), Some("b"));
        assert_eq!(registry.remaining_count(&user), 1);

        registry.reset(&user);
        assert_eq!(registry.remaining_count(&user), -1);
    }

    #[test]
    fn restart_replaces_previous_session() {
        let registry = registry();
        let user = UserId::new("alice");
        registry.start_playlist(&PlaylistId::new("abc"), &user).unwrap();
        registry.set_repeat_all_mode(&user);
        registry.next_song(&user);

        let first = registry.start_playlist(&PlaylistId::new("xy"), &user).unwrap();
        assert_eq!(id(first).as_deref(), Some("x"));
        assert_eq!(registry.mode(&user), Some(PlaybackMode::Sequential));
        assert_eq!(registry.current_playlist(&user).unwrap().id, PlaylistId::new("xy"));
        assert_eq!(registry.active_sessions(), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let registry = registry();
        let user = UserId::new("alice");
        registry.start_playlist(&PlaylistId::new("abc"), &user).unwrap();

        assert!(registry.stop_playback(&user));
        assert!(!registry.stop_playback(&user));
        assert!(!registry.has_active_playlist(&user));
    }

    #[test]
    fn session_info_summarizes_state() {
        let registry = registry();
        let user = UserId::new("alice");
        registry.start_playlist(&PlaylistId::new("xy"), &user).unwrap();
        registry.next_song(&user);
        registry.next_song(&user);

        let info = registry.session_info(&user).unwrap();
        assert_eq!(info.playlist_id, PlaylistId::new("xy"));
        assert_eq!(info.status, SessionStatus::Ended);
        assert_eq!(info.current_index, Some(1));
        assert_eq!(info.remaining, 0);
        assert!(!info.has_more_songs);
    }
}
