//! Playlist navigator
//!
//! Binds one playlist snapshot to the active playback mode. All modes share a
//! single cursor (an index into the snapshot), so switching modes keeps the
//! current song without replaying anything, and duplicate songs in a playlist
//! cannot be confused with each other.

use crate::history::PlayHistory;
use crate::navigation;
use crate::shuffle::ShuffleOrder;
use crate::types::{Direction, PlaybackConfig, PlaybackMode, SessionStatus};
use riff_core::{Playlist, Song};
use std::sync::Arc;
use tracing::debug;

/// Cursor over one playlist snapshot
///
/// ```text
/// snapshot:  [A] [B] [C] [D]
///                 ^
///               cursor = Some(1)      (None = not started)
/// ```
#[derive(Debug, Clone)]
pub struct PlaylistNavigator {
    /// Immutable copy of the bound playlist
    playlist: Option<Arc<Playlist>>,

    /// Active mode
    mode: PlaybackMode,

    /// Index of the current song in the snapshot
    cursor: Option<usize>,

    /// Permutation used while in Shuffle mode
    shuffle: ShuffleOrder,

    /// Recently played songs
    history: PlayHistory,

    /// Last "next" ran off the end of a non-looping mode
    exhausted: bool,
}

impl PlaylistNavigator {
    /// Create a navigator with no playlist bound
    pub fn new(config: &PlaybackConfig) -> Self {
        Self {
            playlist: None,
            mode: PlaybackMode::Sequential,
            cursor: None,
            shuffle: ShuffleOrder::new(config),
            history: PlayHistory::new(config.history_size),
            exhausted: false,
        }
    }

    /// Bind a playlist
    ///
    /// Takes a snapshot of the songs, so later edits to the caller's playlist
    /// do not affect this navigator. Resets the cursor and history and
    /// selects Sequential mode.
    pub fn set_playlist(&mut self, playlist: Playlist) {
        debug!(
            playlist = %playlist.id,
            songs = playlist.len(),
            "Binding playlist snapshot"
        );

        self.playlist = Some(Arc::new(playlist));
        self.mode = PlaybackMode::Sequential;
        self.cursor = None;
        self.exhausted = false;
        self.history.clear();
    }

    /// The bound snapshot
    pub fn playlist(&self) -> Option<Arc<Playlist>> {
        self.playlist.clone()
    }

    /// Songs in the bound snapshot
    pub fn songs(&self) -> &[Song] {
        songs_of(self.playlist.as_deref())
    }

    /// Number of songs in the bound snapshot
    pub fn len(&self) -> usize {
        self.songs().len()
    }

    /// Check if the snapshot has no songs
    pub fn is_empty(&self) -> bool {
        self.songs().is_empty()
    }

    /// Advance under the active mode
    pub fn next_song(&mut self) -> Option<Song> {
        self.move_cursor(Direction::Forward)
    }

    /// Go back under the active mode
    pub fn previous_song(&mut self) -> Option<Song> {
        self.move_cursor(Direction::Backward)
    }

    /// The current song, if playback has started
    pub fn current_song(&self) -> Option<Song> {
        self.cursor.and_then(|i| self.songs().get(i)).cloned()
    }

    /// Index of the current song in the snapshot
    pub fn current_index(&self) -> Option<usize> {
        self.cursor
    }

    /// The song the next call to [`next_song`](Self::next_song) returns
    ///
    /// Position is unchanged. In Shuffle mode, peeking past the end of a pass
    /// fixes the order of the following pass.
    pub fn peek_next_song(&mut self) -> Option<Song> {
        let snapshot = self.playlist.clone();
        let songs = songs_of(snapshot.as_deref());

        let target = match self.mode {
            PlaybackMode::Shuffle => self.shuffle.peek_next(songs),
            mode => navigation::step(mode, self.cursor, songs.len(), Direction::Forward),
        };
        target.and_then(|i| songs.get(i)).cloned()
    }

    /// Back to "not started"
    ///
    /// In Shuffle mode the next song starts a freshly shuffled pass.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.exhausted = false;

        if self.mode == PlaybackMode::Shuffle {
            let snapshot = self.playlist.clone();
            let songs = songs_of(snapshot.as_deref());
            self.shuffle.rebuild(songs, None);
        }
    }

    /// Whether [`next_song`](Self::next_song) would produce a song
    pub fn has_more_songs(&self) -> bool {
        match self.mode {
            PlaybackMode::Shuffle => self.shuffle.has_more(self.len()),
            mode => navigation::has_more(mode, self.cursor, self.len()),
        }
    }

    /// Active mode
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Display name of the active mode
    pub fn strategy_name(&self) -> &'static str {
        self.mode.name()
    }

    /// Switch mode, keeping the current song
    ///
    /// Entering Shuffle starts a new pass that opens with the current song.
    /// Switching to the already active mode does nothing.
    pub fn set_mode(&mut self, mode: PlaybackMode) {
        if mode == self.mode {
            return;
        }

        if mode == PlaybackMode::Shuffle {
            let snapshot = self.playlist.clone();
            let songs = songs_of(snapshot.as_deref());
            self.shuffle.rebuild(songs, self.cursor);
        }

        debug!(from = %self.mode, to = %mode, cursor = ?self.cursor, "Switching playback mode");
        self.mode = mode;
        self.exhausted = false;
    }

    pub fn use_sequential(&mut self) {
        self.set_mode(PlaybackMode::Sequential);
    }

    pub fn use_shuffle(&mut self) {
        self.set_mode(PlaybackMode::Shuffle);
    }

    pub fn use_repeat_one(&mut self) {
        self.set_mode(PlaybackMode::RepeatOne);
    }

    pub fn use_repeat_all(&mut self) {
        self.set_mode(PlaybackMode::RepeatAll);
    }

    /// Songs after the current one in snapshot order
    ///
    /// Taken from the current index in every mode, Shuffle included.
    /// `None` before playback starts.
    pub fn remaining_count(&self) -> Option<usize> {
        self.cursor.map(|i| self.len() - i - 1)
    }

    /// Lifecycle state
    pub fn status(&self) -> SessionStatus {
        if self.cursor.is_none() {
            return SessionStatus::NotStarted;
        }
        if self.exhausted {
            return SessionStatus::Ended;
        }

        let looping = match self.mode {
            PlaybackMode::Sequential => false,
            PlaybackMode::RepeatAll | PlaybackMode::RepeatOne => true,
            PlaybackMode::Shuffle => self.shuffle.reshuffles(),
        };
        if looping {
            SessionStatus::Looping
        } else {
            SessionStatus::Playing
        }
    }

    /// Recently played songs, oldest first
    pub fn history(&self) -> Vec<Song> {
        self.history.to_vec()
    }

    fn move_cursor(&mut self, direction: Direction) -> Option<Song> {
        let snapshot = self.playlist.clone();
        let songs = songs_of(snapshot.as_deref());

        let target = match (self.mode, direction) {
            (PlaybackMode::Shuffle, Direction::Forward) => self.shuffle.next(songs),
            (PlaybackMode::Shuffle, Direction::Backward) => self.shuffle.previous(),
            (mode, direction) => navigation::step(mode, self.cursor, songs.len(), direction),
        };

        let Some(song) = target.and_then(|i| songs.get(i)) else {
            if direction == Direction::Forward && !songs.is_empty() {
                self.exhausted = true;
            }
            return None;
        };

        self.cursor = target;
        self.exhausted = false;
        self.history.record(song.clone());
        Some(song.clone())
    }
}

/// Songs of a (possibly unbound) snapshot
///
/// Callers clone the snapshot `Arc` first so the slice does not borrow the
/// navigator while the shuffle order is mutated.
fn songs_of(playlist: Option<&Playlist>) -> &[Song] {
    playlist.map_or(&[][..], |p| p.songs.as_slice())
}
