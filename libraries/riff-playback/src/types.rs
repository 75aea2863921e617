//! Core types for playback sessions

use crate::error::PlaybackError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playback mode
///
/// A closed set: every mode is a way of moving one shared cursor over the
/// bound playlist snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackMode {
    /// Play through once, stop at the end
    #[default]
    Sequential,

    /// Loop the entire playlist
    RepeatAll,

    /// Loop the current song only
    RepeatOne,

    /// Random order, every song once per pass
    Shuffle,
}

impl PlaybackMode {
    /// All modes, in display order
    pub const ALL: [PlaybackMode; 4] = [
        PlaybackMode::Sequential,
        PlaybackMode::RepeatAll,
        PlaybackMode::RepeatOne,
        PlaybackMode::Shuffle,
    ];

    /// Stable label used in diagnostics and mode reporting
    pub fn name(self) -> &'static str {
        match self {
            PlaybackMode::Sequential => "Sequential",
            PlaybackMode::RepeatAll => "Repeat All",
            PlaybackMode::RepeatOne => "Repeat One",
            PlaybackMode::Shuffle => "Shuffle",
        }
    }
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlaybackMode {
    type Err = PlaybackError;

    /// Accepts the display name or its snake/kebab-case form, any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "sequential" => Ok(PlaybackMode::Sequential),
            "repeatall" => Ok(PlaybackMode::RepeatAll),
            "repeatone" => Ok(PlaybackMode::RepeatOne),
            "shuffle" => Ok(PlaybackMode::Shuffle),
            _ => Err(PlaybackError::InvalidMode(s.to_string())),
        }
    }
}

/// Direction of a cursor move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Shuffle algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleAlgorithm {
    /// Pure random shuffle
    #[default]
    Random,

    /// Smart shuffle (spread songs by the same artist apart)
    Smart,
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Bound to a playlist, nothing played yet
    NotStarted,

    /// A song is current and the mode can run out
    Playing,

    /// The mode ran out; further "next" calls return nothing
    Ended,

    /// A song is current and the mode never runs out
    Looping,
}

/// Configuration for playback sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Maximum history size per session (default: 50)
    pub history_size: usize,

    /// Algorithm used to build shuffle passes (default: Random)
    pub shuffle_algorithm: ShuffleAlgorithm,

    /// Start a new shuffle pass once every song was played (default: true)
    pub reshuffle_on_exhaustion: bool,

    /// Fixed RNG seed for reproducible shuffle order (default: none)
    pub shuffle_seed: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            history_size: 50,
            shuffle_algorithm: ShuffleAlgorithm::Random,
            reshuffle_on_exhaustion: true,
            shuffle_seed: None,
        }
    }
}
