//! Cursor arithmetic for the playback modes
//!
//! Every function maps `(cursor, len, direction)` to the new cursor, or `None`
//! when the move produces no song (the caller then leaves its cursor alone).
//! A cursor of `None` means "not started".

use crate::types::{Direction, PlaybackMode};

/// Move a cursor one step under `mode`
///
/// Shuffle moves sequentially through positions of its permutation, so it
/// shares the sequential arithmetic; the caller maps the result through the
/// permutation.
pub fn step(
    mode: PlaybackMode,
    cursor: Option<usize>,
    len: usize,
    direction: Direction,
) -> Option<usize> {
    match mode {
        PlaybackMode::Sequential | PlaybackMode::Shuffle => sequential(cursor, len, direction),
        PlaybackMode::RepeatAll => repeat_all(cursor, len, direction),
        PlaybackMode::RepeatOne => repeat_one(cursor, len, direction),
    }
}

/// Whether a "next" move would produce a song
///
/// For Shuffle this only answers for the current pass; whether a new pass
/// follows is the shuffle order's decision.
pub fn has_more(mode: PlaybackMode, cursor: Option<usize>, len: usize) -> bool {
    match mode {
        PlaybackMode::Sequential | PlaybackMode::Shuffle => match cursor {
            None => len > 0,
            Some(index) => index + 1 < len,
        },
        PlaybackMode::RepeatAll => len > 0,
        PlaybackMode::RepeatOne => cursor.is_some(),
    }
}

/// Play through once; stops at both ends without wrapping
pub fn sequential(cursor: Option<usize>, len: usize, direction: Direction) -> Option<usize> {
    match (direction, cursor) {
        (Direction::Forward, None) => (len > 0).then_some(0),
        (Direction::Forward, Some(index)) => (index + 1 < len).then_some(index + 1),
        (Direction::Backward, None) => None,
        (Direction::Backward, Some(index)) => index.checked_sub(1),
    }
}

/// Wrap around in both directions
pub fn repeat_all(cursor: Option<usize>, len: usize, direction: Direction) -> Option<usize> {
    if len == 0 {
        return None;
    }

    match (direction, cursor) {
        (Direction::Forward, None) => Some(0),
        (Direction::Forward, Some(index)) => Some((index + 1) % len),
        (Direction::Backward, None | Some(0)) => Some(len - 1),
        (Direction::Backward, Some(index)) => Some(index - 1),
    }
}

/// Start on the first song, then stay put in both directions
pub fn repeat_one(cursor: Option<usize>, len: usize, direction: Direction) -> Option<usize> {
    match (direction, cursor) {
        (Direction::Forward, None) => (len > 0).then_some(0),
        (Direction::Backward, None) => None,
        (_, Some(index)) => Some(index),
    }
}
