//! Shuffle algorithms and shuffle pass bookkeeping
//!
//! Implements both pure random (Fisher-Yates) and smart shuffle algorithms
//! over snapshot indices, plus the [`ShuffleOrder`] that walks a shuffled pass.

use crate::navigation;
use crate::types::{Direction, PlaybackConfig, PlaybackMode, ShuffleAlgorithm};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use riff_core::{ArtistId, Song};
use std::collections::BTreeMap;

/// Build a random permutation of `0..songs.len()`
pub fn shuffle_indices(songs: &[Song], algorithm: ShuffleAlgorithm, rng: &mut StdRng) -> Vec<usize> {
    match algorithm {
        ShuffleAlgorithm::Random => shuffle_random(songs.len(), rng),
        ShuffleAlgorithm::Smart => shuffle_smart(songs, rng),
    }
}

/// Pure random shuffle using Fisher-Yates algorithm
///
/// Each song has equal probability of appearing at any position.
/// Simple, fair, but can result in same artist playing consecutively.
fn shuffle_random(len: usize, rng: &mut StdRng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}

/// Smart shuffle algorithm
///
/// Goals:
/// - Avoid same artist playing consecutively (when possible)
/// - Distribute artists evenly throughout playback
/// - Maintain some randomness (not fully deterministic)
///
/// Algorithm:
/// 1. Group songs by artist (songs without an artist form one group)
/// 2. Randomize within artist groups and shuffle the group order
/// 3. Interleave groups round-robin to maximize distance between same artist
fn shuffle_smart(songs: &[Song], rng: &mut StdRng) -> Vec<usize> {
    if songs.len() <= 2 {
        // Not enough songs for smart shuffling
        return shuffle_random(songs.len(), rng);
    }

    // BTreeMap keeps group order independent of hashing so seeded runs repeat
    let mut by_artist: BTreeMap<Option<&ArtistId>, Vec<usize>> = BTreeMap::new();
    for (index, song) in songs.iter().enumerate() {
        by_artist
            .entry(song.artist_id.as_ref())
            .or_default()
            .push(index);
    }

    let mut groups: Vec<Vec<usize>> = by_artist.into_values().collect();
    for group in &mut groups {
        group.shuffle(rng);
    }
    groups.shuffle(rng);

    let longest = groups.iter().map(Vec::len).max().unwrap_or(0);
    let mut result = Vec::with_capacity(songs.len());
    for round in 0..longest {
        result.extend(groups.iter().filter_map(|group| group.get(round).copied()));
    }
    result
}

/// One shuffled pass over a playlist snapshot and the position within it
///
/// Positions move with sequential arithmetic; the permutation maps them to
/// snapshot indices. When a pass is exhausted and reshuffling is enabled, a
/// new pass starts whose first song differs from the one just played.
#[derive(Debug, Clone)]
pub(crate) struct ShuffleOrder {
    order: Vec<usize>,
    position: Option<usize>,
    /// Next pass, generated early when peeked across a pass boundary
    upcoming: Option<Vec<usize>>,
    algorithm: ShuffleAlgorithm,
    reshuffle: bool,
    rng: StdRng,
}

impl ShuffleOrder {
    /// Create an empty order configured from `config`
    pub fn new(config: &PlaybackConfig) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            order: Vec::new(),
            position: None,
            upcoming: None,
            algorithm: config.shuffle_algorithm,
            reshuffle: config.reshuffle_on_exhaustion,
            rng,
        }
    }

    /// Start a fresh pass over `songs`
    ///
    /// If `current` is a snapshot index it becomes position 0 of the pass,
    /// already played; otherwise the pass has not started.
    pub fn rebuild(&mut self, songs: &[Song], current: Option<usize>) {
        let mut order = shuffle_indices(songs, self.algorithm, &mut self.rng);
        self.position = None;

        if let Some(at) = current.and_then(|cur| order.iter().position(|&i| i == cur)) {
            let index = order.remove(at);
            order.insert(0, index);
            self.position = Some(0);
        }

        self.order = order;
        self.upcoming = None;
    }

    /// Snapshot index of the current song
    pub fn current(&self) -> Option<usize> {
        self.position.and_then(|p| self.order.get(p).copied())
    }

    /// Advance to the next song, starting a new pass if allowed
    pub fn next(&mut self, songs: &[Song]) -> Option<usize> {
        if let Some(p) = self.step(Direction::Forward) {
            self.position = Some(p);
            return Some(self.order[p]);
        }

        if !self.reshuffle || songs.is_empty() {
            return None;
        }

        let order = match self.upcoming.take() {
            Some(order) => order,
            None => self.next_pass(songs),
        };
        self.order = order;
        self.position = Some(0);
        self.order.first().copied()
    }

    /// Step back within the current pass; never crosses into an earlier pass
    pub fn previous(&mut self) -> Option<usize> {
        let p = self.step(Direction::Backward)?;
        self.position = Some(p);
        Some(self.order[p])
    }

    /// The song `next` would return, without moving
    pub fn peek_next(&mut self, songs: &[Song]) -> Option<usize> {
        if let Some(p) = self.step(Direction::Forward) {
            return Some(self.order[p]);
        }

        if !self.reshuffle || songs.is_empty() {
            return None;
        }

        if self.upcoming.is_none() {
            self.upcoming = Some(self.next_pass(songs));
        }
        self.upcoming.as_ref().and_then(|order| order.first().copied())
    }

    /// Whether `next` would produce a song
    pub fn has_more(&self, len: usize) -> bool {
        navigation::has_more(PlaybackMode::Shuffle, self.position, self.order.len())
            || (self.reshuffle && len > 0)
    }

    /// Whether exhausting a pass starts another
    pub fn reshuffles(&self) -> bool {
        self.reshuffle
    }

    fn step(&self, direction: Direction) -> Option<usize> {
        navigation::step(PlaybackMode::Shuffle, self.position, self.order.len(), direction)
    }

    fn next_pass(&mut self, songs: &[Song]) -> Vec<usize> {
        let mut order = shuffle_indices(songs, self.algorithm, &mut self.rng);

        // Never open a pass with the song that closed the previous one
        if let Some(last) = self.current() {
            if order.len() > 1 && order[0] == last {
                let end = order.len() - 1;
                order.swap(0, end);
            }
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riff_core::SongId;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn create_test_song(id: &str, artist: &str) -> Song {
        let mut song = Song::with_id(
            SongId::new(id),
            format!("Song {}", id),
            PathBuf::from(format!("/music/{}.mp3", id)),
        );
        song.artist_id = Some(ArtistId::new(artist));
        song
    }

    fn songs(count: usize) -> Vec<Song> {
        (0..count)
            .map(|i| create_test_song(&i.to_string(), &format!("Artist {}", i)))
            .collect()
    }

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn config(seed: u64, reshuffle: bool) -> PlaybackConfig {
        PlaybackConfig {
            shuffle_seed: Some(seed),
            reshuffle_on_exhaustion: reshuffle,
            ..Default::default()
        }
    }

    #[test]
    fn random_shuffle_changes_order() {
        let songs = songs(20);
        let order = shuffle_indices(&songs, ShuffleAlgorithm::Random, &mut seeded(1));

        let identity: Vec<usize> = (0..20).collect();
        assert_ne!(order, identity);
    }

    #[test]
    fn random_shuffle_preserves_all_songs() {
        let songs = songs(3);
        let order = shuffle_indices(&songs, ShuffleAlgorithm::Random, &mut seeded(2));

        let unique: HashSet<usize> = order.iter().copied().collect();
        assert_eq!(unique, (0..3).collect());
    }

    #[test]
    fn smart_shuffle_distributes_artists() {
        let songs = vec![
            create_test_song("1a", "Artist A"),
            create_test_song("1b", "Artist A"),
            create_test_song("1c", "Artist A"),
            create_test_song("2a", "Artist B"),
            create_test_song("2b", "Artist B"),
            create_test_song("2c", "Artist B"),
        ];

        let order = shuffle_indices(&songs, ShuffleAlgorithm::Smart, &mut seeded(3));

        // Two equal groups interleave perfectly
        for pair in order.windows(2) {
            assert_ne!(songs[pair[0]].artist_id, songs[pair[1]].artist_id);
        }
    }

    #[test]
    fn smart_shuffle_with_single_artist() {
        let songs: Vec<Song> = (0..3)
            .map(|i| create_test_song(&i.to_string(), "Artist A"))
            .collect();

        // Should not panic, just randomize
        let order = shuffle_indices(&songs, ShuffleAlgorithm::Smart, &mut seeded(4));
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn smart_shuffle_empty_and_single() {
        assert!(shuffle_indices(&[], ShuffleAlgorithm::Smart, &mut seeded(5)).is_empty());
        assert_eq!(
            shuffle_indices(&songs(1), ShuffleAlgorithm::Smart, &mut seeded(5)),
            vec![0]
        );
    }

    #[test]
    fn same_seed_same_order() {
        let songs = songs(12);
        let a = shuffle_indices(&songs, ShuffleAlgorithm::Smart, &mut seeded(9));
        let b = shuffle_indices(&songs, ShuffleAlgorithm::Smart, &mut seeded(9));
        assert_eq!(a, b);
    }

    #[test]
    fn pass_visits_every_song_once() {
        let songs = songs(8);
        let mut order = ShuffleOrder::new(&config(11, false));
        order.rebuild(&songs, None);

        let mut seen = HashSet::new();
        while let Some(index) = order.next(&songs) {
            assert!(seen.insert(index), "index {} visited twice", index);
        }
        assert_eq!(seen.len(), 8);
        assert!(!order.has_more(songs.len()));
    }

    #[test]
    fn rebuild_puts_current_song_first() {
        let songs = songs(6);
        let mut order = ShuffleOrder::new(&config(12, true));
        order.rebuild(&songs, Some(4));

        assert_eq!(order.current(), Some(4));
        // Already at the start of the pass
        assert_eq!(order.previous(), None);

        let mut rest = HashSet::new();
        for _ in 0..5 {
            rest.insert(order.next(&songs).unwrap());
        }
        assert!(!rest.contains(&4));
        assert_eq!(rest.len(), 5);
    }

    #[test]
    fn new_pass_does_not_repeat_last_song() {
        let songs = songs(2);
        for seed in 0..20 {
            let mut order = ShuffleOrder::new(&config(seed, true));
            order.rebuild(&songs, None);

            order.next(&songs);
            let last = order.next(&songs);
            let first_of_next_pass = order.next(&songs);
            assert_ne!(last, first_of_next_pass, "seed {}", seed);
        }
    }

    #[test]
    fn previous_stops_at_pass_start() {
        let songs = songs(3);
        let mut order = ShuffleOrder::new(&config(13, true));
        order.rebuild(&songs, None);

        assert_eq!(order.previous(), None);
        let first = order.next(&songs);
        let second = order.next(&songs);
        assert_eq!(order.previous(), first);
        assert_eq!(order.previous(), None);
        assert_eq!(order.next(&songs), second);
    }

    #[test]
    fn peek_across_pass_boundary_matches_next() {
        let songs = songs(4);
        let mut order = ShuffleOrder::new(&config(14, true));
        order.rebuild(&songs, None);
        for _ in 0..4 {
            order.next(&songs);
        }

        let current = order.current();
        let peeked = order.peek_next(&songs);
        assert_eq!(order.current(), current);
        assert_eq!(order.next(&songs), peeked);
    }
}
