//! Recently played songs of one session

use riff_core::Song;
use std::collections::VecDeque;

/// Bounded play log, oldest entry dropped first
#[derive(Debug, Clone)]
pub(crate) struct PlayHistory {
    recent: VecDeque<Song>,
    capacity: usize,
}

impl PlayHistory {
    /// A capacity of 0 records nothing
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            recent: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn record(&mut self, song: Song) {
        if self.capacity == 0 {
            return;
        }
        if self.recent.len() == self.capacity {
            self.recent.pop_front();
        }
        self.recent.push_back(song);
    }

    /// Oldest first
    pub(crate) fn to_vec(&self) -> Vec<Song> {
        self.recent.iter().cloned().collect()
    }

    pub(crate) fn clear(&mut self) {
        self.recent.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riff_core::SongId;
    use std::path::PathBuf;

    fn song(id: &str) -> Song {
        Song::with_id(SongId::new(id), id, PathBuf::from(format!("/music/{}.ogg", id)))
    }

    fn ids(history: &PlayHistory) -> Vec<String> {
        history.to_vec().iter().map(|s| s.id.to_string()).collect()
    }

    #[test]
    fn full_log_drops_oldest() {
        let mut history = PlayHistory::new(3);
        for id in ["1", "2", "3", "4", "5"] {
            history.record(song(id));
        }
        assert_eq!(ids(&history), vec!["3", "4", "5"]);
    }

    #[test]
    fn repeated_songs_are_each_recorded() {
        let mut history = PlayHistory::new(5);
        history.record(song("a"));
        history.record(song("a"));
        assert_eq!(ids(&history), vec!["a", "a"]);
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let mut history = PlayHistory::new(0);
        history.record(song("1"));
        assert!(history.to_vec().is_empty());
    }

    #[test]
    fn clear_empties_the_log() {
        let mut history = PlayHistory::new(4);
        history.record(song("1"));
        history.clear();
        assert!(history.to_vec().is_empty());
    }
}
