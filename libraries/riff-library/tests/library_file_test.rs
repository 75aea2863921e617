//! Catalog file tests
//!
//! Load/save behaviour against real files in a temp directory.

use riff_core::{PlaylistId, PlaylistProvider, Song, SongId, UserId};
use riff_library::{Library, LibraryError, PlaylistRecord};
use std::path::PathBuf;
use tempfile::TempDir;

const SAMPLE: &str = r#"{
    "songs": [
        { "id": "s1", "title": "Intro", "file_path": "/music/intro.flac", "duration_ms": 61000 },
        { "id": "s2", "title": "Theme", "file_path": "/music/theme.flac", "genre": "Ambient" },
        { "id": "s3", "title": "Outro", "file_path": "/music/outro.flac" }
    ],
    "playlists": [
        { "id": "morning", "name": "Morning", "owner_id": "alice", "song_ids": ["s1", "s2", "s3"] },
        { "id": "empty", "name": "Nothing Yet", "owner_id": "bob" }
    ]
}"#;

#[test]
fn load_reads_songs_and_playlists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("library.json");
    std::fs::write(&path, SAMPLE).unwrap();

    let library = Library::load(&path).unwrap();
    assert_eq!(library.song_count(), 3);
    assert_eq!(library.playlist_count(), 2);

    let morning = library
        .get_playlist_by_id(&PlaylistId::new("morning"))
        .unwrap()
        .unwrap();
    assert_eq!(morning.owner_id, UserId::new("alice"));
    assert_eq!(morning.songs[1].genre.as_deref(), Some("Ambient"));

    let empty = library
        .get_playlist_by_id(&PlaylistId::new("empty"))
        .unwrap()
        .unwrap();
    assert!(empty.is_empty());
}

#[test]
fn save_then_load_preserves_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("library.json");

    let library = Library::empty();
    let mut song = Song::with_id(SongId::new("s1"), "Intro", PathBuf::from("/music/intro.flac"));
    song.duration_ms = 1_000;
    library.insert_song(song.clone());

    let mut record = PlaylistRecord::new(UserId::new("alice"), "Mine");
    record.song_ids = vec![song.id.clone(), song.id.clone()];
    let playlist_id = record.id.clone();
    library.insert_playlist(record).unwrap();

    library.save(&path).unwrap();
    let reloaded = Library::load(&path).unwrap();

    let playlist = reloaded.get_playlist_by_id(&playlist_id).unwrap().unwrap();
    assert_eq!(playlist.name, "Mine");
    assert_eq!(playlist.songs, vec![song.clone(), song]);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Library::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LibraryError::Io { .. }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("library.json");
    std::fs::write(&path, "{ \"songs\": [ { \"id\": 42 } ] }").unwrap();

    let err = Library::load(&path).unwrap_err();
    assert!(matches!(err, LibraryError::Parse(_)));
}

#[test]
fn removed_playlist_is_no_longer_resolvable() {
    let library = Library::from_json_str(SAMPLE).unwrap();
    let id = PlaylistId::new("morning");

    assert!(library.remove_playlist(&id).is_some());
    assert!(library.get_playlist_by_id(&id).unwrap().is_none());
}
