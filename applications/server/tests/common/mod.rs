/// Common test utilities and fixtures
use riff_library::Library;
use riff_playback::PlaybackConfig;
use riff_server::{create_router, state::AppState};
use std::sync::Arc;

/// Catalog with two playlists, one of them empty
pub const LIBRARY_JSON: &str = r#"{
    "songs": [
        { "id": "s1", "title": "Intro", "file_path": "/music/intro.flac", "duration_ms": 61000 },
        { "id": "s2", "title": "Bridge", "file_path": "/music/bridge.flac", "duration_ms": 184000 },
        { "id": "s3", "title": "Outro", "file_path": "/music/outro.flac", "duration_ms": 95000 }
    ],
    "playlists": [
        { "id": "mix", "name": "Mix", "owner_id": "alice", "song_ids": ["s1", "s2", "s3"] },
        { "id": "silence", "name": "Silence", "owner_id": "alice", "song_ids": [] }
    ]
}"#;

/// Router over the fixture catalog
pub fn create_test_app() -> (axum::Router, AppState) {
    let library = Library::from_json_str(LIBRARY_JSON).unwrap();
    let config = PlaybackConfig {
        shuffle_seed: Some(11),
        ..Default::default()
    };

    let app_state = AppState::new(Arc::new(library), config);
    (create_router(app_state.clone()), app_state)
}
