/// Playlist catalog API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use riff_core::{Playlist, PlaylistId, PlaylistProvider, UserId};
use riff_library::PlaylistRecord;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PlaylistSummary {
    pub id: PlaylistId,
    pub name: String,
    pub owner_id: UserId,
    pub song_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<PlaylistRecord> for PlaylistSummary {
    fn from(record: PlaylistRecord) -> Self {
        Self {
            song_count: record.song_ids.len(),
            id: record.id,
            name: record.name,
            owner_id: record.owner_id,
            created_at: record.created_at,
        }
    }
}

/// GET /api/playlists
/// List every playlist in the catalog
pub async fn list_playlists(State(app_state): State<AppState>) -> Json<Vec<PlaylistSummary>> {
    let playlists = app_state
        .library
        .playlists()
        .into_iter()
        .map(PlaylistSummary::from)
        .collect();
    Json(playlists)
}

/// GET /api/playlists/:id
/// Get a playlist with its songs resolved
pub async fn get_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Playlist>> {
    let playlist_id = PlaylistId::new(id);
    let playlist = app_state
        .library
        .get_playlist_by_id(&playlist_id)
        .map_err(|e| ServerError::Playback(e.into()))?
        .ok_or_else(|| ServerError::NotFound("Playlist not found".to_string()))?;

    Ok(Json(playlist))
}
