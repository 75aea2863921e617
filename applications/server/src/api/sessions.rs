/// Playback session API routes
///
/// Calls against a user without a session answer with nulls or `false`
/// rather than errors; only starting a session can fail.
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use riff_core::{Playlist, PlaylistId, Song, UserId};
use riff_playback::{PlaybackError, PlaybackMode, SessionInfo};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    pub playlist_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SetModeRequest {
    /// Mode name, e.g. "shuffle" or "Repeat All"
    pub mode: String,
}

#[derive(Debug, Serialize)]
pub struct SongResponse {
    pub song: Option<Song>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub active: bool,
    pub session: Option<SessionInfo>,
}

#[derive(Debug, Serialize)]
pub struct ModeResponse {
    pub mode: Option<PlaybackMode>,
    /// Display name of the mode
    pub name: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct PlaylistResponse {
    pub playlist: Option<Playlist>,
}

#[derive(Debug, Serialize)]
pub struct RemainingResponse {
    /// Songs after the current one, -1 without a session or current song
    pub remaining: i64,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub songs: Vec<Song>,
}

#[derive(Debug, Serialize)]
pub struct AckResponse {
    /// Whether a session was affected
    pub success: bool,
}

/// POST /api/sessions/:user_id
/// Start a playlist, replacing any existing session
pub async fn start_session(
    Path(user_id): Path<String>,
    State(app_state): State<AppState>,
    Json(req): Json<StartSessionRequest>,
) -> Result<Json<SongResponse>> {
    let user_id = UserId::new(user_id);
    let playlist_id = PlaylistId::new(req.playlist_id);

    let song = app_state
        .sessions
        .start_playlist(&playlist_id, &user_id)?
        .ok_or_else(|| ServerError::NotFound("Playlist not found or empty".to_string()))?;

    Ok(Json(SongResponse { song: Some(song) }))
}

/// DELETE /api/sessions/:user_id
/// Stop playback and drop the session
pub async fn stop_session(
    Path(user_id): Path<String>,
    State(app_state): State<AppState>,
) -> Json<AckResponse> {
    let success = app_state.sessions.stop_playback(&UserId::new(user_id));
    Json(AckResponse { success })
}

/// GET /api/sessions/:user_id
/// Session summary
pub async fn get_session(
    Path(user_id): Path<String>,
    State(app_state): State<AppState>,
) -> Json<SessionResponse> {
    let session = app_state.sessions.session_info(&UserId::new(user_id));
    Json(SessionResponse {
        active: session.is_some(),
        session,
    })
}

/// POST /api/sessions/:user_id/next
pub async fn next_song(
    Path(user_id): Path<String>,
    State(app_state): State<AppState>,
) -> Json<SongResponse> {
    let song = app_state.sessions.next_song(&UserId::new(user_id));
    Json(SongResponse { song })
}

/// POST /api/sessions/:user_id/previous
pub async fn previous_song(
    Path(user_id): Path<String>,
    State(app_state): State<AppState>,
) -> Json<SongResponse> {
    let song = app_state.sessions.previous_song(&UserId::new(user_id));
    Json(SongResponse { song })
}

/// GET /api/sessions/:user_id/current
pub async fn current_song(
    Path(user_id): Path<String>,
    State(app_state): State<AppState>,
) -> Json<SongResponse> {
    let song = app_state.sessions.current_song(&UserId::new(user_id));
    Json(SongResponse { song })
}

/// GET /api/sessions/:user_id/peek
/// The song "next" would return, without moving
pub async fn peek_next(
    Path(user_id): Path<String>,
    State(app_state): State<AppState>,
) -> Json<SongResponse> {
    let song = app_state.sessions.peek_next_song(&UserId::new(user_id));
    Json(SongResponse { song })
}

/// POST /api/sessions/:user_id/reset
pub async fn reset(
    Path(user_id): Path<String>,
    State(app_state): State<AppState>,
) -> Json<AckResponse> {
    let success = app_state.sessions.reset(&UserId::new(user_id));
    Json(AckResponse { success })
}

/// GET /api/sessions/:user_id/mode
pub async fn get_mode(
    Path(user_id): Path<String>,
    State(app_state): State<AppState>,
) -> Json<ModeResponse> {
    let mode = app_state.sessions.mode(&UserId::new(user_id));
    Json(ModeResponse {
        mode,
        name: mode.map(PlaybackMode::name),
    })
}

/// PUT /api/sessions/:user_id/mode
/// Switch mode, keeping the current song
pub async fn set_mode(
    Path(user_id): Path<String>,
    State(app_state): State<AppState>,
    Json(req): Json<SetModeRequest>,
) -> Result<Json<ModeResponse>> {
    let user_id = UserId::new(user_id);
    let mode: PlaybackMode = req
        .mode
        .parse()
        .map_err(|e: PlaybackError| ServerError::BadRequest(e.to_string()))?;

    if !app_state.sessions.set_mode(&user_id, mode) {
        return Ok(Json(ModeResponse {
            mode: None,
            name: None,
        }));
    }

    tracing::debug!(user = %user_id, %mode, "Playback mode changed");
    Ok(Json(ModeResponse {
        mode: Some(mode),
        name: Some(mode.name()),
    }))
}

/// GET /api/sessions/:user_id/playlist
/// The playlist snapshot the session is bound to
pub async fn current_playlist(
    Path(user_id): Path<String>,
    State(app_state): State<AppState>,
) -> Json<PlaylistResponse> {
    let playlist = app_state
        .sessions
        .current_playlist(&UserId::new(user_id))
        .map(|snapshot| Playlist::clone(&snapshot));
    Json(PlaylistResponse { playlist })
}

/// GET /api/sessions/:user_id/remaining
pub async fn remaining(
    Path(user_id): Path<String>,
    State(app_state): State<AppState>,
) -> Json<RemainingResponse> {
    let remaining = app_state.sessions.remaining_count(&UserId::new(user_id));
    Json(RemainingResponse { remaining })
}

/// GET /api/sessions/:user_id/history
/// Recently played songs, oldest first
pub async fn history(
    Path(user_id): Path<String>,
    State(app_state): State<AppState>,
) -> Json<HistoryResponse> {
    let songs = app_state.sessions.history(&UserId::new(user_id));
    Json(HistoryResponse { songs })
}
