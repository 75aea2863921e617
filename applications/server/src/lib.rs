//! Riff Server Library
//!
//! HTTP front end for per-user playback sessions over a JSON song catalog.
//!
//! This library exposes the router and its components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;

/// Build the application router with every route under `/api`
pub fn create_router(app_state: AppState) -> Router {
    let catalog_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/playlists", get(api::playlists::list_playlists))
        .route("/playlists/:id", get(api::playlists::get_playlist));

    let session_routes = Router::new()
        .route(
            "/sessions/:user_id",
            post(api::sessions::start_session)
                .get(api::sessions::get_session)
                .delete(api::sessions::stop_session),
        )
        .route("/sessions/:user_id/next", post(api::sessions::next_song))
        .route(
            "/sessions/:user_id/previous",
            post(api::sessions::previous_song),
        )
        .route("/sessions/:user_id/current", get(api::sessions::current_song))
        .route("/sessions/:user_id/peek", get(api::sessions::peek_next))
        .route("/sessions/:user_id/reset", post(api::sessions::reset))
        .route(
            "/sessions/:user_id/mode",
            get(api::sessions::get_mode).put(api::sessions::set_mode),
        )
        .route(
            "/sessions/:user_id/playlist",
            get(api::sessions::current_playlist),
        )
        .route(
            "/sessions/:user_id/remaining",
            get(api::sessions::remaining),
        )
        .route("/sessions/:user_id/history", get(api::sessions::history));

    Router::new()
        .nest("/api", catalog_routes.merge(session_routes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
