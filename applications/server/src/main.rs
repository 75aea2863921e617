/// Riff Server - playback sessions over HTTP
use clap::{Parser, Subcommand};
use riff_library::Library;
use riff_server::{config::ServerConfig, create_router, state::AppState};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "riff-server")]
#[command(about = "Riff playback session server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the playlists in the catalog
    Playlists {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "riff_server=info,riff_playback=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Playlists { config } => {
            list_playlists(config)?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Riff Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let library = Arc::new(load_library(&config)?);

    // Build application state
    let app_state = AppState::new(library, config.playback.clone());
    tracing::info!(
        "Session registry ready (history size {}, shuffle {:?})",
        config.playback.history_size,
        config.playback.shuffle_algorithm
    );

    // Build router
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn list_playlists(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path.as_deref())?;
    let library = load_library(&config)?;

    println!("Playlists:");
    for record in library.playlists() {
        println!(
            "  {} - {} ({} songs, owner {})",
            record.id,
            record.name,
            record.song_ids.len(),
            record.owner_id
        );
    }

    Ok(())
}

/// Load the catalog, starting empty when the file does not exist yet
fn load_library(config: &ServerConfig) -> anyhow::Result<Library> {
    let path = &config.library.path;
    if !path.exists() {
        tracing::warn!("Library file {:?} not found, starting with an empty catalog", path);
        return Ok(Library::empty());
    }

    Ok(Library::load(path)?)
}
