mod ids;
mod playlist;
mod song;

pub use ids::{AlbumId, ArtistId, PlaylistId, SongId, UserId};
pub use playlist::Playlist;
pub use song::Song;
