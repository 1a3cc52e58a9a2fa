use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::RecordId;

pub type AlbumId = RecordId;

pub const TABLE_NAME: &str = "album";

/// This struct holds all the metadata about a particular [`Album`].
/// An [`Album`] is a collection of [`Song`](super::song::Song)s owned by
/// exactly one [`Artist`](super::artist::Artist).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Album {
    /// the unique identifier for this [`Album`].
    pub id: AlbumId,

    /// Title of the [`Album`].
    pub title: Arc<str>,

    /// Name of the owning artist.
    pub artist: Arc<str>,

    /// Total runtime.
    pub runtime: Duration,

    /// the number of songs this album has.
    pub song_count: usize,
}

impl Album {
    #[must_use]
    pub fn generate_id() -> AlbumId {
        RecordId::generate(TABLE_NAME)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AlbumBrief {
    pub id: AlbumId,
    pub title: Arc<str>,
    pub artist: Arc<str>,
    pub runtime: Duration,
    pub songs: usize,
}

impl From<Album> for AlbumBrief {
    fn from(album: Album) -> Self {
        Self {
            id: album.id,
            title: album.title,
            artist: album.artist,
            runtime: album.runtime,
            songs: album.song_count,
        }
    }
}

impl From<&Album> for AlbumBrief {
    fn from(album: &Album) -> Self {
        Self {
            id: album.id.clone(),
            title: album.title.clone(),
            artist: album.artist.clone(),
            runtime: album.runtime,
            songs: album.song_count,
        }
    }
}
