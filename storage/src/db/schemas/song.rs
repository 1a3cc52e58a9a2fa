use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::RecordId;

pub type SongId = RecordId;

pub const TABLE_NAME: &str = "song";

/// This struct holds all the metadata about a particular [`Song`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Song {
    /// The unique identifier for this [`Song`].
    pub id: SongId,
    /// Title of the [`Song`].
    pub title: Arc<str>,
    /// Name of the owning artist.
    pub artist: Arc<str>,
    /// Title of the owning album.
    pub album: Arc<str>,

    /// Total runtime of this [`Song`].
    pub runtime: Duration,

    /// accumulated like count, at most one per user.
    pub likes: usize,
}

impl Song {
    #[must_use]
    pub fn generate_id() -> SongId {
        RecordId::generate(TABLE_NAME)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SongBrief {
    pub id: SongId,
    pub title: Arc<str>,
    pub artist: Arc<str>,
    pub album: Arc<str>,
    pub runtime: Duration,
    pub likes: usize,
}

impl From<Song> for SongBrief {
    fn from(song: Song) -> Self {
        Self {
            id: song.id,
            title: song.title,
            artist: song.artist,
            album: song.album,
            runtime: song.runtime,
            likes: song.likes,
        }
    }
}

impl From<&Song> for SongBrief {
    fn from(song: &Song) -> Self {
        Self {
            id: song.id.clone(),
            title: song.title.clone(),
            artist: song.artist.clone(),
            album: song.album.clone(),
            runtime: song.runtime,
            likes: song.likes,
        }
    }
}
