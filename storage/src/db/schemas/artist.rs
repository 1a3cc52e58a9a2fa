use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::RecordId;

pub type ArtistId = RecordId;

pub const TABLE_NAME: &str = "artist";

/// This struct holds all the metadata about a particular [`Artist`].
/// An [`Artist`] is a collection of [`Album`](super::album::Album)s.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Artist {
    /// the unique identifier for this [`Artist`].
    pub id: ArtistId,

    /// The [`Artist`]'s name.
    pub name: Arc<str>,

    /// Total runtime.
    pub runtime: Duration,

    /// the number of albums this artist has.
    pub album_count: usize,

    /// the number of songs this artist has.
    pub song_count: usize,

    /// accumulated like count, one per (user, song) first-like.
    pub likes: usize,
}

impl Artist {
    #[must_use]
    pub fn generate_id() -> ArtistId {
        RecordId::generate(TABLE_NAME)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ArtistBrief {
    pub id: ArtistId,
    pub name: Arc<str>,
    pub runtime: Duration,
    pub albums: usize,
    pub songs: usize,
    pub likes: usize,
}

impl From<Artist> for ArtistBrief {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            runtime: artist.runtime,
            albums: artist.album_count,
            songs: artist.song_count,
            likes: artist.likes,
        }
    }
}

impl From<&Artist> for ArtistBrief {
    fn from(artist: &Artist) -> Self {
        Self {
            id: artist.id.clone(),
            name: artist.name.clone(),
            runtime: artist.runtime,
            albums: artist.album_count,
            songs: artist.song_count,
            likes: artist.likes,
        }
    }
}
