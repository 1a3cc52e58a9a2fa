use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::RecordId;

pub type PlaylistId = RecordId;

pub const TABLE_NAME: &str = "playlist";

/// This struct holds all the metadata about a particular [`Playlist`].
/// A [`Playlist`] is a collection of [`Song`](super::song::Song)s curated
/// by the [`User`](super::user::User) who created it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Playlist {
    /// the unique identifier for this [`Playlist`].
    pub id: PlaylistId,

    /// The [`Playlist`]'s name.
    pub name: Arc<str>,

    /// Total runtime.
    pub runtime: Duration,

    /// the number of songs this playlist has.
    pub song_count: usize,
}

impl Playlist {
    #[must_use]
    pub fn generate_id() -> PlaylistId {
        RecordId::generate(TABLE_NAME)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PlaylistBrief {
    pub id: PlaylistId,
    pub name: Arc<str>,
    pub runtime: Duration,
    pub songs: usize,
}

impl From<Playlist> for PlaylistBrief {
    fn from(playlist: Playlist) -> Self {
        Self {
            id: playlist.id,
            name: playlist.name,
            runtime: playlist.runtime,
            songs: playlist.song_count,
        }
    }
}

impl From<&Playlist> for PlaylistBrief {
    fn from(playlist: &Playlist) -> Self {
        Self {
            id: playlist.id.clone(),
            name: playlist.name.clone(),
            runtime: playlist.runtime,
            songs: playlist.song_count,
        }
    }
}
