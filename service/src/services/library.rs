//! Snapshot queries over the whole library.
use tracing::instrument;

use crescendo_storage::db::{
    Database, health,
    schemas::{
        album::{Album, AlbumBrief},
        artist::{Artist, ArtistBrief},
        playlist::{Playlist, PlaylistBrief},
        song::{Song, SongBrief},
        user::User,
    },
};

use crate::state::library::{LibraryBrief, LibraryFull, LibraryHealth};

/// Entity counts for the whole library.
#[instrument(skip(db))]
#[must_use]
pub fn brief(db: &Database) -> LibraryBrief {
    LibraryBrief {
        users: health::count_users(db),
        artists: health::count_artists(db),
        albums: health::count_albums(db),
        songs: health::count_songs(db),
        playlists: health::count_playlists(db),
    }
}

/// An owned snapshot of every entity table.
#[instrument(skip(db))]
#[must_use]
pub fn full(db: &Database) -> LibraryFull {
    LibraryFull {
        users: User::read_all(db).into(),
        artists: Artist::read_all(db).into(),
        albums: Album::read_all(db).into(),
        songs: Song::read_all(db).into(),
        playlists: Playlist::read_all(db).into(),
    }
}

/// Counts plus orphan statistics for the whole library.
#[instrument(skip(db))]
#[must_use]
pub fn health(db: &Database) -> LibraryHealth {
    LibraryHealth {
        users: health::count_users(db),
        artists: health::count_artists(db),
        albums: health::count_albums(db),
        songs: health::count_songs(db),
        playlists: health::count_playlists(db),
        orphaned_artists: health::count_orphaned_artists(db),
        orphaned_albums: health::count_orphaned_albums(db),
        orphaned_playlists: health::count_orphaned_playlists(db),
        unliked_songs: health::count_unliked_songs(db),
    }
}

/// Brief summaries of every artist, in catalog order.
#[instrument(skip(db))]
#[must_use]
pub fn artists_brief(db: &Database) -> Vec<ArtistBrief> {
    Artist::read_all(db).iter().map(Into::into).collect()
}

/// Brief summaries of every album, in catalog order.
#[instrument(skip(db))]
#[must_use]
pub fn albums_brief(db: &Database) -> Vec<AlbumBrief> {
    Album::read_all(db).iter().map(Into::into).collect()
}

/// Brief summaries of every song, in catalog order.
#[instrument(skip(db))]
#[must_use]
pub fn songs_brief(db: &Database) -> Vec<SongBrief> {
    Song::read_all(db).iter().map(Into::into).collect()
}

/// Brief summaries of every playlist, in catalog order.
#[instrument(skip(db))]
#[must_use]
pub fn playlists_brief(db: &Database) -> Vec<PlaylistBrief> {
    Playlist::read_all(db).iter().map(Into::into).collect()
}
