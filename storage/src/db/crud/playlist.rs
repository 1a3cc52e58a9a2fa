//! CRUD operations for the playlist table
use std::time::Duration;

use tracing::instrument;

use crate::{
    db::{
        Database,
        schemas::{
            playlist::{Playlist, PlaylistId},
            song::{Song, SongId},
            user::{User, UserId},
        },
    },
    errors::{Error, StorageResult},
};

impl Playlist {
    #[instrument(skip(db))]
    pub fn create(db: &mut Database, playlist: Self) -> Self {
        db.playlists.push(playlist.clone());
        playlist
    }

    /// Create a playlist for `creator` containing every song whose runtime
    /// matches `runtime` exactly.
    ///
    /// The creator is registered as the playlist's first listener and as a
    /// follower.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UserNotFound`] if `creator` is unknown.
    #[instrument(skip(db))]
    pub fn create_by_runtime(
        db: &mut Database,
        creator: &UserId,
        name: &str,
        runtime: Duration,
    ) -> StorageResult<Self> {
        let song_ids: Vec<SongId> = db
            .songs
            .iter()
            .filter(|song| song.runtime == runtime)
            .map(|song| song.id.clone())
            .collect();

        Self::create_with_songs(db, creator, name, &song_ids)
    }

    /// Create a playlist for `creator` from an explicit list of song titles.
    ///
    /// Titles that match no song are skipped; duplicate titles don't produce
    /// duplicate members.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UserNotFound`] if `creator` is unknown.
    #[instrument(skip(db))]
    pub fn create_by_titles(
        db: &mut Database,
        creator: &UserId,
        name: &str,
        titles: &[String],
    ) -> StorageResult<Self> {
        let song_ids: Vec<SongId> = db
            .songs
            .iter()
            .filter(|song| titles.iter().any(|title| title.as_str() == &*song.title))
            .map(|song| song.id.clone())
            .collect();

        Self::create_with_songs(db, creator, name, &song_ids)
    }

    fn create_with_songs(
        db: &mut Database,
        creator: &UserId,
        name: &str,
        song_ids: &[SongId],
    ) -> StorageResult<Self> {
        if User::read(db, creator).is_none() {
            return Err(Error::UserNotFound(creator.to_string().into()));
        }

        let playlist = Self::create(
            db,
            Self {
                id: Self::generate_id(),
                name: name.into(),
                runtime: Duration::ZERO,
                song_count: 0,
            },
        );

        Self::add_songs(db, &playlist.id, song_ids)?;

        db.creator_to_playlist
            .relate(creator.clone(), playlist.id.clone());
        db.playlist_to_listener
            .relate(playlist.id.clone(), creator.clone());
        db.user_to_playlist
            .relate(creator.clone(), playlist.id.clone());

        Self::read(db, &playlist.id).ok_or_else(|| Error::PlaylistNotFound(playlist.name.clone()))
    }

    #[instrument(skip(db))]
    pub fn read_all(db: &Database) -> Vec<Self> {
        db.playlists.clone()
    }

    #[instrument(skip(db))]
    pub fn read(db: &Database, id: &PlaylistId) -> Option<Self> {
        db.playlists
            .iter()
            .find(|playlist| &playlist.id == id)
            .cloned()
    }

    #[instrument(skip(db))]
    pub fn read_by_name(db: &Database, name: &str) -> Option<Self> {
        db.playlists
            .iter()
            .find(|playlist| &*playlist.name == name)
            .cloned()
    }

    /// Relate songs to this playlist and update its statistics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlaylistNotFound`] if the id is unknown.
    #[instrument(skip(db))]
    pub fn add_songs(db: &mut Database, id: &PlaylistId, song_ids: &[SongId]) -> StorageResult<()> {
        for song_id in song_ids {
            db.playlist_to_song.relate(id.clone(), song_id.clone());
        }

        Self::repair(db, id)
    }

    /// Register a user as a listener of this playlist.
    ///
    /// A no-op if the user already listens to the playlist (the creator
    /// always does). New listeners also follow the playlist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlaylistNotFound`] / [`Error::UserNotFound`] if
    /// either id is unknown.
    #[instrument(skip(db))]
    pub fn add_listener(
        db: &mut Database,
        id: &PlaylistId,
        user_id: &UserId,
    ) -> StorageResult<Self> {
        let playlist =
            Self::read(db, id).ok_or_else(|| Error::PlaylistNotFound(id.to_string().into()))?;
        if User::read(db, user_id).is_none() {
            return Err(Error::UserNotFound(user_id.to_string().into()));
        }

        if db.playlist_to_listener.relate(id.clone(), user_id.clone()) {
            db.user_to_playlist.relate(user_id.clone(), id.clone());
        }

        Ok(playlist)
    }

    #[instrument(skip(db))]
    pub fn read_songs(db: &Database, id: &PlaylistId) -> Vec<Song> {
        db.playlist_to_song
            .outgoing(id)
            .filter_map(|song_id| Song::read(db, song_id))
            .collect()
    }

    #[instrument(skip(db))]
    pub fn read_listeners(db: &Database, id: &PlaylistId) -> Vec<User> {
        db.playlist_to_listener
            .outgoing(id)
            .filter_map(|user_id| User::read(db, user_id))
            .collect()
    }

    /// The user who created this playlist.
    #[instrument(skip(db))]
    pub fn read_creator(db: &Database, id: &PlaylistId) -> Option<User> {
        db.creator_to_playlist
            .incoming(id)
            .next()
            .and_then(|user_id| User::read(db, user_id))
    }

    /// Recompute `song_count` and `runtime` from the relation tables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlaylistNotFound`] if the id is unknown.
    #[instrument(skip(db))]
    pub fn repair(db: &mut Database, id: &PlaylistId) -> StorageResult<()> {
        let songs = Self::read_songs(db, id);

        let playlist = db
            .playlists
            .iter_mut()
            .find(|playlist| &playlist.id == id)
            .ok_or_else(|| Error::PlaylistNotFound(id.to_string().into()))?;

        playlist.song_count = songs.len();
        playlist.runtime = songs.iter().map(|song| song.runtime).sum();

        Ok(())
    }
}
