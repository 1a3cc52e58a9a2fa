//! CRUD operations for the song table
use std::time::Duration;

use log::warn;
use tracing::instrument;

use crate::{
    db::{
        Database,
        schemas::{
            album::Album,
            artist::Artist,
            song::{Song, SongId},
            user::{User, UserId},
        },
    },
    errors::{Error, StorageResult},
};

impl Song {
    #[instrument(skip(db))]
    pub fn create(db: &mut Database, song: Self) -> Self {
        db.songs.push(song.clone());
        song
    }

    /// Create a new [`Song`] inside an existing album.
    ///
    /// The song is related to the album and to the album's owning artist,
    /// and both have their statistics updated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlbumNotFound`] if no album has the given title.
    #[instrument(skip(db))]
    pub fn create_in_album(
        db: &mut Database,
        title: &str,
        album_title: &str,
        runtime: Duration,
    ) -> StorageResult<Self> {
        let album = Album::read_by_title(db, album_title)
            .ok_or_else(|| Error::AlbumNotFound(album_title.into()))?;

        let song = Self::create(
            db,
            Self {
                id: Self::generate_id(),
                title: title.into(),
                artist: album.artist.clone(),
                album: album.title.clone(),
                runtime,
                likes: 0,
            },
        );

        Album::add_songs(db, &album.id, &[song.id.clone()])?;

        match Album::read_artist(db, &album.id) {
            Some(artist) => Artist::add_songs(db, &artist.id, &[song.id.clone()])?,
            None => warn!("album {} has no owning artist", album.title),
        }

        Ok(song)
    }

    #[instrument(skip(db))]
    pub fn read_all(db: &Database) -> Vec<Self> {
        db.songs.clone()
    }

    #[instrument(skip(db))]
    pub fn read(db: &Database, id: &SongId) -> Option<Self> {
        db.songs.iter().find(|song| &song.id == id).cloned()
    }

    #[instrument(skip(db))]
    pub fn read_by_title(db: &Database, title: &str) -> Option<Self> {
        db.songs.iter().find(|song| &*song.title == title).cloned()
    }

    /// The album this song belongs to.
    #[instrument(skip(db))]
    pub fn read_album(db: &Database, id: &SongId) -> Option<Album> {
        db.album_to_song
            .incoming(id)
            .next()
            .and_then(|album_id| Album::read(db, album_id))
    }

    /// The artist this song belongs to, through its album.
    #[instrument(skip(db))]
    pub fn read_artist(db: &Database, id: &SongId) -> Option<Artist> {
        db.artist_to_song
            .incoming(id)
            .next()
            .and_then(|artist_id| Artist::read(db, artist_id))
    }

    /// Record a like from a user on this song.
    ///
    /// Idempotent per (user, song) pair: the first like increments the
    /// song's and its owning artist's counters and records the liker in the
    /// relation tables; repeats leave the catalog unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UserNotFound`] / [`Error::SongNotFound`] if either
    /// id is unknown.
    #[instrument(skip(db))]
    pub fn like(db: &mut Database, id: &SongId, user_id: &UserId) -> StorageResult<Self> {
        if User::read(db, user_id).is_none() {
            return Err(Error::UserNotFound(user_id.to_string().into()));
        }

        let Some(index) = db.songs.iter().position(|song| &song.id == id) else {
            return Err(Error::SongNotFound(id.to_string().into()));
        };

        if !db.song_to_liker.relate(id.clone(), user_id.clone()) {
            // this user already likes the song
            return Ok(db.songs[index].clone());
        }

        db.songs[index].likes += 1;

        // propagate the like to the owning artist
        match db.artist_to_song.incoming(id).next().cloned() {
            Some(artist_id) => {
                db.artist_to_liker.relate(artist_id.clone(), user_id.clone());
                if let Some(artist) = db.artists.iter_mut().find(|artist| artist.id == artist_id) {
                    artist.likes += 1;
                }
            }
            None => warn!("song {} has no owning artist", db.songs[index].title),
        }

        Ok(db.songs[index].clone())
    }

    /// The song with the most accumulated likes.
    ///
    /// Returns `None` when no likes have been recorded at all; the
    /// earliest-created song wins a tie.
    #[instrument(skip(db))]
    #[must_use]
    pub fn most_popular(db: &Database) -> Option<Self> {
        db.songs
            .iter()
            .filter(|song| song.likes > 0)
            .fold(None, |best: Option<&Self>, song| match best {
                Some(b) if song.likes > b.likes => Some(song),
                None => Some(song),
                _ => best,
            })
            .cloned()
    }
}
