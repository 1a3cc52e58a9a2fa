//! The catalog service: create/find/like operations forwarded to the
//! repository with entity-existence validation.
use std::time::Duration;

use log::info;
use tracing::instrument;

use crescendo_storage::{
    db::{
        Database,
        schemas::{
            album::Album,
            artist::{Artist, ArtistBrief},
            playlist::Playlist,
            song::{Song, SongBrief},
            user::User,
        },
    },
    errors::{Error, StorageResult},
};

/// Register a new user.
#[instrument(skip(db))]
pub fn create_user(db: &mut Database, name: &str, mobile: &str) -> User {
    let user = User::create(
        db,
        User {
            id: User::generate_id(),
            name: name.into(),
            mobile: mobile.into(),
        },
    );
    info!("registered user {} ({})", user.name, user.mobile);
    user
}

/// Register a new artist.
#[instrument(skip(db))]
pub fn create_artist(db: &mut Database, name: &str) -> Artist {
    let artist = Artist::create(
        db,
        Artist {
            id: Artist::generate_id(),
            name: name.into(),
            runtime: Duration::ZERO,
            album_count: 0,
            song_count: 0,
            likes: 0,
        },
    );
    info!("registered artist {}", artist.name);
    artist
}

/// Create an album owned by the named artist, auto-creating the artist if
/// the catalog doesn't know them yet.
///
/// # Errors
///
/// See [`Album::create_for_artist`].
#[instrument(skip(db))]
pub fn create_album(db: &mut Database, title: &str, artist: &str) -> StorageResult<Album> {
    let album = Album::create_for_artist(db, title, artist)?;
    info!("created album {} by {}", album.title, album.artist);
    Ok(album)
}

/// Add a song to an existing album.
///
/// # Errors
///
/// Returns [`Error::AlbumNotFound`] if the album does not exist.
#[instrument(skip(db))]
pub fn create_song(
    db: &mut Database,
    title: &str,
    album: &str,
    runtime: Duration,
) -> StorageResult<Song> {
    // validate the album before touching the song table
    if Album::read_by_title(db, album).is_none() {
        return Err(Error::AlbumNotFound(album.into()));
    }

    let song = Song::create_in_album(db, title, album, runtime)?;
    info!("created song {} on {}", song.title, song.album);
    Ok(song)
}

/// Create a playlist for the user with the given mobile number, containing
/// every song whose runtime matches exactly.
///
/// # Errors
///
/// Returns [`Error::UserNotFound`] if no user has the given mobile number.
#[instrument(skip(db))]
pub fn create_playlist_by_runtime(
    db: &mut Database,
    mobile: &str,
    name: &str,
    runtime: Duration,
) -> StorageResult<Playlist> {
    let user =
        User::read_by_mobile(db, mobile).ok_or_else(|| Error::UserNotFound(mobile.into()))?;

    let playlist = Playlist::create_by_runtime(db, &user.id, name, runtime)?;
    info!(
        "user {} created playlist {} ({} songs)",
        user.name, playlist.name, playlist.song_count
    );
    Ok(playlist)
}

/// Create a playlist for the user with the given mobile number from an
/// explicit list of song titles.
///
/// # Errors
///
/// Returns [`Error::UserNotFound`] if no user has the given mobile number.
#[instrument(skip(db))]
pub fn create_playlist_by_titles(
    db: &mut Database,
    mobile: &str,
    name: &str,
    titles: &[String],
) -> StorageResult<Playlist> {
    let user =
        User::read_by_mobile(db, mobile).ok_or_else(|| Error::UserNotFound(mobile.into()))?;

    let playlist = Playlist::create_by_titles(db, &user.id, name, titles)?;
    info!(
        "user {} created playlist {} ({} songs)",
        user.name, playlist.name, playlist.song_count
    );
    Ok(playlist)
}

/// Look up a playlist by name on behalf of a user.
///
/// If the user is neither the creator nor already a listener, they are
/// registered as a listener (and follower) as a side effect.
///
/// # Errors
///
/// Returns [`Error::UserNotFound`] / [`Error::PlaylistNotFound`] if either
/// lookup misses.
#[instrument(skip(db))]
pub fn find_playlist(db: &mut Database, mobile: &str, name: &str) -> StorageResult<Playlist> {
    let user =
        User::read_by_mobile(db, mobile).ok_or_else(|| Error::UserNotFound(mobile.into()))?;
    let playlist =
        Playlist::read_by_name(db, name).ok_or_else(|| Error::PlaylistNotFound(name.into()))?;

    Playlist::add_listener(db, &playlist.id, &user.id)
}

/// Record a like by the given user on the given song.
///
/// Liking a song the user already likes changes nothing.
///
/// # Errors
///
/// Returns [`Error::UserNotFound`] / [`Error::SongNotFound`] if either
/// lookup misses.
#[instrument(skip(db))]
pub fn like_song(db: &mut Database, mobile: &str, title: &str) -> StorageResult<Song> {
    let user =
        User::read_by_mobile(db, mobile).ok_or_else(|| Error::UserNotFound(mobile.into()))?;
    let song = Song::read_by_title(db, title).ok_or_else(|| Error::SongNotFound(title.into()))?;

    let song = Song::like(db, &song.id, &user.id)?;
    info!("user {} likes {} ({} likes)", user.name, song.title, song.likes);
    Ok(song)
}

/// The artist with the most accumulated likes.
///
/// `None` until at least one like has been recorded.
#[instrument(skip(db))]
#[must_use]
pub fn most_popular_artist(db: &Database) -> Option<ArtistBrief> {
    Artist::most_popular(db).map(Into::into)
}

/// The song with the most accumulated likes.
///
/// `None` until at least one like has been recorded.
#[instrument(skip(db))]
#[must_use]
pub fn most_popular_song(db: &Database) -> Option<SongBrief> {
    Song::most_popular(db).map(Into::into)
}
