//! Helpers for seeding a [`Database`] in tests.
use std::time::Duration;

use anyhow::Result;

use crate::db::{
    Database,
    schemas::{album::Album, song::Song, user::User},
};

/// Register a user.
pub fn seed_user(db: &mut Database, name: &str, mobile: &str) -> User {
    User::create(
        db,
        User {
            id: User::generate_id(),
            name: name.into(),
            mobile: mobile.into(),
        },
    )
}

/// Create an album, auto-creating its artist.
pub fn seed_album(db: &mut Database, title: &str, artist: &str) -> Result<Album> {
    Ok(Album::create_for_artist(db, title, artist)?)
}

/// Create a song in an existing album.
pub fn seed_song(db: &mut Database, title: &str, album: &str, secs: u64) -> Result<Song> {
    Ok(Song::create_in_album(
        db,
        title,
        album,
        Duration::from_secs(secs),
    )?)
}
