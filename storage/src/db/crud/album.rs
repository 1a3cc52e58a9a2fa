//! CRUD operations for the album table
use std::time::Duration;

use tracing::instrument;

use crate::{
    db::{
        Database,
        schemas::{
            album::{Album, AlbumId},
            artist::Artist,
            song::{Song, SongId},
        },
    },
    errors::{Error, StorageResult},
};

impl Album {
    #[instrument(skip(db))]
    pub fn create(db: &mut Database, album: Self) -> Self {
        db.albums.push(album.clone());
        album
    }

    /// Create an album owned by the named artist.
    ///
    /// If the catalog doesn't know the artist yet, they are created first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArtistNotFound`] if the owning artist cannot be
    /// found while its statistics are updated.
    #[instrument(skip(db))]
    pub fn create_for_artist(
        db: &mut Database,
        title: &str,
        artist_name: &str,
    ) -> StorageResult<Self> {
        let artist = Artist::read_or_create_by_name(db, artist_name);

        let album = Self::create(
            db,
            Self {
                id: Self::generate_id(),
                title: title.into(),
                artist: artist.name.clone(),
                runtime: Duration::ZERO,
                song_count: 0,
            },
        );

        Artist::add_albums(db, &artist.id, &[album.id.clone()])?;

        Ok(album)
    }

    #[instrument(skip(db))]
    pub fn read_all(db: &Database) -> Vec<Self> {
        db.albums.clone()
    }

    #[instrument(skip(db))]
    pub fn read(db: &Database, id: &AlbumId) -> Option<Self> {
        db.albums.iter().find(|album| &album.id == id).cloned()
    }

    #[instrument(skip(db))]
    pub fn read_by_title(db: &Database, title: &str) -> Option<Self> {
        db.albums
            .iter()
            .find(|album| &*album.title == title)
            .cloned()
    }

    /// The artist this album belongs to.
    #[instrument(skip(db))]
    pub fn read_artist(db: &Database, id: &AlbumId) -> Option<Artist> {
        db.artist_to_album
            .incoming(id)
            .next()
            .and_then(|artist_id| Artist::read(db, artist_id))
    }

    #[instrument(skip(db))]
    pub fn read_songs(db: &Database, id: &AlbumId) -> Vec<Song> {
        db.album_to_song
            .outgoing(id)
            .filter_map(|song_id| Song::read(db, song_id))
            .collect()
    }

    /// Relate songs to this album and update its statistics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlbumNotFound`] if the id is unknown.
    #[instrument(skip(db))]
    pub fn add_songs(db: &mut Database, id: &AlbumId, song_ids: &[SongId]) -> StorageResult<()> {
        for song_id in song_ids {
            db.album_to_song.relate(id.clone(), song_id.clone());
        }

        Self::repair(db, id)
    }

    /// Recompute `song_count` and `runtime` from the relation tables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlbumNotFound`] if the id is unknown.
    #[instrument(skip(db))]
    pub fn repair(db: &mut Database, id: &AlbumId) -> StorageResult<()> {
        let songs = Self::read_songs(db, id);

        let album = db
            .albums
            .iter_mut()
            .find(|album| &album.id == id)
            .ok_or_else(|| Error::AlbumNotFound(id.to_string().into()))?;

        album.song_count = songs.len();
        album.runtime = songs.iter().map(|song| song.runtime).sum();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seed_album, seed_song};

    use anyhow::Result;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_for_artist_creates_missing_artist() -> Result<()> {
        let mut db = Database::new();

        let album = Album::create_for_artist(&mut db, "Test Album", "Test Artist")?;
        assert_eq!(&*album.artist, "Test Artist");

        // the artist was auto-created and owns the album
        let artist = Artist::read_by_name(&db, "Test Artist").unwrap();
        assert_eq!(artist.album_count, 1);
        assert_eq!(Album::read_artist(&db, &album.id), Some(artist));

        Ok(())
    }

    #[test]
    fn test_create_for_artist_reuses_existing_artist() -> Result<()> {
        let mut db = Database::new();

        let first = Album::create_for_artist(&mut db, "First Album", "Test Artist")?;
        let second = Album::create_for_artist(&mut db, "Second Album", "Test Artist")?;

        assert_eq!(Artist::read_all(&db).len(), 1);

        let artist = Artist::read_by_name(&db, "Test Artist").unwrap();
        assert_eq!(artist.album_count, 2);
        assert_eq!(Artist::read_albums(&db, &artist.id), vec![first, second]);

        Ok(())
    }

    #[test]
    fn test_read_by_title() -> Result<()> {
        let mut db = Database::new();
        let album = seed_album(&mut db, "Test Album", "Test Artist")?;

        assert_eq!(Album::read_by_title(&db, "Test Album"), Some(album));
        assert_eq!(Album::read_by_title(&db, "Unknown"), None);

        Ok(())
    }

    #[test]
    fn test_add_songs_updates_statistics() -> Result<()> {
        let mut db = Database::new();
        let album = seed_album(&mut db, "Test Album", "Test Artist")?;
        let song = seed_song(&mut db, "Test Song", "Test Album", 120)?;

        let read = Album::read(&db, &album.id).unwrap();
        assert_eq!(read.song_count, 1);
        assert_eq!(read.runtime, song.runtime);
        assert_eq!(Album::read_songs(&db, &album.id), vec![song]);

        Ok(())
    }

    #[test]
    fn test_repair_unknown_album() {
        let mut db = Database::new();
        let id = Album::generate_id();

        let result = Album::repair(&mut db, &id);
        assert_eq!(result, Err(Error::AlbumNotFound(id.to_string().into())));
    }
}
