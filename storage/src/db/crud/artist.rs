//! CRUD operations for the artist table
use std::time::Duration;

use tracing::instrument;

use crate::{
    db::{
        Database,
        schemas::{
            album::{Album, AlbumId},
            artist::{Artist, ArtistId},
            song::{Song, SongId},
        },
    },
    errors::{Error, StorageResult},
};

impl Artist {
    #[instrument(skip(db))]
    pub fn create(db: &mut Database, artist: Self) -> Self {
        db.artists.push(artist.clone());
        artist
    }

    #[instrument(skip(db))]
    pub fn read_all(db: &Database) -> Vec<Self> {
        db.artists.clone()
    }

    #[instrument(skip(db))]
    pub fn read(db: &Database, id: &ArtistId) -> Option<Self> {
        db.artists.iter().find(|artist| &artist.id == id).cloned()
    }

    #[instrument(skip(db))]
    pub fn read_by_name(db: &Database, name: &str) -> Option<Self> {
        db.artists
            .iter()
            .find(|artist| &*artist.name == name)
            .cloned()
    }

    /// Read an artist by name, creating them if the catalog doesn't know
    /// them yet.
    #[instrument(skip(db))]
    pub fn read_or_create_by_name(db: &mut Database, name: &str) -> Self {
        if let Some(artist) = Self::read_by_name(db, name) {
            return artist;
        }

        Self::create(
            db,
            Self {
                id: Self::generate_id(),
                name: name.into(),
                runtime: Duration::ZERO,
                album_count: 0,
                song_count: 0,
                likes: 0,
            },
        )
    }

    /// Relate albums to this artist and update its statistics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArtistNotFound`] if the id is unknown.
    #[instrument(skip(db))]
    pub fn add_albums(
        db: &mut Database,
        id: &ArtistId,
        album_ids: &[AlbumId],
    ) -> StorageResult<()> {
        for album_id in album_ids {
            db.artist_to_album.relate(id.clone(), album_id.clone());
        }

        Self::repair(db, id)
    }

    /// Relate songs to this artist and update its statistics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArtistNotFound`] if the id is unknown.
    #[instrument(skip(db))]
    pub fn add_songs(db: &mut Database, id: &ArtistId, song_ids: &[SongId]) -> StorageResult<()> {
        for song_id in song_ids {
            db.artist_to_song.relate(id.clone(), song_id.clone());
        }

        Self::repair(db, id)
    }

    #[instrument(skip(db))]
    pub fn read_albums(db: &Database, id: &ArtistId) -> Vec<Album> {
        db.artist_to_album
            .outgoing(id)
            .filter_map(|album_id| Album::read(db, album_id))
            .collect()
    }

    #[instrument(skip(db))]
    pub fn read_songs(db: &Database, id: &ArtistId) -> Vec<Song> {
        db.artist_to_song
            .outgoing(id)
            .filter_map(|song_id| Song::read(db, song_id))
            .collect()
    }

    /// The artist with the most accumulated likes.
    ///
    /// Returns `None` when no likes have been recorded at all; the
    /// earliest-created artist wins a tie.
    #[instrument(skip(db))]
    #[must_use]
    pub fn most_popular(db: &Database) -> Option<Self> {
        db.artists
            .iter()
            .filter(|artist| artist.likes > 0)
            .fold(None, |best: Option<&Self>, artist| match best {
                Some(b) if artist.likes > b.likes => Some(artist),
                None => Some(artist),
                _ => best,
            })
            .cloned()
    }

    /// Recompute `album_count`, `song_count`, and `runtime` from the
    /// relation tables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArtistNotFound`] if the id is unknown.
    #[instrument(skip(db))]
    pub fn repair(db: &mut Database, id: &ArtistId) -> StorageResult<()> {
        let album_count = db.artist_to_album.count_outgoing(id);
        let song_count = db.artist_to_song.count_outgoing(id);
        let runtime = Self::read_songs(db, id)
            .iter()
            .map(|song| song.runtime)
            .sum();

        let artist = db
            .artists
            .iter_mut()
            .find(|artist| &artist.id == id)
            .ok_or_else(|| Error::ArtistNotFound(id.to_string().into()))?;

        artist.album_count = album_count;
        artist.song_count = song_count;
        artist.runtime = runtime;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seed_album, seed_song};

    use anyhow::Result;
    use pretty_assertions::assert_eq;

    fn artist(name: &str) -> Artist {
        Artist {
            id: Artist::generate_id(),
            name: name.into(),
            runtime: Duration::ZERO,
            album_count: 0,
            song_count: 0,
            likes: 0,
        }
    }

    #[test]
    fn test_create_and_read() {
        let mut db = Database::new();
        let created = Artist::create(&mut db, artist("Test Artist"));

        assert_eq!(Artist::read(&db, &created.id), Some(created.clone()));
        assert_eq!(Artist::read_by_name(&db, "Test Artist"), Some(created));
        assert_eq!(Artist::read_by_name(&db, "Unknown"), None);
    }

    #[test]
    fn test_read_or_create_by_name() {
        let mut db = Database::new();

        let created = Artist::read_or_create_by_name(&mut db, "Test Artist");
        assert_eq!(Artist::read_all(&db).len(), 1);

        // a second call must not create a duplicate
        let read = Artist::read_or_create_by_name(&mut db, "Test Artist");
        assert_eq!(read, created);
        assert_eq!(Artist::read_all(&db).len(), 1);
    }

    #[test]
    fn test_add_albums_updates_statistics() -> Result<()> {
        let mut db = Database::new();
        let album = seed_album(&mut db, "Test Album", "Test Artist")?;

        let read = Artist::read_by_name(&db, "Test Artist").unwrap();
        assert_eq!(read.album_count, 1);
        assert_eq!(Artist::read_albums(&db, &read.id), vec![album]);

        Ok(())
    }

    #[test]
    fn test_add_songs_updates_statistics() -> Result<()> {
        let mut db = Database::new();
        seed_album(&mut db, "Test Album", "Test Artist")?;
        let song = seed_song(&mut db, "Test Song", "Test Album", 120)?;

        let read = Artist::read_by_name(&db, "Test Artist").unwrap();
        assert_eq!(read.song_count, 1);
        assert_eq!(read.runtime, Duration::from_secs(120));
        assert_eq!(Artist::read_songs(&db, &read.id), vec![song]);

        Ok(())
    }

    #[test]
    fn test_repair_unknown_artist() {
        let mut db = Database::new();
        let id = Artist::generate_id();

        let result = Artist::repair(&mut db, &id);
        assert_eq!(result, Err(Error::ArtistNotFound(id.to_string().into())));
    }

    #[test]
    fn test_most_popular_empty_without_likes() {
        let mut db = Database::new();
        assert_eq!(Artist::most_popular(&db), None);

        // artists without likes don't count as popular
        Artist::create(&mut db, artist("Test Artist"));
        assert_eq!(Artist::most_popular(&db), None);
    }

    #[test]
    fn test_most_popular_earliest_wins_ties() {
        let mut db = Database::new();
        let mut first = artist("First");
        first.likes = 2;
        let mut second = artist("Second");
        second.likes = 2;
        let mut third = artist("Third");
        third.likes = 1;

        let first = Artist::create(&mut db, first);
        Artist::create(&mut db, second);
        Artist::create(&mut db, third);

        assert_eq!(Artist::most_popular(&db), Some(first));
    }
}
