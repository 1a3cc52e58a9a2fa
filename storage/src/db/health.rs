//! this module holds the implementations of functions needed for the health check of the catalog

use tracing::instrument;

use crate::db::Database;

/// Count the number of users in the catalog
#[instrument(skip(db))]
#[must_use]
pub fn count_users(db: &Database) -> usize {
    db.users.len()
}

/// Count the number of artists in the catalog
#[instrument(skip(db))]
#[must_use]
pub fn count_artists(db: &Database) -> usize {
    db.artists.len()
}

/// Count the number of albums in the catalog
#[instrument(skip(db))]
#[must_use]
pub fn count_albums(db: &Database) -> usize {
    db.albums.len()
}

/// Count the number of songs in the catalog
#[instrument(skip(db))]
#[must_use]
pub fn count_songs(db: &Database) -> usize {
    db.songs.len()
}

/// Count the number of playlists in the catalog
#[instrument(skip(db))]
#[must_use]
pub fn count_playlists(db: &Database) -> usize {
    db.playlists.len()
}

/// Count the number of orphaned artists in the catalog
/// This is the number of artists that have no songs, and no albums
#[instrument(skip(db))]
#[must_use]
pub fn count_orphaned_artists(db: &Database) -> usize {
    db.artists
        .iter()
        .filter(|artist| {
            db.artist_to_album.count_outgoing(&artist.id) == 0
                && db.artist_to_song.count_outgoing(&artist.id) == 0
        })
        .count()
}

/// Count the number of orphaned albums in the catalog
/// This is the number of albums that have no songs
#[instrument(skip(db))]
#[must_use]
pub fn count_orphaned_albums(db: &Database) -> usize {
    db.albums
        .iter()
        .filter(|album| db.album_to_song.count_outgoing(&album.id) == 0)
        .count()
}

/// Count the number of orphaned playlists in the catalog
/// This is the number of playlists that have no songs
/// (possible when playlist derivation matched nothing)
#[instrument(skip(db))]
#[must_use]
pub fn count_orphaned_playlists(db: &Database) -> usize {
    db.playlists
        .iter()
        .filter(|playlist| db.playlist_to_song.count_outgoing(&playlist.id) == 0)
        .count()
}

/// Count the number of songs nobody has liked yet
#[instrument(skip(db))]
#[must_use]
pub fn count_unliked_songs(db: &Database) -> usize {
    db.songs.iter().filter(|song| song.likes == 0).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schemas::{artist::Artist, playlist::Playlist, song::Song};
    use crate::test_utils::{seed_album, seed_song, seed_user};

    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn test_artist_counting() -> Result<()> {
        let mut db = Database::new();

        // initially, there should be no artists
        assert_eq!(count_artists(&db), 0);
        assert_eq!(count_orphaned_artists(&db), 0);

        // a standalone artist is orphaned
        Artist::read_or_create_by_name(&mut db, "Test Artist");
        assert_eq!(count_artists(&db), 1);
        assert_eq!(count_orphaned_artists(&db), 1);

        // once they have an album, they're no longer orphaned
        seed_album(&mut db, "Test Album", "Test Artist")?;
        assert_eq!(count_artists(&db), 1);
        assert_eq!(count_orphaned_artists(&db), 0);

        Ok(())
    }

    #[test]
    fn test_album_counting() -> Result<()> {
        let mut db = Database::new();

        assert_eq!(count_albums(&db), 0);
        assert_eq!(count_orphaned_albums(&db), 0);

        // a new album has no songs, so it is orphaned
        seed_album(&mut db, "Test Album", "Test Artist")?;
        assert_eq!(count_albums(&db), 1);
        assert_eq!(count_orphaned_albums(&db), 1);

        // adding a song de-orphans it
        seed_song(&mut db, "Test Song", "Test Album", 120)?;
        assert_eq!(count_albums(&db), 1);
        assert_eq!(count_orphaned_albums(&db), 0);

        Ok(())
    }

    #[test]
    fn test_playlist_counting() -> Result<()> {
        let mut db = Database::new();
        let user = seed_user(&mut db, "Ada", "5550100");
        seed_album(&mut db, "Test Album", "Test Artist")?;
        seed_song(&mut db, "Test Song", "Test Album", 120)?;

        assert_eq!(count_playlists(&db), 0);
        assert_eq!(count_orphaned_playlists(&db), 0);

        // a playlist whose derivation matches nothing is orphaned
        Playlist::create_by_runtime(&mut db, &user.id, "nothing", Duration::from_secs(1))?;
        assert_eq!(count_playlists(&db), 1);
        assert_eq!(count_orphaned_playlists(&db), 1);

        // one that matches songs is not
        Playlist::create_by_runtime(&mut db, &user.id, "two minutes", Duration::from_secs(120))?;
        assert_eq!(count_playlists(&db), 2);
        assert_eq!(count_orphaned_playlists(&db), 1);

        Ok(())
    }

    #[test]
    fn test_song_and_user_counting() -> Result<()> {
        let mut db = Database::new();

        assert_eq!(count_songs(&db), 0);
        assert_eq!(count_users(&db), 0);

        seed_album(&mut db, "Test Album", "Test Artist")?;
        let song = seed_song(&mut db, "Test Song", "Test Album", 120)?;
        let user = seed_user(&mut db, "Ada", "5550100");
        assert_eq!(count_songs(&db), 1);
        assert_eq!(count_users(&db), 1);

        // unliked until someone likes it
        assert_eq!(count_unliked_songs(&db), 1);
        Song::like(&mut db, &song.id, &user.id)?;
        assert_eq!(count_unliked_songs(&db), 0);

        Ok(())
    }
}
