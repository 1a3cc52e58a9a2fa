use crescendo_storage::db::schemas::{
    album::Album, artist::Artist, playlist::Playlist, song::Song, user::User,
};
use serde::{Deserialize, Serialize};

/// A brief representation of the library
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct LibraryBrief {
    pub users: usize,
    pub artists: usize,
    pub albums: usize,
    pub songs: usize,
    pub playlists: usize,
}

/// A full representation of the library
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct LibraryFull {
    pub users: Box<[User]>,
    pub artists: Box<[Artist]>,
    pub albums: Box<[Album]>,
    pub songs: Box<[Song]>,
    pub playlists: Box<[Playlist]>,
}

/// Health information about the library
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct LibraryHealth {
    /// The number of users in the library
    pub users: usize,
    /// The number of artists in the library
    pub artists: usize,
    /// The number of albums in the library
    pub albums: usize,
    /// The number of songs in the library
    pub songs: usize,
    /// The number of playlists in the library
    pub playlists: usize,
    /// The number of orphaned artists in the library
    /// This is the number of artists that have no songs, and no albums
    pub orphaned_artists: usize,
    /// The number of orphaned albums in the library
    /// This is the number of albums that have no songs
    pub orphaned_albums: usize,
    /// The number of orphaned playlists in the library
    /// This is the number of playlists that have no songs
    pub orphaned_playlists: usize,
    /// The number of songs in the library nobody has liked yet
    pub unliked_songs: usize,
}
