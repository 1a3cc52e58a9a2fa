pub mod crud;
pub mod health;
pub mod schemas;

use self::schemas::RecordId;
use self::schemas::album::Album;
use self::schemas::artist::Artist;
use self::schemas::playlist::Playlist;
use self::schemas::song::Song;
use self::schemas::user::User;

/// An edge table between two record tables.
///
/// Edges are kept in insertion order with a unique (in, out) constraint:
/// relating an already-related pair is a no-op.
#[derive(Clone, Debug, Default)]
pub struct RelationTable {
    edges: Vec<(RecordId, RecordId)>,
}

impl RelationTable {
    /// Add an edge from `input` to `output`.
    ///
    /// Returns `true` if the edge was new, `false` if the pair was already
    /// related (in which case the table is unchanged).
    pub fn relate(&mut self, input: RecordId, output: RecordId) -> bool {
        if self.is_related(&input, &output) {
            return false;
        }
        self.edges.push((input, output));
        true
    }

    #[must_use]
    pub fn is_related(&self, input: &RecordId, output: &RecordId) -> bool {
        self.edges
            .iter()
            .any(|(i, o)| i == input && o == output)
    }

    /// All records `input` has an edge to, in insertion order.
    pub fn outgoing<'a>(&'a self, input: &'a RecordId) -> impl Iterator<Item = &'a RecordId> {
        self.edges
            .iter()
            .filter(move |(i, _)| i == input)
            .map(|(_, o)| o)
    }

    /// All records with an edge to `output`, in insertion order.
    pub fn incoming<'a>(&'a self, output: &'a RecordId) -> impl Iterator<Item = &'a RecordId> {
        self.edges
            .iter()
            .filter(move |(_, o)| o == output)
            .map(|(i, _)| i)
    }

    #[must_use]
    pub fn count_outgoing(&self, input: &RecordId) -> usize {
        self.outgoing(input).count()
    }

    #[must_use]
    pub fn count_incoming(&self, output: &RecordId) -> usize {
        self.incoming(output).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// The in-memory database backing the catalog.
///
/// Entity tables are append-only and keep insertion order; records are never
/// deleted. The relation tables carry every cross-entity association, so the
/// denormalized statistics on the entities themselves (`runtime`,
/// `song_count`, ...) can always be recomputed from them.
#[derive(Debug, Default)]
pub struct Database {
    pub(crate) users: Vec<User>,
    pub(crate) artists: Vec<Artist>,
    pub(crate) albums: Vec<Album>,
    pub(crate) songs: Vec<Song>,
    pub(crate) playlists: Vec<Playlist>,

    pub(crate) artist_to_album: RelationTable,
    pub(crate) album_to_song: RelationTable,
    pub(crate) artist_to_song: RelationTable,
    pub(crate) playlist_to_song: RelationTable,
    pub(crate) playlist_to_listener: RelationTable,
    pub(crate) creator_to_playlist: RelationTable,
    pub(crate) user_to_playlist: RelationTable,
    pub(crate) song_to_liker: RelationTable,
    pub(crate) artist_to_liker: RelationTable,
}

impl Database {
    /// Create an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
