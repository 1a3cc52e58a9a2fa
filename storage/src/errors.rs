use std::sync::Arc;

use thiserror::Error;

/// Failures surfaced by the catalog.
///
/// Every variant is a "not found" condition carrying the lookup key that
/// missed: a mobile number for users, a name/title for the other entities,
/// or a rendered record id when the lookup was by id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("user not found: {0}")]
    UserNotFound(Arc<str>),
    #[error("artist not found: {0}")]
    ArtistNotFound(Arc<str>),
    #[error("album not found: {0}")]
    AlbumNotFound(Arc<str>),
    #[error("song not found: {0}")]
    SongNotFound(Arc<str>),
    #[error("playlist not found: {0}")]
    PlaylistNotFound(Arc<str>),
}

pub type StorageResult<T> = Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_str_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Error::UserNotFound("9876543210".into()), "user not found: 9876543210")]
    #[case(Error::ArtistNotFound("MF DOOM".into()), "artist not found: MF DOOM")]
    #[case(Error::AlbumNotFound("Madvillainy".into()), "album not found: Madvillainy")]
    #[case(Error::SongNotFound("Accordion".into()), "song not found: Accordion")]
    #[case(
        Error::PlaylistNotFound("late night".into()),
        "playlist not found: late night"
    )]
    fn test_error_display(#[case] error: Error, #[case] expected: &str) {
        assert_str_eq!(error.to_string(), expected);
    }
}
