#![allow(clippy::module_name_repetitions)]
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

pub mod album;
pub mod artist;
pub mod playlist;
pub mod song;
pub mod user;

/// A typed primary key: a table name paired with a ULID key.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct RecordId {
    /// Table name
    pub tb: String,
    pub id: Ulid,
}

impl std::fmt::Debug for RecordId {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.tb, self.id)
    }
}

impl std::fmt::Display for RecordId {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.tb, self.id)
    }
}

impl<S: Into<String>> From<(S, Ulid)> for RecordId {
    #[inline]
    fn from((tb, id): (S, Ulid)) -> Self {
        Self { tb: tb.into(), id }
    }
}

impl RecordId {
    /// Get the table name.
    #[must_use]
    #[inline]
    pub fn table(&self) -> &str {
        &self.tb
    }

    /// Get the key.
    #[must_use]
    #[inline]
    pub const fn key(&self) -> &Ulid {
        &self.id
    }

    /// Create a new `RecordId` with a freshly generated ULID key.
    #[must_use]
    #[inline]
    pub fn generate<S: Into<String>>(table: S) -> Self {
        Self {
            tb: table.into(),
            id: Ulid::new(),
        }
    }
}

impl FromStr for RecordId {
    type Err = ();

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // the line should follow the pattern:
        // <table_name>:<26 character, crockford base32 id>
        // anything else is invalid
        let Some((tb, id)) = s.trim().split_once(':') else {
            return Err(());
        };

        if !matches!(
            tb,
            user::TABLE_NAME
                | artist::TABLE_NAME
                | album::TABLE_NAME
                | song::TABLE_NAME
                | playlist::TABLE_NAME
        ) {
            return Err(());
        }

        let id = Ulid::from_string(id).map_err(|_| ())?;
        Ok(Self {
            tb: tb.to_owned(),
            id,
        })
    }
}

#[cfg(test)]
mod record_id {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serde_round_trip() {
        let id = RecordId::generate(song::TABLE_NAME);

        let serialized = serde_json::to_string(&id).unwrap();
        let deserialized: RecordId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_from_str() {
        let key = Ulid::new();

        // valid ids
        let id: RecordId = format!("song:{key}").parse().unwrap();
        assert_eq!(id, RecordId::from(("song", key)));
        let id: RecordId = format!("  playlist:{key} ").parse().unwrap();
        assert_eq!(id, RecordId::from(("playlist", key)));

        // key is not a ulid
        let id: Result<RecordId, ()> = "song:42".parse();
        assert!(id.is_err());
        let id: Result<RecordId, ()> = format!("song:{}", "a".repeat(27)).parse();
        assert!(id.is_err());

        // unknown table name
        let id: Result<RecordId, ()> = format!("table:{key}").parse();
        assert!(id.is_err());

        // not an id at all
        let id: Result<RecordId, ()> = "hello world!".parse();
        assert!(id.is_err());
    }

    #[test]
    fn test_display() {
        let key = Ulid::new();
        let id = RecordId::from(("artist", key));
        assert_eq!(id.to_string(), format!("artist:{key}"));
    }
}
