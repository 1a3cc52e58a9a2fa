use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::RecordId;

pub type UserId = RecordId;

pub const TABLE_NAME: &str = "user";

/// This struct holds the profile of a registered [`User`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct User {
    /// the unique identifier for this [`User`].
    pub id: UserId,

    /// Display name.
    pub name: Arc<str>,

    /// Mobile number, the key users are looked up by.
    pub mobile: Arc<str>,
}

impl User {
    #[must_use]
    pub fn generate_id() -> UserId {
        RecordId::generate(TABLE_NAME)
    }
}
