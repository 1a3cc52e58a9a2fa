//! CRUD operations for the user table
use tracing::instrument;

use crate::db::{
    Database,
    schemas::user::{User, UserId},
};

impl User {
    /// Register a new user.
    ///
    /// Mobile numbers are not required to be unique at registration time;
    /// lookups by mobile return the earliest registration.
    #[instrument(skip(db))]
    pub fn create(db: &mut Database, user: Self) -> Self {
        db.users.push(user.clone());
        user
    }

    #[instrument(skip(db))]
    pub fn read_all(db: &Database) -> Vec<Self> {
        db.users.clone()
    }

    #[instrument(skip(db))]
    pub fn read(db: &Database, id: &UserId) -> Option<Self> {
        db.users.iter().find(|user| &user.id == id).cloned()
    }

    #[instrument(skip(db))]
    pub fn read_by_mobile(db: &Database, mobile: &str) -> Option<Self> {
        db.users.iter().find(|user| &*user.mobile == mobile).cloned()
    }
}
