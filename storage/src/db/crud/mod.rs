//! CRUD operations for the catalog tables.
//!
//! Operations live on the schema types themselves and take the [`Database`]
//! they operate on as their first argument.
//!
//! [`Database`]: crate::db::Database

pub mod album;
pub mod artist;
pub mod playlist;
pub mod song;
pub mod user;
