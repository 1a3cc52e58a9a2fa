//! The service façade over the crescendo in-memory music catalog.
//!
//! Hosting layers (an HTTP server, a CLI, ...) call the functions in
//! [`services`] against a [`Database`](crescendo_storage::db::Database)
//! they own; everything here is synchronous and in-process.

pub mod logger;
pub mod services;
pub mod state;
