//! # Talking Pills Database Crate
//!
//! The storage layer: every submission the site accepts ends up here, and
//! nothing else writes to these tables.
//!
//! ## Architectural Principles
//!
//! - **Insert-only:** records are created by the API and never updated or deleted.
//! - **One seam:** the [`Storage`] trait is all the web layer sees. [`DbRepository`]
//!   implements it on PostgreSQL; [`MemoryStorage`] implements it in-process.
//! - **Uniqueness at the boundary:** the `early_access_signups.email` unique index
//!   is the final word on duplicates; a violation surfaces as [`DbError::Duplicate`].
//!
//! ## Public API
//!
//! - `connect`: builds the `PgPool` from the database settings.
//! - `run_migrations`: applies the embedded migrations.
//! - `Storage`, `DbRepository`, `MemoryStorage`, `DbError`.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod memory;
pub mod repository;
pub mod storage;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use memory::MemoryStorage;
pub use repository::DbRepository;
pub use storage::Storage;
