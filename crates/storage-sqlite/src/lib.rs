//! SQLite storage implementation for Budgetify.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `budgetify-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations (the `expense` and `budget` tables are created on first start)
//! - Repository implementations for expenses and budgets
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core crate is database-agnostic and works with traits.
//!
//! ```text
//!   core (domain)
//!        │
//!        ▼
//! storage-sqlite (this crate)
//!        │
//!        ▼
//!    SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod budgets;
pub mod expenses;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from budgetify-core for convenience
pub use budgetify_core::errors::{DatabaseError, Error, Result};
