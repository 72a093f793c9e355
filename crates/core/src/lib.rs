//! Budgetify Core - Domain entities, services, and traits.
//!
//! This crate contains the expense and budget domain model together with the
//! services the HTTP layer calls into. It is database-agnostic and defines
//! repository traits that are implemented by the `storage-sqlite` crate.

pub mod budgets;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod expenses;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
