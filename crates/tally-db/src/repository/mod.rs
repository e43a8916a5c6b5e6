//! # Repository Module
//!
//! Database repository implementations for Tally.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repositories                                         │
//! │                                                                         │
//! │  Persistence adapter (dashboard)                                       │
//! │       │                                                                 │
//! │       │  db.invoices().insert(&new_invoice)                            │
//! │       ▼                                                                 │
//! │  InvoiceRepository                                                     │
//! │  ├── insert / update / delete   (one parameterized statement each)     │
//! │  ├── get_by_id                                                         │
//! │  └── search / count_pages       (listing view)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`user::UserRepository`] - Registration and email lookup
//! - [`invoice::InvoiceRepository`] - Invoice mutations and the listing
//! - [`customer::CustomerRepository`] - Customers invoices are billed to
//!
//! Queries are runtime-checked (`sqlx::query` + `bind`). Update and delete
//! report a missing row as [`DbError::NotFound`](crate::DbError::NotFound).

use uuid::Uuid;

pub mod customer;
pub mod invoice;
pub mod user;

/// Generates a new primary key (UUID v4).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
