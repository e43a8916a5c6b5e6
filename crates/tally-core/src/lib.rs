//! # tally-core: Pure Form Logic for Tally
//!
//! This crate is the **heart** of the invoicing dashboard's form pipeline.
//! It contains schemas, validation and business rules as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally Form Pipeline                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Form Layer (rendered elsewhere)              │   │
//! │  │    Register ──► Login ──► Create/Edit Invoice ──► Invoice List  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ FormInput (field → string)             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/dashboard (orchestrators)               │   │
//! │  │    create_invoice, update_invoice, register_user, authenticate  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  registry │  │ validation│  │   rules   │  │ submission│  │   │
//! │  │   │  schemas  │  │  Outcome  │  │  confirm  │  │   Result  │  │   │
//! │  │   │  per op   │  │  errors   │  │  unique   │  │   shape   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tally-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`schema`] - Field/entity schema building blocks (rules, coercions)
//! - [`registry`] - The registered schemas, keyed by entity + operation
//! - [`validation`] - Applies a schema to raw form input
//! - [`forms`] - Typed records produced by successful validation
//! - [`rules`] - Cross-field and external-state business rules
//! - [`submission`] - The `SubmissionResult` returned to the form layer
//! - [`types`] - Persisted domain types (Invoice, User, Customer)
//! - [`money`] - Integer cents
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::forms::InvoiceForm;
//! use tally_core::registry::{self, Entity, Operation};
//! use tally_core::validation::{validate, FormInput, ValidationOutcome};
//!
//! let schema = registry::schema(Entity::Invoice, Operation::Create).unwrap();
//! let input = FormInput::from_pairs([("customerId", "c-1"), ("amount", "12.50"), ("status", "paid")]);
//!
//! match validate::<InvoiceForm>(schema, &input) {
//!     ValidationOutcome::Valid { data } => assert_eq!(data.amount, 12.5),
//!     ValidationOutcome::Invalid { .. } => unreachable!(),
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod forms;
pub mod money;
pub mod registry;
pub mod rules;
pub mod schema;
pub mod submission;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use submission::SubmissionResult;
pub use types::*;
pub use validation::{FieldErrors, FormInput, ValidationOutcome};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of invoices shown per page in the invoices listing.
pub const ITEMS_PER_PAGE: u32 = 6;
