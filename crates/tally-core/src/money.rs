//! # Money Module
//!
//! Provides the `Money` type for invoice amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Form input arrives as text: "12.50"                                   │
//! │  Validation coerces it to a number: 12.5                               │
//! │                                                                         │
//! │  Stored as a float, sums drift:                                        │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    12.5 × 100 = 1250 cents, rounded once at the boundary               │
//! │    Everything after that point is exact integer math                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! let amount = Money::from_major_units(12.5);
//! assert_eq!(amount.cents(), 1250);
//! assert_eq!(amount.to_string(), "$12.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// InvoiceForm.amount (f64, validated > 0)
///      │
///      ▼
/// Money::from_major_units ← rounding happens exactly once, here
///      │
///      ▼
/// invoices.amount (INTEGER cents) ──► listing shows "$12.50"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Largest whole-dollar amount whose value in cents stays below 2^53,
    /// where every `f64` integer is exact. Form input above this is rejected
    /// before conversion.
    pub const MAX_MAJOR_UNITS: f64 = 90_071_992_547_409.0;

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a validated decimal amount (dollars) into cents.
    ///
    /// Multiplies by 100 and rounds to the nearest cent, so binary float
    /// artifacts like `0.29 * 100 = 28.999999999999996` become 29.
    /// `amount` must be within [`Money::MAX_MAJOR_UNITS`]; larger values
    /// saturate.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_units(12.5).cents(), 1250);
    /// assert_eq!(Money::from_major_units(0.29).cents(), 29);
    /// ```
    pub fn from_major_units(amount: f64) -> Self {
        Money((amount * 100.0).round() as i64)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and the CLI host. The form layer formats amounts with
/// its own locale handling.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::from_cents(0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
