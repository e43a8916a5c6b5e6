//! # Invoice Repository
//!
//! Invoice mutations plus the paged listing.
//!
//! ## Listing Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  query "lee"  →  pattern "%lee%"                                       │
//! │                                                                         │
//! │  invoices JOIN customers                                               │
//! │  WHERE name LIKE │ email LIKE │ amount LIKE │ date LIKE │ status LIKE  │
//! │  ORDER BY date DESC                                                    │
//! │  LIMIT 6 OFFSET (page - 1) × 6                                         │
//! │                                                                         │
//! │  SQLite LIKE is case-insensitive for ASCII.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use super::generate_id;
use crate::error::{DbError, DbResult};
use tally_core::{Invoice, InvoiceChanges, InvoiceSummary, NewInvoice, ITEMS_PER_PAGE};

/// Repository for invoice database operations.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: SqlitePool,
}

impl InvoiceRepository {
    /// Creates a new InvoiceRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InvoiceRepository { pool }
    }

    /// Gets an invoice by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Invoice>> {
        debug!(id = %id, "Getting invoice by ID");

        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, customer_id, amount, status, date
            FROM invoices
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invoice)
    }

    /// Inserts a new invoice with a generated id.
    ///
    /// ## Returns
    /// * `Ok(Invoice)` - The stored row
    /// * `Err(DbError::ForeignKeyViolation)` - Unknown customer
    pub async fn insert(&self, invoice: &NewInvoice) -> DbResult<Invoice> {
        let id = generate_id();
        debug!(
            id = %id,
            customer_id = %invoice.customer_id,
            amount = invoice.amount.cents(),
            status = %invoice.status,
            "Inserting invoice"
        );

        sqlx::query(
            r#"
            INSERT INTO invoices (id, customer_id, amount, status, date)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&id)
        .bind(&invoice.customer_id)
        .bind(invoice.amount.cents())
        .bind(invoice.status)
        .bind(invoice.date)
        .execute(&self.pool)
        .await?;

        Ok(Invoice {
            id,
            customer_id: invoice.customer_id.clone(),
            amount: invoice.amount.cents(),
            status: invoice.status,
            date: invoice.date,
        })
    }

    /// Overwrites customer, amount and status. The date is kept.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Invoice doesn't exist
    pub async fn update(&self, id: &str, changes: &InvoiceChanges) -> DbResult<()> {
        debug!(
            id = %id,
            customer_id = %changes.customer_id,
            amount = changes.amount.cents(),
            status = %changes.status,
            "Updating invoice"
        );

        let result = sqlx::query(
            r#"
            UPDATE invoices SET
                customer_id = ?2,
                amount = ?3,
                status = ?4
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&changes.customer_id)
        .bind(changes.amount.cents())
        .bind(changes.status)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Invoice", id));
        }

        Ok(())
    }

    /// Deletes an invoice.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - Invoice doesn't exist
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting invoice");

        let result = sqlx::query("DELETE FROM invoices WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Invoice", id));
        }

        Ok(())
    }

    /// Searches the listing, newest first, one page at a time.
    ///
    /// ## Arguments
    /// * `query` - Matched against customer name/email, amount, date, status.
    ///   Empty matches everything.
    /// * `page` - 1-based; 0 is treated as 1
    pub async fn search(&self, query: &str, page: u32) -> DbResult<Vec<InvoiceSummary>> {
        let pattern = like_pattern(query);
        let offset = i64::from(page.max(1) - 1) * i64::from(ITEMS_PER_PAGE);

        debug!(query = %query.trim(), page = page, "Searching invoices");

        let invoices = sqlx::query_as::<_, InvoiceSummary>(
            r#"
            SELECT
                i.id,
                i.amount,
                i.date,
                i.status,
                c.name,
                c.email,
                c.image_url
            FROM invoices i
            INNER JOIN customers c ON i.customer_id = c.id
            WHERE c.name LIKE ?1
               OR c.email LIKE ?1
               OR CAST(i.amount AS TEXT) LIKE ?1
               OR i.date LIKE ?1
               OR i.status LIKE ?1
            ORDER BY i.date DESC, i.id ASC
            LIMIT ?2 OFFSET ?3
            "#,
        )
        .bind(&pattern)
        .bind(i64::from(ITEMS_PER_PAGE))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = invoices.len(), "Search returned invoices");
        Ok(invoices)
    }

    /// Number of listing pages for `query` (0 when nothing matches).
    pub async fn count_pages(&self, query: &str) -> DbResult<u32> {
        debug!(query = %query.trim(), "Counting invoice pages");

        let matching: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM invoices i
            INNER JOIN customers c ON i.customer_id = c.id
            WHERE c.name LIKE ?1
               OR c.email LIKE ?1
               OR CAST(i.amount AS TEXT) LIKE ?1
               OR i.date LIKE ?1
               OR i.status LIKE ?1
            "#,
        )
        .bind(like_pattern(query))
        .fetch_one(&self.pool)
        .await?;

        let per_page = i64::from(ITEMS_PER_PAGE);
        Ok(((matching + per_page - 1) / per_page) as u32)
    }

    /// Counts all invoices.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM invoices")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn like_pattern(query: &str) -> String {
    format!("%{}%", query.trim())
}

// =============================================================================
// Unit Tests
// =============================================================================
