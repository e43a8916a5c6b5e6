//! # Customer Repository
//!
//! Customers populate the invoice form's customer picker.

use sqlx::SqlitePool;
use tracing::debug;

use super::generate_id;
use crate::error::DbResult;
use tally_core::Customer;

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Lists every customer, sorted by name.
    pub async fn list_all(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, image_url
            FROM customers
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = customers.len(), "Listed customers");
        Ok(customers)
    }

    /// Inserts a customer with a generated id.
    pub async fn insert(&self, name: &str, email: &str, image_url: &str) -> DbResult<Customer> {
        let id = generate_id();
        debug!(id = %id, name = %name, "Inserting customer");

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, image_url)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&id)
        .bind(name)
        .bind(email)
        .bind(image_url)
        .execute(&self.pool)
        .await?;

        Ok(Customer {
            id,
            name: name.to_string(),
            email: email.to_string(),
            image_url: image_url.to_string(),
        })
    }

    /// Counts customers.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::test_support;

    #[tokio::test]
    async fn test_list_all_sorted_by_name() {
        let db = test_support::database().await;
        test_support::customer(&db, "Lee Robinson", "lee@robinson.com").await;
        test_support::customer(&db, "Delba de Oliveira", "delba@oliveira.com").await;

        let names: Vec<_> = db
            .customers()
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();

        assert_eq!(names, ["Delba de Oliveira", "Lee Robinson"]);
        assert_eq!(db.customers().count().await.unwrap(), 2);
    }
}
