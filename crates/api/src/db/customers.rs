//! Customer repository for database operations.
//!
//! Queries are checked at runtime (`query_as`) so the crate builds without a
//! live database or offline query data.

use sqlx::PgPool;

use order_desk_core::CustomerId;

use super::StoreError;
use crate::models::{Customer, CustomerChanges, NewCustomer};

#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: CustomerId,
    name: String,
    email: String,
    address: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            address: row.address,
        }
    }
}

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new customer.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the email already exists.
    /// Returns `StoreError::Database` for other database errors.
    pub async fn create(&self, customer: &NewCustomer) -> Result<Customer, StoreError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r"
            INSERT INTO customers (name, email, address)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, address
            ",
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.address)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &customer.email))?;

        Ok(row.into())
    }

    /// List every customer, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Customer>, StoreError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r"
            SELECT id, name, email, address
            FROM customers
            ORDER BY created_at, id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    /// Update the fields present in `changes`.
    ///
    /// Returns `None` if no customer has the given ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the new email already exists.
    /// Returns `StoreError::Database` for other database errors.
    pub async fn update(
        &self,
        id: CustomerId,
        changes: &CustomerChanges,
    ) -> Result<Option<Customer>, StoreError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r"
            UPDATE customers
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                address = COALESCE($4, address)
            WHERE id = $1
            RETURNING id, name, email, address
            ",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(&changes.address)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, changes.email.as_deref().unwrap_or_default()))?;

        Ok(row.map(Customer::from))
    }

    /// Delete a customer by ID.
    ///
    /// Returns whether a row was removed. Orders referencing the customer
    /// are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails.
    pub async fn delete(&self, id: CustomerId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_unique_violation(e: sqlx::Error, email: &str) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return StoreError::duplicate_email(email);
    }
    StoreError::Database(e)
}
