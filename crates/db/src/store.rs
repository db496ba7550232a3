//! The `CustomerStore` capability and its PostgreSQL implementation.
//!
//! Handlers only see this trait. Not-found is never an error here: lookups
//! return `Option` and deletes return `bool`, so the HTTP layer can tell
//! "no such row" apart from a failed query without inspecting error text.

use async_trait::async_trait;
use customers_core::types::DbId;

use crate::models::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::repositories::CustomerRepo;
use crate::DbPool;

/// Name of the unique constraint on `customers.email`.
pub const EMAIL_CONSTRAINT: &str = "uq_customers_email";

/// Failure kinds surfaced at the store boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Insert collided with an existing customer's email.
    #[error("A customer with email '{0}' already exists")]
    DuplicateEmail(String),

    /// Any other database failure (connectivity, unexpected constraint, ...).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for customers.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Insert a customer and return it with its generated id.
    async fn insert(&self, input: &NewCustomer) -> StoreResult<Customer>;

    /// Fetch a customer, `None` if the id does not exist.
    async fn select_by_id(&self, id: DbId) -> StoreResult<Option<Customer>>;

    /// Apply a partial update, `None` if the id does not exist.
    async fn update_by_id(&self, id: DbId, input: &UpdateCustomer) -> StoreResult<Option<Customer>>;

    /// Delete a customer. Returns `false` when no row was affected.
    async fn delete_by_id(&self, id: DbId) -> StoreResult<bool>;

    /// List customers in ascending id order.
    async fn list(&self, limit: i64, offset: i64) -> StoreResult<Vec<Customer>>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}

/// [`CustomerStore`] backed by PostgreSQL through [`CustomerRepo`].
#[derive(Clone)]
pub struct PgCustomerStore {
    pool: DbPool,
}

impl PgCustomerStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    async fn insert(&self, input: &NewCustomer) -> StoreResult<Customer> {
        CustomerRepo::create(&self.pool, input).await.map_err(|err| {
            if is_email_violation(&err) {
                tracing::debug!(email = %input.email, "Insert rejected by unique email constraint");
                StoreError::DuplicateEmail(input.email.clone())
            } else {
                StoreError::Database(err)
            }
        })
    }

    async fn select_by_id(&self, id: DbId) -> StoreResult<Option<Customer>> {
        Ok(CustomerRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update_by_id(&self, id: DbId, input: &UpdateCustomer) -> StoreResult<Option<Customer>> {
        Ok(CustomerRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_by_id(&self, id: DbId) -> StoreResult<bool> {
        Ok(CustomerRepo::delete(&self.pool, id).await?)
    }

    async fn list(&self, limit: i64, offset: i64) -> StoreResult<Vec<Customer>> {
        Ok(CustomerRepo::list(&self.pool, limit, offset).await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

/// PostgreSQL unique violation (SQLSTATE 23505) on the email constraint.
fn is_email_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some(EMAIL_CONSTRAINT)
        }
        _ => false,
    }
}
