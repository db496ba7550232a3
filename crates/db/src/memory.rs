//! In-memory [`CustomerStore`] for local runs and tests.
//!
//! Mirrors the PostgreSQL semantics that handlers rely on: ids start at 1 and
//! are never reused, email is unique, and partial updates bump `updated_at`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use customers_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::store::{CustomerStore, StoreError, StoreResult};

#[derive(Default)]
struct Inner {
    next_id: DbId,
    rows: BTreeMap<DbId, Customer>,
}

/// A `RwLock`-guarded map keyed by id.
#[derive(Default)]
pub struct InMemoryCustomerStore {
    inner: RwLock<Inner>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored customers.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn insert(&self, input: &NewCustomer) -> StoreResult<Customer> {
        let mut inner = self.inner.write().await;
        if inner.rows.values().any(|c| c.email == input.email) {
            return Err(StoreError::DuplicateEmail(input.email.clone()));
        }

        inner.next_id += 1;
        let now = Utc::now();
        let customer = Customer {
            id: inner.next_id,
            name: input.name.clone(),
            email: input.email.clone(),
            address: input.address.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn select_by_id(&self, id: DbId) -> StoreResult<Option<Customer>> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn update_by_id(&self, id: DbId, input: &UpdateCustomer) -> StoreResult<Option<Customer>> {
        let mut inner = self.inner.write().await;
        let Some(customer) = inner.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = &input.name {
            customer.name = name.clone();
        }
        if let Some(address) = &input.address {
            customer.address = Some(address.clone());
        }
        customer.updated_at = Utc::now();
        Ok(Some(customer.clone()))
    }

    async fn delete_by_id(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn list(&self, limit: i64, offset: i64) -> StoreResult<Vec<Customer>> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
