//! Customer entity model and DTOs.

use customers_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A customer row from the `customers` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a customer.
///
/// Required fields are still `Option` here so that a missing `name` or
/// `email` surfaces as a validation error instead of a deserialization one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Validated insert payload handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub address: Option<String>,
}

/// DTO for a partial update. Only `Some` fields are applied.
///
/// `email` is not updatable; any field outside this struct is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub address: Option<String>,
}

impl UpdateCustomer {
    /// True when the request carried no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_empty_update() {
        let input: UpdateCustomer = serde_json::from_str("{}").unwrap();
        assert!(input.is_empty());
    }

    #[test]
    fn explicit_null_counts_as_absent() {
        let input: UpdateCustomer = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(input.is_empty());
    }

    #[test]
    fn single_field_is_not_empty() {
        let input: UpdateCustomer = serde_json::from_str(r#"{"address": "1 Elm St"}"#).unwrap();
        assert!(!input.is_empty());
        assert_eq!(input.address.as_deref(), Some("1 Elm St"));
        assert!(input.name.is_none());
    }

    #[test]
    fn email_is_rejected_on_update() {
        let result = serde_json::from_str::<UpdateCustomer>(r#"{"email": "x@example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_tolerates_missing_fields() {
        let input: CreateCustomer =
            serde_json::from_str(r#"{"name": "John Doe", "address": "123 Main St"}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("John Doe"));
        assert!(input.email.is_none());
    }
}
