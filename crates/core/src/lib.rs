//! Domain layer for the customer service.
//!
//! Pure types and validation with no I/O, shared by the `db` and `api` crates.

pub mod customer;
pub mod error;
pub mod pagination;
pub mod types;
