//! Request handlers.
//!
//! Handlers validate input with `customers_core`, delegate to the injected
//! `CustomerStore`, and map failures via [`crate::error::AppError`].

pub mod customer;
