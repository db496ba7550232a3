//! Extractors whose rejections render through [`AppError`].
//!
//! Axum's stock `Json`/`Query` reject with plain-text bodies and, for JSON
//! data errors, 422. Every malformed request here is a 400 with the standard
//! `{ "error", "code" }` envelope instead.

use axum::extract::{FromRequest, FromRequestParts, Query};
use axum::Json;

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query-string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
