pub mod customer;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /customers                      list, create
/// /customers/{customer_id}        get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(customer::router())
}
