//! Route definitions for the `/customers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::customer;
use crate::state::AppState;

/// Routes for `/customers`.
///
/// ```text
/// GET    /customers                 -> list
/// POST   /customers                 -> create
/// GET    /customers/{customer_id}   -> get_by_id
/// PUT    /customers/{customer_id}   -> update
/// DELETE /customers/{customer_id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customers", get(customer::list).post(customer::create))
        .route(
            "/customers/{customer_id}",
            get(customer::get_by_id)
                .put(customer::update)
                .delete(customer::delete),
        )
}
