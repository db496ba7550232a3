//! Handlers for the `/customers` resource.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use customers_core::customer::{self, ENTITY};
use customers_core::error::CoreError;
use customers_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use customers_core::types::DbId;
use customers_db::models::customer::{CreateCustomer, Customer, NewCustomer, UpdateCustomer};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::query::PaginationParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// Check required fields and shapes, producing the insert payload.
fn validate_create_input(input: CreateCustomer) -> AppResult<NewCustomer> {
    let name = customer::require_field(input.name.as_deref(), "name")?;
    let email = customer::require_field(input.email.as_deref(), "email")?;
    customer::validate_name(name)?;
    customer::validate_email(email)?;
    if let Some(ref address) = input.address {
        customer::validate_address(address)?;
    }

    Ok(NewCustomer {
        name: name.trim().to_string(),
        email: email.to_string(),
        address: input.address,
    })
}

/// Decode a PUT body. A missing or blank body is an update with no fields.
fn parse_update_body(body: &[u8]) -> AppResult<UpdateCustomer> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(UpdateCustomer::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid update body: {e}")))
}

/// Validate whichever fields a partial update supplies, trimming `name`
/// the same way create does.
fn validate_update_input(input: UpdateCustomer) -> AppResult<UpdateCustomer> {
    if let Some(ref name) = input.name {
        customer::validate_name(name)?;
    }
    if let Some(ref address) = input.address {
        customer::validate_address(address)?;
    }
    Ok(UpdateCustomer {
        name: input.name.map(|name| name.trim().to_string()),
        address: input.address,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /customers
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCustomer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let input = validate_create_input(input)?;
    let created = state.store.insert(&input).await?;

    tracing::info!(customer_id = created.id, "Customer created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /customers
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<Json<Vec<Customer>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);
    let customers = state.store.list(limit, offset).await?;
    Ok(Json(customers))
}

/// GET /customers/{customer_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Customer>> {
    let id = customer::parse_customer_id(&raw_id)?;
    let found = state
        .store
        .select_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(found))
}

/// PUT /customers/{customer_id}
///
/// The id is checked before the body. An empty body, `{}`, or an object with
/// only null fields is a 304 and never reaches the store. The body is read as
/// raw bytes so that a zero-length request without a content type still
/// counts as empty.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> AppResult<Response> {
    let id = customer::parse_customer_id(&raw_id)?;
    let input = parse_update_body(&body)?;

    if input.is_empty() {
        tracing::debug!(customer_id = id, "Empty update, nothing modified");
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }
    let input = validate_update_input(input)?;

    let updated = state
        .store
        .update_by_id(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(customer_id = id, "Customer updated");
    Ok(Json(updated).into_response())
}

/// DELETE /customers/{customer_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = customer::parse_customer_id(&raw_id)?;
    if state.store.delete_by_id(id).await? {
        tracing::info!(customer_id = id, "Customer deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
