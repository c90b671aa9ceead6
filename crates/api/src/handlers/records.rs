//! Record handlers, shared by every record kind.
//!
//! Bodies are flat JSON objects using the records' wire names. Create and
//! update run the same validation schema the screens use; failures answer
//! 400 with a `fields` map.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::{HeaderName, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use cadastros_core::record::Entity;
use cadastros_core::types::FormData;
use cadastros_core::validation::validate_form;

use crate::error::{AppError, AppResult};
use crate::extract::{RecordBody, RecordId};
use crate::query::ListParams;
use crate::state::{AppState, StoreFor};
use crate::store::Store;

/// Response header carrying the number of records matching a listing.
pub const TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

fn store<E: Entity>(state: &AppState) -> &Store<E>
where
    AppState: StoreFor<E>,
{
    <AppState as StoreFor<E>>::store(state)
}

fn validate<E: Entity>(form: &FormData) -> AppResult<E::Draft> {
    validate_form::<E::Draft>(form).map_err(|fields| {
        tracing::debug!(entity = E::NAME, fields = ?fields.paths(), "Rejected invalid record");
        AppError::InvalidFields(fields)
    })
}

/// GET /<resource>?_page=&_limit=&<titleField>_like=
pub async fn list<E: Entity>(
    State(state): State<AppState>,
    Query(raw): Query<HashMap<String, String>>,
) -> AppResult<impl IntoResponse>
where
    AppState: StoreFor<E>,
{
    let params = ListParams::parse::<E>(&raw)?;
    let (items, total) = store::<E>(&state).list(&params).await;

    Ok(([(TOTAL_COUNT, total.to_string())], Json(items)))
}

/// GET /<resource>/{id}
pub async fn get<E: Entity>(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<impl IntoResponse>
where
    AppState: StoreFor<E>,
{
    let record = store::<E>(&state).find_by_id(id).await?;

    Ok(Json(record))
}

/// POST /<resource>
///
/// Answers 201 with the stored record, including its assigned id.
pub async fn create<E: Entity>(
    State(state): State<AppState>,
    RecordBody(form): RecordBody,
) -> AppResult<impl IntoResponse>
where
    AppState: StoreFor<E>,
{
    let draft = validate::<E>(&form)?;
    let record = store::<E>(&state).create(draft).await;

    tracing::info!(entity = E::NAME, id = record.id(), "Record created");

    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /<resource>/{id}
///
/// Full replacement. The path id wins over any id in the body.
pub async fn update<E: Entity>(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    RecordBody(form): RecordBody,
) -> AppResult<impl IntoResponse>
where
    AppState: StoreFor<E>,
{
    let draft = validate::<E>(&form)?;
    let record = store::<E>(&state).update(id, draft).await?;

    tracing::info!(entity = E::NAME, id, "Record updated");

    Ok(Json(record))
}

/// DELETE /<resource>/{id}
pub async fn delete<E: Entity>(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<impl IntoResponse>
where
    AppState: StoreFor<E>,
{
    store::<E>(&state).delete(id).await?;

    tracing::info!(entity = E::NAME, id, "Record deleted");

    Ok(Json(json!({})))
}
