//! Request extractors that reject with [`AppError`] JSON bodies instead of
//! axum's plain-text rejections.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use cadastros_core::types::{DbId, FormData};

use crate::error::AppError;

/// Numeric record id from the `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for RecordId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                AppError::BadRequest(format!("Identificador inválido: {}", rejection.body_text()))
            })?;
        Ok(Self(id))
    }
}

/// Flat JSON object body, validated later against a record schema.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordBody(pub FormData);

impl<S: Send + Sync> FromRequest<S> for RecordBody {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(form) = Json::<FormData>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                AppError::BadRequest(format!("Corpo da requisição inválido: {}", rejection.body_text()))
            })?;
        Ok(Self(form))
    }
}
