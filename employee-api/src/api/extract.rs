//! Request extractors
//!
//! Thin wrappers over axum's `Path` and `Json` whose rejections render as
//! [`AppError`] so every failure shares one body shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::utils::AppError;

/// Integer employee id from `/{id}`
///
/// Anything that does not parse as an integer cannot name an employee, so
/// it is a 404 rather than a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeId(pub i64);

impl<S> FromRequestParts<S> for EmployeeId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found("Employee"))?;
        raw.parse::<i64>()
            .map(EmployeeId)
            .map_err(|_| AppError::not_found(format!("Employee {raw}")))
    }
}

/// JSON body that rejects with `InvalidRequest`
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    tracing::debug!(status = %rejection.status(), "Rejected request body: {}", rejection.body_text());
    AppError::invalid_request(rejection.body_text())
}
