//! Request extractors.
//!
//! Every rejection is an [`AppError`], so malformed paths and bodies get
//! the same JSON error envelope as handler failures.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// JSON body that has been deserialized and passed `Validate`.
///
/// Malformed or mistyped bodies are rejected with `400 BAD_REQUEST`;
/// constraint failures with `400 VALIDATION_ERROR` and per-field messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Raw request body whose parsing is left to the handler.
///
/// Update handlers resolve the target row first, so a missing id is
/// reported as 404 before anything about the body.
#[derive(Debug, Clone)]
pub struct DeferredJson(Bytes);

impl DeferredJson {
    /// Deserialize the body and run `Validate` on it.
    pub fn validated<T>(&self) -> AppResult<T>
    where
        T: DeserializeOwned + Validate,
    {
        let value: T = serde_json::from_slice(&self.0).map_err(|err| {
            AppError::BadRequest(format!("Failed to parse the request body as JSON: {err}"))
        })?;
        value.validate()?;
        Ok(value)
    }
}

impl<S> FromRequest<S> for DeferredJson
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(bytes))
    }
}

/// Path parameters, rejecting unparseable segments with a JSON
/// `400 BAD_REQUEST`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
