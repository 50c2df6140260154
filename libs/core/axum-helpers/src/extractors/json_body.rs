//! JSON body extractor that rejects with the shared error envelope.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Drop-in replacement for [`axum::Json`] on the request side.
///
/// Malformed or missing bodies become a 400 `{success: false, error}` instead
/// of axum's plain-text rejection. Field rules are left to the handler, so
/// `T` is usually `serde_json::Value` or a lenient payload type.
///
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create(JsonBody(payload): JsonBody<serde_json::Value>) -> String {
///     payload.to_string()
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(JsonBody(data))
    }
}
