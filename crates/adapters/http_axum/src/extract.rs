//! JSON body extraction with the API's error bodies.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// [`axum::Json`] with rejections mapped to the API's error bodies.
///
/// A body that is not syntactically JSON answers `Invalid JSON`; a body that
/// parses but does not deserialize into the target shape answers
/// `Missing required fields`. Required-field presence is therefore enforced
/// entirely by the typed request structs.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::JsonDataError(_)) => Err(ApiError::MissingFields),
            Err(_) => Err(ApiError::MalformedJson),
        }
    }
}
