//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// `Json<T>` whose rejections come back as 400 validation errors
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::Body {
                reason: rejection.body_text(),
            })
        })?;
        Ok(Self(value))
    }
}

/// The `{id}` segment of a user route.
///
/// Ids are SQLite integers, so a segment that doesn't parse names no user
/// and is answered with a JSON 404.
pub struct UserPathId(pub i64);

impl<S> FromRequestParts<S> for UserPathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let not_found = |id: String| ApiError::NotFound {
            resource: "user",
            id,
        };

        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| not_found(rejection.body_text()))?;
        raw.parse().map(Self).map_err(|_| not_found(raw))
    }
}
