//! Request body extraction with envelope-friendly rejections.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that maps parse failures into [`AppError`] so that
/// malformed bodies produce the uniform error envelope instead of axum's
/// plain-text rejection. Only the leading token of the parser error is
/// surfaced to the client.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(AppError::UnreadableBody(leading_token(&rejection))),
        }
    }
}

fn leading_token(rejection: &JsonRejection) -> String {
    let text = rejection.body_text();
    text.split(':')
        .next()
        .unwrap_or("Invalid request body")
        .to_string()
}
