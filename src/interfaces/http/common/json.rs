//! JSON body extractor for Axum
//!
//! `ApiJson<T>` works like `axum::Json<T>`, but every rejection (missing
//! content type, syntax error, wrong field type) becomes a 400 response in
//! the standard `ApiResponse` envelope instead of axum's plain-text 4xx.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::ApiResponse;

pub struct ApiJson<T>(pub T);

/// Body could not be read as the expected JSON document.
#[derive(Debug)]
pub struct ApiJsonRejection(JsonRejection);

impl IntoResponse for ApiJsonRejection {
    fn into_response(self) -> Response {
        debug!(reason = %self.0.body_text(), "Rejected request body");
        let body = ApiResponse::<()>::error(format!("Invalid input data: {}", self.0.body_text()));
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ApiJsonRejection)?;
        Ok(ApiJson(value))
    }
}
