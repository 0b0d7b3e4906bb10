//! Request body extraction for the withdrawal endpoint

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};

use crate::error::WithdrawalError;
use crate::presentation::dto::WithdrawalRequest;

/// Reads the body as a JSON object.
///
/// An empty body, or one sent without a JSON content type, reads as `{}`
/// so the amount is reported missing. Anything that is not a JSON object
/// (`[100]`, `"100"`, malformed text) is rejected as an invalid body.
impl<S> FromRequest<S> for WithdrawalRequest
where
    S: Send + Sync,
{
    type Rejection = WithdrawalError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();

        let bytes = Bytes::from_request(Request::from_parts(parts.clone(), body), state)
            .await
            .map_err(|e| WithdrawalError::InvalidBody(JsonRejection::from(e)))?;

        if bytes.is_empty() {
            return Ok(Self::default());
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        match Json::<Map<String, Value>>::from_request(req, state).await {
            Ok(Json(mut object)) => Ok(Self {
                valor: object.remove("valor"),
            }),
            Err(JsonRejection::MissingJsonContentType(_)) => Ok(Self::default()),
            Err(rejection) => Err(WithdrawalError::InvalidBody(rejection)),
        }
    }
}
