//! Body extractor accepting either JSON or a url-encoded form.
//!
//! HTML forms post `application/x-www-form-urlencoded`, programmatic clients
//! post JSON. Both decode into the same type.

use axum::{
    async_trait,
    extract::{
        rejection::{FormRejection, JsonRejection},
        FromRequest, Request,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub struct Payload<T>(pub T);

#[derive(Debug, Error)]
pub enum PayloadRejection {
    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Form(#[from] FormRejection),

    #[error("Expected request with `Content-Type: application/json` or `application/x-www-form-urlencoded`")]
    UnsupportedMediaType,
}

impl PayloadRejection {
    pub fn body_text(&self) -> String {
        match self {
            PayloadRejection::Json(rejection) => rejection.body_text(),
            PayloadRejection::Form(rejection) => rejection.body_text(),
            PayloadRejection::UnsupportedMediaType => self.to_string(),
        }
    }
}

impl IntoResponse for PayloadRejection {
    fn into_response(self) -> Response {
        match self {
            PayloadRejection::Json(rejection) => rejection.into_response(),
            PayloadRejection::Form(rejection) => rejection.into_response(),
            PayloadRejection::UnsupportedMediaType => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, self.to_string()).into_response()
            }
        }
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = PayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mime = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(|value| value.trim().to_ascii_lowercase())
            .unwrap_or_default();

        if mime == "application/json" || mime.ends_with("+json") {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            Ok(Payload(value))
        } else if mime == "application/x-www-form-urlencoded" {
            let Form(value) = Form::<T>::from_request(req, state).await?;
            Ok(Payload(value))
        } else {
            Err(PayloadRejection::UnsupportedMediaType)
        }
    }
}
