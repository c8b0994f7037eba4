use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::access::AccessError;
use crate::store::StoreError;
use crate::structs::api;
use crate::validation::ValidationError;

/// Every way a resume request can fail. Converted into a response at the handler boundary.
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error(transparent)]
    MissingField(#[from] ValidationError),

    #[error(transparent)]
    NotAuthorized(#[from] AccessError),

    #[error("{}", api::NOT_FOUND)]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    UnreadableBody(#[from] BytesRejection),
}

impl ResumeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ResumeError::MissingField(_) => StatusCode::FORBIDDEN,
            ResumeError::NotAuthorized(_) => StatusCode::UNAUTHORIZED,
            ResumeError::NotFound => StatusCode::NOT_FOUND,
            ResumeError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ResumeError::UnreadableBody(rejection) => rejection.status(),
        }
    }

    /// Message returned to the caller. Store details stay in the logs.
    pub fn body(&self) -> String {
        match self {
            ResumeError::Store(_) => String::from(api::INTERNAL_ERROR),
            ResumeError::UnreadableBody(rejection) => rejection.body_text(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ResumeError {
    fn into_response(self) -> Response {
        if let ResumeError::Store(error) = &self {
            tracing::error!("record store failure: {}", error);
        }
        (self.status_code(), api::cors_headers(), self.body()).into_response()
    }
}
