use crate::conf::Environment;
use crate::ctx::ResponseCtx;
use crate::proxy::handlers::endpoint::AVAILABLE_ENDPOINTS;
use crate::visitors::VisitorError;
use http::{HeaderValue, Method, StatusCode, header};
use serde_json::json;
use thiserror::Error;

/// Every way a request can fail once it reaches the handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No excuses found for that category.")]
    CategoryEmpty,

    #[error("Missing query parameter ?q=")]
    MissingQuery,

    #[error("Endpoint not found")]
    NotFound,

    #[error("method {method} not allowed")]
    MethodNotAllowed { method: Method, allow: &'static str },

    #[error(transparent)]
    Visitors(#[from] VisitorError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::CategoryEmpty | ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MissingQuery => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Visitors(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON error envelope. Internal fault details only leave the process in
    /// development mode.
    pub fn into_response(self, environment: Environment) -> ResponseCtx {
        let status = self.status();

        match self {
            ApiError::NotFound => ResponseCtx::json(
                status,
                &json!({
                    "error": "Endpoint not found",
                    "availableEndpoints": AVAILABLE_ENDPOINTS,
                }),
            ),

            ApiError::MethodNotAllowed { allow, .. } => {
                let mut resp = ResponseCtx::json(status, &json!({ "error": "Method not allowed" }));
                resp.headers
                    .insert(header::ALLOW, HeaderValue::from_static(allow));
                resp
            }

            ApiError::Visitors(err) => {
                tracing::error!(error = %err, "internal error");

                let message = match environment {
                    Environment::Development => err.to_string(),
                    Environment::Production => "Something went wrong".to_string(),
                };

                ResponseCtx::json(
                    status,
                    &json!({
                        "error": "Internal server error",
                        "message": message,
                    }),
                )
            }

            err @ (ApiError::CategoryEmpty | ApiError::MissingQuery) => {
                ResponseCtx::json(status, &json!({ "error": err.to_string() }))
            }
        }
    }
}
