use http::{HeaderMap, HeaderValue, StatusCode, header};
use serde::Serialize;

/// Fully materialized response, produced by the handler or by a device.
#[derive(Debug)]
pub struct ResponseCtx {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ResponseCtx {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn empty(status: StatusCode) -> Self {
        Self::new(status, HeaderMap::new(), Vec::new())
    }

    pub fn json<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self::with_content_type(status, "application/json; charset=utf-8", body),
            Err(e) => {
                tracing::error!(error = %e, "json serialization failed");
                Self::text(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "json serialization failed",
                )
            }
        }
    }

    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        Self::with_content_type(status, "text/plain; charset=utf-8", body.into().into_bytes())
    }

    pub fn html(status: StatusCode, body: impl Into<String>) -> Self {
        Self::with_content_type(status, "text/html; charset=utf-8", body.into().into_bytes())
    }

    fn with_content_type(status: StatusCode, content_type: &'static str, body: Vec<u8>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        Self::new(status, headers, body)
    }

    /// Body parsed as JSON. Test helper.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.body).ok()
    }
}
