use crate::conf::CorsConfig;
use crate::ctx::{RequestCtx, ResponseCtx};
use crate::device::core::{Device, DeviceResult};
use http::{HeaderName, HeaderValue, Method, StatusCode, header};
use smallvec::SmallVec;

/// Permissive CORS policy: every origin is allowed and reflected back.
///
/// Preflight (`OPTIONS`) requests are answered here with `204` and never
/// reach the router.
#[derive(Debug)]
pub struct CorsDevice {
    pub allow_methods: SmallVec<[Method; 8]>,
    pub allow_headers: SmallVec<[HeaderName; 8]>,
    pub allow_credentials: bool,
    pub max_age_secs: u64,
}

impl CorsDevice {
    pub fn from_config(cfg: &CorsConfig) -> Self {
        Self {
            allow_methods: SmallVec::from_iter([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ]),
            allow_headers: SmallVec::from_iter([
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
                header::ORIGIN,
                HeaderName::from_static("x-requested-with"),
            ]),
            allow_credentials: cfg.allow_credentials,
            max_age_secs: cfg.max_age_secs,
        }
    }

    fn joined<T: AsRef<str>>(items: &[T]) -> Option<HeaderValue> {
        let joined = items
            .iter()
            .map(|i| i.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        HeaderValue::from_str(&joined).ok()
    }
}

impl Default for CorsDevice {
    fn default() -> Self {
        Self::from_config(&CorsConfig::default())
    }
}

impl Device for CorsDevice {
    fn name(&self) -> &'static str {
        "cors"
    }

    fn on_request(&self, ctx: &mut RequestCtx) -> DeviceResult {
        if ctx.method == Method::OPTIONS {
            return DeviceResult::Respond(ResponseCtx::empty(StatusCode::NO_CONTENT));
        }

        DeviceResult::Continue
    }

    fn on_response(&self, ctx: &RequestCtx, resp: &mut ResponseCtx) {
        let headers = &mut resp.headers;

        // Reflect the caller's origin; requests without one get no CORS headers.
        if let Some(origin) = ctx.headers.get(header::ORIGIN) {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
            headers.append(header::VARY, HeaderValue::from_static("Origin"));

            if self.allow_credentials {
                headers.insert(
                    header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                    HeaderValue::from_static("true"),
                );
            }
        }

        if ctx.method != Method::OPTIONS {
            return;
        }

        //---------------------------------------------------------------------
        // Preflight-only headers
        //---------------------------------------------------------------------
        if let Some(methods) = Self::joined(&self.allow_methods) {
            headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, methods);
        }

        if let Some(allowed) = Self::joined(&self.allow_headers) {
            headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, allowed);
        }

        headers.insert(header::ACCESS_CONTROL_MAX_AGE, self.max_age_secs.into());
    }
}
