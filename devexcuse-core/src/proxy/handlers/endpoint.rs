use http::Method;
use std::str::FromStr;

/// Every route the API answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEndpoint {
    Landing,
    Health,
    Excuse,
    Devil,
    Categories,
    Search,
    Stats,
    Visitors,
}

/// Listed in the body of 404 responses.
pub const AVAILABLE_ENDPOINTS: &[&str] = &[
    "GET /",
    "GET /health",
    "GET /excuse",
    "GET /excuse/devil",
    "GET /categories",
    "GET /search",
    "GET /stats",
    "GET /api/visitors",
    "POST /api/visitors",
];

impl FromStr for ApiEndpoint {
    type Err = &'static str;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        // "/excuse/" routes like "/excuse".
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };

        match path {
            "/" => Ok(ApiEndpoint::Landing),
            "/health" => Ok(ApiEndpoint::Health),
            "/excuse" => Ok(ApiEndpoint::Excuse),
            "/excuse/devil" => Ok(ApiEndpoint::Devil),
            "/categories" => Ok(ApiEndpoint::Categories),
            "/search" => Ok(ApiEndpoint::Search),
            "/stats" => Ok(ApiEndpoint::Stats),
            "/api/visitors" => Ok(ApiEndpoint::Visitors),
            _ => Err("unknown endpoint"),
        }
    }
}

impl ApiEndpoint {
    /// Value of the `Allow` header for this route.
    pub fn allow(&self) -> &'static str {
        match self {
            ApiEndpoint::Visitors => "GET, POST",
            _ => "GET",
        }
    }

    pub fn accepts(&self, method: &Method) -> bool {
        match self {
            ApiEndpoint::Visitors => method == Method::GET || method == Method::POST,
            _ => method == Method::GET,
        }
    }
}
