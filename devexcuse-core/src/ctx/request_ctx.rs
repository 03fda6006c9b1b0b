use crate::ctx::{QueryParams, RequestId};
use http::{HeaderMap, Method, Uri};
use pingora::prelude::Session;
use pingora::protocols::l4::socket::SocketAddr as PingoraSocketAddr;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Instant;

/// Canonical request context passed through the device pipeline and handler
#[derive(Debug)]
pub struct RequestCtx {
    pub request_id: RequestId,

    /// HTTP method (immutable)
    pub method: Method,

    /// Path used for routing decisions, without a trailing slash
    pub path: String,

    /// Decoded query parameters
    pub query: QueryParams,

    pub headers: HeaderMap,

    /// Remote IP of the TCP connection (authoritative)
    pub peer_ip: IpAddr,

    /// When the gateway first saw the request.
    pub received_at: Instant,
}

impl RequestCtx {
    pub fn new(method: Method, uri: &Uri, headers: HeaderMap, peer_ip: IpAddr) -> Self {
        Self {
            request_id: RequestId::default(),
            method,
            path: normalize_path(uri.path()),
            query: uri.query().map(QueryParams::parse).unwrap_or_default(),
            headers,
            peer_ip,
            received_at: Instant::now(),
        }
    }

    /// Create a boundary to decouple session from logic.
    pub fn from_session(session: &Session) -> Self {
        let request_header = session.req_header();

        // Get the client IP from Pingora.
        let peer_ip = match session.client_addr() {
            Some(PingoraSocketAddr::Inet(addr)) => addr.ip(),
            _ => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        Self::new(
            request_header.method.clone(),
            &request_header.uri,
            request_header.headers.clone(),
            peer_ip,
        )
    }

    /// A request from localhost without headers, mostly useful in tests.
    pub fn local(method: Method, uri: &str) -> Self {
        let uri: Uri = uri.parse().unwrap_or_else(|_| Uri::from_static("/"));
        Self::new(method, &uri, HeaderMap::new(), Ipv4Addr::LOCALHOST.into())
    }

    pub fn header(&self, name: impl http::header::AsHeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// "/search/" and "/search" must look the same to every device and route.
fn normalize_path(raw: &str) -> String {
    match raw.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => raw.to_string(),
    }
}
