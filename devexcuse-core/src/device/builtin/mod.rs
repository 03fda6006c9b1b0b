pub mod cors;
pub mod rate_limit;
pub mod request_logging;

pub use cors::CorsDevice;
pub use rate_limit::{Clock, RateLimitDevice, SystemClock};
pub use request_logging::RequestLoggingDevice;
