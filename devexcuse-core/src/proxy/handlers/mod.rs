mod api;
mod endpoint;
mod error;
mod landing;

#[cfg(test)]
mod tests;

pub use api::{ApiHandler, AppState, parse_count, search_status};
pub use endpoint::{AVAILABLE_ENDPOINTS, ApiEndpoint};
pub use error::ApiError;
