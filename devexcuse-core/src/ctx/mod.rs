mod query;
mod request_ctx;
mod request_id;
mod response_ctx;

pub use query::QueryParams;
pub use request_ctx::RequestCtx;
pub use request_id::RequestId;
pub use response_ctx::ResponseCtx;
