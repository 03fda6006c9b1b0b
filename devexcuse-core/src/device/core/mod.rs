pub mod pipeline;
pub mod registry;
pub mod result;

pub use self::result::DeviceResult;
use crate::ctx::{RequestCtx, ResponseCtx};

/// A request policy hook run by the gateway around the route handler.
///
/// Devices are shared across worker threads, so they must be both Send and
/// Sync. Both hooks default to doing nothing.
pub trait Device: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Called before routing. Returning `Respond` skips the handler and any
    /// remaining devices' `on_request`.
    fn on_request(&self, _ctx: &mut RequestCtx) -> DeviceResult {
        DeviceResult::Continue
    }

    /// Called for every response, including ones produced by a device.
    fn on_response(&self, _ctx: &RequestCtx, _resp: &mut ResponseCtx) {}
}
