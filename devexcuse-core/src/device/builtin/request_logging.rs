use crate::ctx::{RequestCtx, ResponseCtx};
use crate::device::core::{Device, DeviceResult};
use tracing::info;

/// One structured event when a request arrives and one when it is answered.
#[derive(Debug, Default)]
pub struct RequestLoggingDevice {}

impl Device for RequestLoggingDevice {
    fn name(&self) -> &'static str {
        "request_logging"
    }

    fn on_request(&self, ctx: &mut RequestCtx) -> DeviceResult {
        info!(
            event = "request",
            request_id = %ctx.request_id,
            method = %ctx.method,
            path = %ctx.path,
            peer = %ctx.peer_ip,
        );

        DeviceResult::Continue
    }

    fn on_response(&self, ctx: &RequestCtx, resp: &mut ResponseCtx) {
        info!(
            event = "response",
            request_id = %ctx.request_id,
            status = resp.status.as_u16(),
            elapsed_ms = ctx.received_at.elapsed().as_millis() as u64,
        );
    }
}
