use super::{Device, DeviceResult};
use crate::ctx::{RequestCtx, ResponseCtx};
use std::sync::Arc;

pub struct DevicePipeline;

impl DevicePipeline {
    pub fn run_on_request(devices: &[Arc<dyn Device>], ctx: &mut RequestCtx) -> DeviceResult {
        for dev in devices {
            match dev.on_request(ctx) {
                DeviceResult::Continue => continue,
                r @ DeviceResult::Respond(_) => {
                    tracing::debug!(device = dev.name(), "device responded early");
                    return r;
                }
            }
        }
        DeviceResult::Continue
    }

    pub fn run_on_response(devices: &[Arc<dyn Device>], ctx: &RequestCtx, resp: &mut ResponseCtx) {
        for dev in devices {
            dev.on_response(ctx, resp);
        }
    }
}
