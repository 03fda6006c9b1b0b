use crate::conf::DevExcuseConfig;
use crate::device::builtin::{CorsDevice, RateLimitDevice, RequestLoggingDevice, SystemClock};
use crate::device::core::Device;
use std::sync::Arc;

/// Ordered set of devices run for every request.
pub struct DeviceRegistry {
    devices: Vec<Arc<dyn Device>>,
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
        }
    }

    /// Build the builtin devices enabled in `cfg`.
    ///
    /// Order matters: logging sees every request, CORS answers preflights
    /// before they count against the rate limit.
    pub fn from_config(cfg: &DevExcuseConfig) -> Self {
        let mut registry = Self::new();

        if cfg.logging.requests {
            registry.push(Arc::new(RequestLoggingDevice::default()));
        }

        if cfg.cors.enabled {
            registry.push(Arc::new(CorsDevice::from_config(&cfg.cors)));
        }

        if cfg.rate_limit.enabled {
            registry.push(Arc::new(RateLimitDevice::from_config(
                &cfg.rate_limit,
                Arc::new(SystemClock),
            )));
        }

        tracing::debug!(
            devices = ?registry.devices.iter().map(|d| d.name()).collect::<Vec<_>>(),
            "device registry built"
        );

        registry
    }

    pub fn push(&mut self, device: Arc<dyn Device>) {
        self.devices.push(device);
    }

    pub fn all(&self) -> &[Arc<dyn Device>] {
        &self.devices
    }
}
