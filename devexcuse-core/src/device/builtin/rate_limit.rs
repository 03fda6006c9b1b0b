use crate::conf::RateLimitConfig;
use crate::ctx::{RequestCtx, ResponseCtx};
use crate::device::core::{Device, DeviceResult};
use dashmap::DashMap;
use http::StatusCode;
use std::collections::VecDeque;
use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

pub const GENERAL_LIMIT_MESSAGE: &str = "Too many requests from this IP, please try again later.";
pub const SEARCH_LIMIT_MESSAGE: &str =
    "Too many search requests from this IP, please try again later.";

/// Paths that never count against any limit.
const EXEMPT_PATHS: &[&str] = &["/health"];
const SEARCH_PATH: &str = "/search";

/// Stale clients are swept once every this many admissions.
const PRUNE_EVERY: u64 = 1024;

/// Time source for the limiter, swappable in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Sliding-window log keyed by client address.
///
/// Each client keeps the instants of its admitted requests inside the
/// current window. A request is admitted while fewer than `max` remain.
#[derive(Debug)]
struct SlidingWindow {
    max: usize,
    window: Duration,
    hits: DashMap<IpAddr, VecDeque<Instant>>,
    calls: AtomicU64,
}

impl SlidingWindow {
    fn new(max: usize, window: Duration) -> Self {
        Self {
            max,
            window,
            hits: DashMap::new(),
            calls: AtomicU64::new(0),
        }
    }

    fn try_acquire(&self, ip: IpAddr, now: Instant) -> bool {
        let admitted = {
            let mut log = self.hits.entry(ip).or_default();
            Self::expire(&mut log, now, self.window);

            if log.len() < self.max {
                log.push_back(now);
                true
            } else {
                false
            }
        };

        if self.calls.fetch_add(1, Ordering::Relaxed) % PRUNE_EVERY == PRUNE_EVERY - 1 {
            self.prune(now);
        }

        admitted
    }

    fn expire(log: &mut VecDeque<Instant>, now: Instant, window: Duration) {
        while let Some(oldest) = log.front() {
            if now.saturating_duration_since(*oldest) >= window {
                log.pop_front();
            } else {
                break;
            }
        }
    }

    /// Drop clients with no hits left in the window.
    fn prune(&self, now: Instant) {
        self.hits.retain(|_, log| {
            Self::expire(log, now, self.window);
            !log.is_empty()
        });
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.hits.len()
    }
}

/// Per-client request caps: a general bucket for every route and a
/// stricter one for search.
pub struct RateLimitDevice {
    general: SlidingWindow,
    search: SlidingWindow,
    clock: Arc<dyn Clock>,
}

impl RateLimitDevice {
    pub fn from_config(cfg: &RateLimitConfig, clock: Arc<dyn Clock>) -> Self {
        let window = Duration::from_secs(cfg.window_secs);
        Self {
            general: SlidingWindow::new(cfg.general_max, window),
            search: SlidingWindow::new(cfg.search_max, window),
            clock,
        }
    }

    fn reject(ctx: &RequestCtx, bucket: &'static str, message: &'static str) -> DeviceResult {
        tracing::warn!(
            event = "rate_limited",
            request_id = %ctx.request_id,
            peer = %ctx.peer_ip,
            path = %ctx.path,
            bucket,
        );
        DeviceResult::Respond(ResponseCtx::text(StatusCode::TOO_MANY_REQUESTS, message))
    }
}

impl Device for RateLimitDevice {
    fn name(&self) -> &'static str {
        "rate_limit"
    }

    fn on_request(&self, ctx: &mut RequestCtx) -> DeviceResult {
        if EXEMPT_PATHS.contains(&ctx.path.as_str()) {
            return DeviceResult::Continue;
        }

        let now = self.clock.now();

        if !self.general.try_acquire(ctx.peer_ip, now) {
            return Self::reject(ctx, "general", GENERAL_LIMIT_MESSAGE);
        }

        if ctx.path == SEARCH_PATH && !self.search.try_acquire(ctx.peer_ip, now) {
            return Self::reject(ctx, "search", SEARCH_LIMIT_MESSAGE);
        }

        DeviceResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;
    use pretty_assertions::assert_eq;
    use std::net::Ipv4Addr;
    use std::sync::Mutex;

    struct FakeClock {
        now: Mutex<Instant>,
    }

    impl FakeClock {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                now: Mutex::new(Instant::now()),
            })
        }

        fn advance(&self, by: Duration) {
            let mut now = self.now.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> Instant {
            *self.now.lock().unwrap()
        }
    }

    fn device(general_max: usize, search_max: usize, clock: Arc<FakeClock>) -> RateLimitDevice {
        let cfg = RateLimitConfig {
            enabled: true,
            window_secs: 60,
            general_max,
            search_max,
        };
        RateLimitDevice::from_config(&cfg, clock)
    }

    fn request(path: &str) -> RequestCtx {
        RequestCtx::local(Method::GET, path)
    }

    fn from_peer(path: &str, ip: IpAddr) -> RequestCtx {
        let mut ctx = request(path);
        ctx.peer_ip = ip;
        ctx
    }

    fn rejection(result: DeviceResult) -> Option<(StatusCode, String)> {
        match result {
            DeviceResult::Continue => None,
            DeviceResult::Respond(resp) => Some((
                resp.status,
                String::from_utf8(resp.body).unwrap(),
            )),
        }
    }

    #[test]
    fn general_limit_rejects_once_exhausted() {
        let rl = device(3, 10, FakeClock::new());

        for _ in 0..3 {
            assert!(rejection(rl.on_request(&mut request("/excuse"))).is_none());
        }

        assert_eq!(
            rejection(rl.on_request(&mut request("/categories"))),
            Some((
                StatusCode::TOO_MANY_REQUESTS,
                GENERAL_LIMIT_MESSAGE.to_string()
            ))
        );
    }

    #[test]
    fn search_has_its_own_stricter_cap() {
        let rl = device(100, 2, FakeClock::new());

        assert!(rejection(rl.on_request(&mut request("/search"))).is_none());
        assert!(rejection(rl.on_request(&mut request("/search"))).is_none());

        assert_eq!(
            rejection(rl.on_request(&mut request("/search"))),
            Some((
                StatusCode::TOO_MANY_REQUESTS,
                SEARCH_LIMIT_MESSAGE.to_string()
            ))
        );

        // Other routes are still admitted.
        assert!(rejection(rl.on_request(&mut request("/excuse"))).is_none());
    }

    #[test]
    fn health_is_exempt() {
        let rl = device(1, 1, FakeClock::new());

        for _ in 0..10 {
            assert!(rejection(rl.on_request(&mut request("/health"))).is_none());
        }
        assert!(rejection(rl.on_request(&mut request("/excuse"))).is_none());
    }

    #[test]
    fn trailing_slash_search_counts_against_search_cap() {
        let rl = device(100, 2, FakeClock::new());

        assert!(rejection(rl.on_request(&mut request("/search/?q=cache"))).is_none());
        assert!(rejection(rl.on_request(&mut request("/search?q=cache"))).is_none());

        assert_eq!(
            rejection(rl.on_request(&mut request("/search/?q=cache"))),
            Some((
                StatusCode::TOO_MANY_REQUESTS,
                SEARCH_LIMIT_MESSAGE.to_string()
            ))
        );
    }

    #[test]
    fn trailing_slash_health_is_exempt() {
        let rl = device(1, 1, FakeClock::new());

        for _ in 0..10 {
            assert!(rejection(rl.on_request(&mut request("/health/"))).is_none());
        }
        assert!(rejection(rl.on_request(&mut request("/excuse"))).is_none());
    }

    #[test]
    fn window_slides() {
        let clock = FakeClock::new();
        let rl = device(2, 2, clock.clone());

        assert!(rejection(rl.on_request(&mut request("/excuse"))).is_none());
        clock.advance(Duration::from_secs(30));
        assert!(rejection(rl.on_request(&mut request("/excuse"))).is_none());
        assert!(rejection(rl.on_request(&mut request("/excuse"))).is_some());

        // The first hit leaves the window, freeing exactly one slot.
        clock.advance(Duration::from_secs(30));
        assert!(rejection(rl.on_request(&mut request("/excuse"))).is_none());
        assert!(rejection(rl.on_request(&mut request("/excuse"))).is_some());
    }

    #[test]
    fn clients_are_limited_independently() {
        let rl = device(1, 1, FakeClock::new());
        let a = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));
        let b = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2));

        assert!(rejection(rl.on_request(&mut from_peer("/excuse", a))).is_none());
        assert!(rejection(rl.on_request(&mut from_peer("/excuse", a))).is_some());
        assert!(rejection(rl.on_request(&mut from_peer("/excuse", b))).is_none());
    }

    #[test]
    fn idle_clients_are_pruned() {
        let clock = FakeClock::new();
        let window = SlidingWindow::new(5, Duration::from_secs(10));

        for i in 0..10u8 {
            let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, i));
            assert!(window.try_acquire(ip, clock.now()));
        }
        assert_eq!(window.tracked_clients(), 10);

        clock.advance(Duration::from_secs(11));
        window.prune(clock.now());

        assert_eq!(window.tracked_clients(), 0);
    }
}
