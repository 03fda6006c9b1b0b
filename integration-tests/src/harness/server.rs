use crate::harness::config::{load_fixture, patch_runtime};
use crate::harness::{CapturedEvent, init_test_tracing};
use devexcuse_core::conf::DevExcuseConfig;
use devexcuse_core::server::build_pingora_server;
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use std::net::TcpStream;
use std::sync::{Arc, Mutex, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

/// Handle to a running DevExcuse test server.
pub struct TestServer {
    base_url: String,
    client: Client,
}

impl TestServer {
    /// Start a server from `fixtures/config/<fixture>.toml`.
    ///
    /// The listen port is allocated dynamically, so tests may run in parallel.
    pub fn start(fixture: &str) -> Self {
        Self::start_with(load_fixture(fixture))
    }

    /// Start a server from an in-memory config.
    pub fn start_with(mut cfg: DevExcuseConfig) -> Self {
        // Initialize tracing (this must happen first).
        init_test_tracing(events());

        let listen_port = free_port();
        patch_runtime(&mut cfg, listen_port);

        let server = build_pingora_server(cfg).expect("failed to build devexcuse server");

        // Run server in background thread
        thread::spawn(move || {
            server.run_forever();
        });

        let base_url = format!("http://127.0.0.1:{listen_port}");

        // Wait for server to accept connections
        wait_for_server(&base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .expect("failed to build client");

        Self { base_url, client }
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Tracing events captured so far, across every server in this process.
    pub fn events(&self) -> Vec<CapturedEvent> {
        events().lock().unwrap().clone()
    }
}

/// Poll until the server responds (or panic).
fn wait_for_server(listen_addr: &str) {
    let addr = listen_addr.strip_prefix("http://").unwrap_or(listen_addr);

    let deadline = Instant::now() + Duration::from_secs(2);

    loop {
        match TcpStream::connect(addr) {
            Ok(_) => return,
            Err(_) => {
                if Instant::now() > deadline {
                    panic!("server failed to start at {}", listen_addr);
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    }
}

static EVENTS: OnceLock<Arc<Mutex<Vec<CapturedEvent>>>> = OnceLock::new();

fn events() -> Arc<Mutex<Vec<CapturedEvent>>> {
    EVENTS
        .get_or_init(|| Arc::new(Mutex::new(Vec::new())))
        .clone()
}

/// Allocate a free port on localhost.
/// This is required to avoid port collisions when running tests in parallel.
fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
