use devexcuse_core::conf::{DevExcuseConfig, load_config};
use std::path::Path;

/// Load `fixtures/config/<name>.toml`.
pub fn load_fixture(name: &str) -> DevExcuseConfig {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("config")
        .join(format!("{name}.toml"));

    assert!(path.exists(), "fixture config does not exist: {:?}", path);

    load_config(&path).expect("failed to load fixture config")
}

/// Point the listener at a test-owned port and keep test output quiet.
pub fn patch_runtime(cfg: &mut DevExcuseConfig, listen_port: u16) {
    cfg.server.listen = format!("127.0.0.1:{listen_port}");
    cfg.server.banner = false;
}
