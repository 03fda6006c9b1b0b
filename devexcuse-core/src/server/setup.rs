use crate::conf::DevExcuseConfig;
use crate::device::core::registry::DeviceRegistry;
use crate::proxy::ExcuseGateway;
use crate::server::{build_app_state, print_banner};
use anyhow::{Context, Error, Result};
use pingora::prelude::*;
use pingora::server::Server;
use pingora::server::configuration::ServerConf;
use std::sync::Arc;

/// Run the Pingora server with the given configuration.
pub fn run(config: DevExcuseConfig) -> Result<()> {
    let server = build_pingora_server(config.clone())?;

    if config.server.banner {
        print_banner(&config);
    }

    tracing::info!(listen = %config.server.listen, "DevExcuse API starting");
    server.run_forever();
}

/// Build the Pingora server.
pub fn build_pingora_server(config: DevExcuseConfig) -> Result<Server, Error> {
    let listen = config
        .listen_addr()
        .context("server.listen is not a socket address")?;

    let mut server = if let Some(threads) = config.server.threads {
        tracing::debug!(
            threads,
            "Creating Pingora server with overridden worker threads"
        );
        let mut conf =
            ServerConf::new().context("could not construct pingora server configuration")?;
        conf.threads = threads;
        Server::new_with_opt_and_conf(None, conf)
    } else {
        // "None" is required here to truly tell Pingora to use its default settings.
        Server::new(None)?
    };

    server.bootstrap();

    let config = Arc::new(config);

    // Load devices
    let devices = DeviceRegistry::from_config(&config);
    tracing::debug!("Loaded device count = {}", devices.all().len());

    let state = Arc::new(build_app_state(config));
    let gateway = ExcuseGateway::new(state, devices);

    // Build HTTP proxy service from Pingora.
    let mut svc = http_proxy_service(&server.configuration, gateway);
    svc.add_tcp(&listen.to_string());

    server.add_service(svc);

    Ok(server)
}
