use crate::conf::DevExcuseConfig;
use owo_colors::OwoColorize;

const LOGO: &str = r#"
  ____             _____
 |  _ \  _____   _| ____|_  _____ _   _ ___  ___
 | | | |/ _ \ \ / /  _| \ \/ / __| | | / __|/ _ \
 | |_| |  __/\ V /| |___ >  < (__| |_| \__ \  __/
 |____/ \___| \_/ |_____/_/\_\___|\__,_|___/\___|
"#;

/// Startup banner. Goes to stdout, not to the log stream.
pub fn print_banner(config: &DevExcuseConfig) {
    let port = config
        .listen_addr()
        .map(|addr| addr.port().to_string())
        .unwrap_or_else(|_| config.server.listen.clone());

    println!("{}", LOGO.magenta().bold());
    println!(
        "{}",
        format!("🌍 DevExcuse API is live at http://localhost:{port}").green()
    );

    if config.cors.enabled {
        println!("{}", "🌐 CORS enabled".cyan());
    }
    if config.rate_limit.enabled {
        println!("{}", "🛡️  Rate limiting enabled".yellow());
    }

    println!(
        "{}",
        format!("💚 Health check: http://localhost:{port}/health").blue()
    );
}
