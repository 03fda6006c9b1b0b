use crate::conf::{ConfigError, load_config};
use miette::Report;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ listening on {}", cfg.server.listen);
            println!("✔ environment: {:?}", cfg.server.environment);
            println!(
                "✔ rate limit: {} (general {}, search {} per {}s)",
                if cfg.rate_limit.enabled { "on" } else { "off" },
                cfg.rate_limit.general_max,
                cfg.rate_limit.search_max,
                cfg.rate_limit.window_secs
            );
            println!(
                "✔ visitors: {}",
                cfg.visitors
                    .path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "in memory".to_string())
            );
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: ConfigError, plain: bool) {
    if plain {
        eprintln!("{}", err);
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }
}
