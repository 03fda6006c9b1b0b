use crate::conf::{ConfigError, DevExcuseConfig};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_CONFIG_PATH: &str = "config/devexcuse.toml";

/// Read, parse and validate a config file, then apply the `PORT` override.
pub fn load_config(path: &Path) -> Result<DevExcuseConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let mut cfg: DevExcuseConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    //--------------------------------------------------------------------------
    // Environment overrides + semantic validation
    //--------------------------------------------------------------------------
    cfg.apply_port_override(std::env::var("PORT").ok().as_deref())?;
    cfg.validate()?;

    Ok(cfg)
}

impl DevExcuseConfig {
    /// Load `path` if it exists, otherwise fall back to built-in defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return load_config(path);
        }

        tracing::info!(path = %path.display(), "config file not found, using defaults");

        let mut cfg = Self::default();
        cfg.apply_port_override(std::env::var("PORT").ok().as_deref())?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Replace the port of `server.listen`, keeping the host.
    pub fn apply_port_override(&mut self, port: Option<&str>) -> Result<(), ConfigError> {
        let Some(port) = port else {
            return Ok(());
        };

        let port: u16 = port.trim().parse().map_err(|_| ConfigError::InvalidPort {
            value: port.to_string(),
        })?;

        let mut addr = self.listen_addr()?;
        addr.set_port(port);
        self.server.listen = addr.to_string();

        tracing::debug!(listen = %self.server.listen, "listen port overridden from PORT");
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .listen
            .parse()
            .map_err(|_| ConfigError::InvalidListen {
                listen: self.server.listen.clone(),
            })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.listen_addr()?;

        if self.server.threads == Some(0) {
            return Err(ConfigError::Zero {
                field: "server.threads",
            });
        }
        if self.selection.max_count == 0 {
            return Err(ConfigError::Zero {
                field: "selection.max_count",
            });
        }
        if self.rate_limit.window_secs == 0 {
            return Err(ConfigError::Zero {
                field: "rate_limit.window_secs",
            });
        }
        if self.rate_limit.general_max == 0 {
            return Err(ConfigError::Zero {
                field: "rate_limit.general_max",
            });
        }
        if self.rate_limit.search_max == 0 {
            return Err(ConfigError::Zero {
                field: "rate_limit.search_max",
            });
        }

        Ok(())
    }
}

impl FromStr for DevExcuseConfig {
    type Err = ConfigError;

    /// Parse and validate an in-memory config. No environment overrides.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cfg: Self = toml::from_str(s).map_err(|e| ConfigError::parse("<inline>", e))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
