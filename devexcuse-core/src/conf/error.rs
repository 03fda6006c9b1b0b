use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid PORT override '{value}'")]
    #[diagnostic(help("PORT must be an integer between 0 and 65535."))]
    InvalidPort { value: String },

    // Validation
    #[error("invalid listen address '{listen}'")]
    #[diagnostic(help("Use an IP address and port, for example:\n\n[server]\nlisten = \"0.0.0.0:5500\""))]
    InvalidListen { listen: String },

    #[error("{field} must be greater than zero")]
    #[diagnostic(help("Remove the key to fall back to its default, or set a positive value."))]
    Zero { field: &'static str },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
