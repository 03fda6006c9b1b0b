use crate::conf::DevExcuseConfig;
use std::path::PathBuf;

/// Print the effective configuration. A missing file dumps the defaults.
pub fn dump(path: PathBuf, toml: bool) -> anyhow::Result<()> {
    let cfg = DevExcuseConfig::load_or_default(&path)?;

    let s = if toml {
        toml::to_string_pretty(&cfg)?
    } else {
        serde_json::to_string_pretty(&cfg)?
    };
    println!("{s}");

    Ok(())
}
