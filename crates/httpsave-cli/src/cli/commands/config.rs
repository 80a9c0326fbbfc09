//! `httpsave config` – print config location and values.

use anyhow::Result;
use httpsave_core::config;

pub fn run_config() -> Result<()> {
    let cfg = config::load_or_init()?;
    println!("# {}", config::config_path()?.display());
    print!("{}", cfg.to_toml()?);
    Ok(())
}
