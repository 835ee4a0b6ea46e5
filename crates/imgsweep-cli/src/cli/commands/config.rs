//! `imgsweep config` – show where the config lives and what is in effect.

use anyhow::Result;
use imgsweep_core::config::{self, SweepConfig};
use std::path::Path;

pub fn run_show_config(explicit: Option<&Path>, cfg: &SweepConfig) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", cfg.to_toml()?);
    Ok(())
}
