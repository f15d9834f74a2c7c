//! Resolve command: show where a `file:` URL points without opening it.

use anyhow::Result;
use filetx_core::config::TransportConfig;
use filetx_core::FileTransport;

pub fn run_resolve(cfg: &TransportConfig, url: &str) -> Result<()> {
    let path = FileTransport::from_config(cfg).resolve(url)?;
    println!("{}", path.display());
    Ok(())
}
