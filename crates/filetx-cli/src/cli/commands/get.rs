//! Get command: fetch a URL through the scheme router and stream the body.

use anyhow::{Context, Result};
use filetx_core::config::TransportConfig;
use filetx_core::{Request, RoundTrip, SchemeRouter};
use std::io::{self, Write};

/// Fetch `url` and copy its body to stdout, optionally preceded by headers.
pub fn run_get(cfg: &TransportConfig, url: &str, include_headers: bool) -> Result<()> {
    let router = SchemeRouter::with_file_transport(cfg.base_dir.clone());
    let mut resp = router
        .round_trip(&Request::get(url))
        .with_context(|| format!("GET {url}"))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if include_headers {
        writeln!(out, "{} {}", resp.proto, resp.status_text)?;
        for (name, value) in &resp.headers {
            writeln!(out, "{}: {}", name, value.to_str().unwrap_or("<non-ascii>"))?;
        }
        writeln!(out)?;
    }

    let copied = io::copy(&mut resp.body, &mut out).context("copy response body")?;
    out.flush()?;
    tracing::debug!(url, copied, "wrote response body");
    Ok(())
}
