//! Ordered content-length probing over a resource's size capabilities.

use super::Resource;
use crate::error::{Error, Result};

type SizeProbe = fn(&dyn Resource) -> Option<Result<u64>>;

/// Probes in priority order. The first probe whose capability is present
/// decides; later ones are not consulted even if it fails.
const SIZE_PROBES: [(&str, SizeProbe); 3] = [
    ("stat", probe_stat),
    ("size", probe_size),
    ("fallible-size", probe_fallible_size),
];

fn probe_stat(resource: &dyn Resource) -> Option<Result<u64>> {
    let provider = resource.stat_provider()?;
    Some(provider.stat().map(|s| s.len).map_err(Error::Size))
}

fn probe_size(resource: &dyn Resource) -> Option<Result<u64>> {
    resource.size_provider().map(|p| Ok(p.size()))
}

fn probe_fallible_size(resource: &dyn Resource) -> Option<Result<u64>> {
    let provider = resource.fallible_size_provider()?;
    Some(provider.try_size().map_err(Error::Size))
}

/// Returns the resource's content length, or `None` if it exposes no size
/// capability at all.
pub(crate) fn probe_content_length(resource: &dyn Resource) -> Option<Result<u64>> {
    SIZE_PROBES.iter().find_map(|(strategy, probe)| {
        let outcome = probe(resource)?;
        tracing::debug!(strategy, ok = outcome.is_ok(), "probed content length");
        Some(outcome)
    })
}
