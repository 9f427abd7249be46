// src/collector/net.rs
//! Cumulative network traffic since the counters were last reset.

use serde::Serialize;

use super::source::MetricsSource;
use super::{Outcome, bytes_to_mb};
use crate::error::CollectResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkInfo {
    pub bytes_sent_mb: f64,
    pub bytes_recv_mb: f64,
}

/// Function to collect traffic totals across all interfaces, or an error mapping.
pub fn get_network_info(source: &impl MetricsSource) -> Outcome<NetworkInfo> {
    Outcome::record("network", network_info(source))
}

fn network_info(source: &impl MetricsSource) -> CollectResult<NetworkInfo> {
    source.ensure_available()?;
    let sample = source.network()?;

    Ok(NetworkInfo {
        bytes_sent_mb: bytes_to_mb(sample.sent),
        bytes_recv_mb: bytes_to_mb(sample.received),
    })
}
