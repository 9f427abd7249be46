// src/collector/mod.rs
//! Collectors for each metric category plus the shared result shape.

pub mod cpu;
pub mod disk;
pub mod memory;
pub mod net;
pub mod source;
pub mod sys;

pub use cpu::{CpuCount, CpuInfo, get_cpu_info};
pub use disk::{DiskInfo, ROOT_PATH, get_disk_info};
pub use memory::{MemoryInfo, get_memory_info};
pub use net::{NetworkInfo, get_network_info};
pub use source::{
    ACCESSOR, CpuIdentity, DiskSample, MemorySample, MetricsSource, NetworkSample, SysinfoSource,
};
pub use sys::{AllInfo, RUST_VERSION, get_all_info, get_hostname, get_timestamp};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::CollectResult;

/// Bytes per gigabyte (binary units).
pub const GB: f64 = 1024.0 * 1024.0 * 1024.0;
/// Bytes per megabyte (binary units).
pub const MB: f64 = 1024.0 * 1024.0;

/// What a collector produced: its own fields, or a single `error` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    Available(T),
    Failed { error: String },
}

impl<T> Outcome<T> {
    /// Fold a query result into an outcome, logging degraded collectors.
    pub fn record(category: &str, result: CollectResult<T>) -> Self {
        match result {
            Ok(info) => {
                debug!(category, "collected");
                Outcome::Available(info)
            }
            Err(e) => {
                warn!(category, error = %e, "collector degraded");
                Outcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}

/// Round half away from zero to `places` decimal digits.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

pub fn bytes_to_gb(bytes: u64) -> f64 {
    round_to(bytes as f64 / GB, 2)
}

pub fn bytes_to_mb(bytes: u64) -> f64 {
    round_to(bytes as f64 / MB, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollectError;

    #[test]
    fn test_binary_units() {
        assert_eq!(bytes_to_gb(1024 * 1024 * 1024), 1.0);
        assert_eq!(bytes_to_gb(1_500_000_000), 1.4);
        assert_eq!(bytes_to_mb(1024 * 1024 * 3 / 2), 1.5);
        assert_eq!(bytes_to_mb(1_000_000), 0.95);
        assert_eq!(bytes_to_mb(0), 0.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(33.33333, 2), 33.33);
        assert_eq!(round_to(66.666666, 2), 66.67);
        assert_eq!(round_to(42.04, 1), 42.0);
    }

    #[test]
    fn test_failed_outcome_is_single_key() {
        let outcome: Outcome<u64> = Outcome::record(
            "memory",
            Err(CollectError::Unavailable { accessor: "sysinfo" }),
        );
        let value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(value, serde_json::json!({ "error": "sysinfo not installed" }));
    }
}
