// src/collector/disk.rs
//! Root filesystem usage.

use std::path::Path;

use serde::Serialize;

use super::source::MetricsSource;
use super::{Outcome, bytes_to_gb, round_to};
use crate::error::{CollectError, CollectResult};

/// The only filesystem reported.
pub const ROOT_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiskInfo {
    pub total_gb: f64,
    pub free_gb: f64,
    pub used_percent: f64,
}

/// Function to collect root filesystem usage, or an error mapping.
pub fn get_disk_info(source: &impl MetricsSource) -> Outcome<DiskInfo> {
    Outcome::record("disk", disk_info(source, Path::new(ROOT_PATH)))
}

fn disk_info(source: &impl MetricsSource, mount: &Path) -> CollectResult<DiskInfo> {
    source.ensure_available()?;
    let sample = source.disk(mount)?;

    if sample.total == 0 {
        return Err(CollectError::ZeroCapacity(mount.to_path_buf()));
    }

    // Percent comes from raw used bytes, not from the rounded gb fields.
    Ok(DiskInfo {
        total_gb: bytes_to_gb(sample.total),
        free_gb: bytes_to_gb(sample.free),
        used_percent: round_to(sample.used as f64 / sample.total as f64 * 100.0, 2),
    })
}
