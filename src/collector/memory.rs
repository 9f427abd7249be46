// src/collector/memory.rs
//! Physical memory totals.

use serde::Serialize;

use super::source::{MemorySample, MetricsSource};
use super::{Outcome, bytes_to_gb, round_to};
use crate::error::CollectResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryInfo {
    pub total_gb: f64,
    pub available_gb: f64,
    pub used_percent: f64,
}

impl From<MemorySample> for MemoryInfo {
    fn from(sample: MemorySample) -> Self {
        let used = sample.total.saturating_sub(sample.available);
        let used_percent = if sample.total > 0 {
            round_to(used as f64 / sample.total as f64 * 100.0, 1)
        } else {
            0.0
        };

        MemoryInfo {
            total_gb: bytes_to_gb(sample.total),
            available_gb: bytes_to_gb(sample.available),
            used_percent,
        }
    }
}

/// Function to collect memory usage, or an error mapping.
pub fn get_memory_info(source: &impl MetricsSource) -> Outcome<MemoryInfo> {
    Outcome::record("memory", memory_info(source))
}

fn memory_info(source: &impl MetricsSource) -> CollectResult<MemoryInfo> {
    source.ensure_available()?;
    Ok(source.memory()?.into())
}
