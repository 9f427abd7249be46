// src/collector/cpu.rs
//! Processor and OS identification.

use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use super::source::MetricsSource;

/// Logical core count, or `"unknown"` when the query fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuCount {
    Known(usize),
    Unknown,
}

impl Serialize for CpuCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CpuCount::Known(count) => serializer.serialize_u64(*count as u64),
            CpuCount::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpuInfo {
    pub processor: String,
    pub cpu_count: CpuCount,
    pub architecture: String,
    pub system: String,
    pub release: String,
}

/// Function to collect cpu identity. Never fails; only the core count degrades.
pub fn get_cpu_info(source: &impl MetricsSource) -> CpuInfo {
    let cpu_count = match source.logical_cpus() {
        Ok(count) => CpuCount::Known(count),
        Err(e) => {
            warn!(error = %e, "falling back to unknown cpu count");
            CpuCount::Unknown
        }
    };

    let identity = source.cpu_identity();
    debug!(processor = %identity.processor, ?cpu_count, "collected cpu");

    CpuInfo {
        processor: identity.processor,
        cpu_count,
        architecture: identity.architecture,
        system: identity.system,
        release: identity.release,
    }
}
