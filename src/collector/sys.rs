// src/collector/sys.rs
//! Host identity fields and the aggregate of every collector.

use chrono::Local;
use serde::Serialize;

use super::source::MetricsSource;
use super::{
    CpuInfo, DiskInfo, MemoryInfo, NetworkInfo, Outcome, get_cpu_info, get_disk_info,
    get_memory_info, get_network_info,
};

/// Compiler version this binary was built with.
pub const RUST_VERSION: &str = env!("HOSTINFO_RUSTC_VERSION");

/// Everything, in report order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllInfo {
    pub timestamp: String,
    pub hostname: String,
    pub rust_version: String,
    pub cpu: CpuInfo,
    pub memory: Outcome<MemoryInfo>,
    pub disk: Outcome<DiskInfo>,
    pub network: Outcome<NetworkInfo>,
}

/// Function to generate an ISO-8601 local timestamp with microseconds.
pub fn get_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Function to extract hostname of the system.
pub fn get_hostname(source: &impl MetricsSource) -> String {
    source.hostname()
}

/// Function to collect every category. Sub-collectors run in a fixed order.
pub fn get_all_info(source: &impl MetricsSource) -> AllInfo {
    AllInfo {
        timestamp: get_timestamp(),
        hostname: get_hostname(source),
        rust_version: RUST_VERSION.to_string(),
        cpu: get_cpu_info(source),
        memory: get_memory_info(source),
        disk: get_disk_info(source),
        network: get_network_info(source),
    }
}
