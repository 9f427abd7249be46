// src/collector/source.rs
//! The metrics accessor seam and its sysinfo-backed implementation.

use std::cell::OnceCell;
use std::path::Path;

use sysinfo::{CpuRefreshKind, Networks, RefreshKind, System};

use crate::error::{CollectError, CollectResult};

/// Name reported when the accessor is missing.
pub const ACCESSOR: &str = "sysinfo";

/// Static CPU and OS identification strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuIdentity {
    pub processor: String,
    pub architecture: String,
    pub system: String,
    pub release: String,
}

/// Physical memory in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemorySample {
    pub total: u64,
    pub available: u64,
}

/// Filesystem capacity in bytes, statvfs style.
///
/// `free` is what unprivileged users may still write and `used` excludes
/// reserved blocks, so `used + free` can be less than `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskSample {
    pub total: u64,
    pub free: u64,
    pub used: u64,
}

/// Cumulative interface counters in bytes, summed over all interfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkSample {
    pub sent: u64,
    pub received: u64,
}

/// Where collectors get their raw numbers from.
pub trait MetricsSource {
    /// Accessor name used in "not installed" errors.
    fn name(&self) -> &'static str {
        ACCESSOR
    }

    /// Whether the accessor can answer memory/disk/network queries here.
    fn is_available(&self) -> bool;

    fn cpu_identity(&self) -> CpuIdentity;

    /// Logical cores on the host, ignoring affinity and cgroup limits.
    fn logical_cpus(&self) -> CollectResult<usize>;

    fn memory(&self) -> CollectResult<MemorySample>;

    fn disk(&self, mount: &Path) -> CollectResult<DiskSample>;

    fn network(&self) -> CollectResult<NetworkSample>;

    /// Host name, empty when it cannot be determined.
    fn hostname(&self) -> String;

    fn ensure_available(&self) -> CollectResult<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(CollectError::Unavailable {
                accessor: self.name(),
            })
        }
    }
}

/// Queries the running host through the `sysinfo` crate.
#[derive(Debug, Default)]
pub struct SysinfoSource {
    cpus: OnceCell<System>,
}

impl SysinfoSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// CPU list, read once and shared by identity and core count.
    fn cpu_system(&self) -> &System {
        self.cpus
            .get_or_init(|| System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::new())))
    }
}

impl MetricsSource for SysinfoSource {
    fn is_available(&self) -> bool {
        sysinfo::IS_SUPPORTED_SYSTEM
    }

    fn cpu_identity(&self) -> CpuIdentity {
        CpuIdentity {
            processor: self
                .cpu_system()
                .cpus()
                .first()
                .map(|cpu| cpu.brand().trim().to_string())
                .unwrap_or_default(),
            architecture: std::env::consts::ARCH.to_string(),
            system: kernel_family(std::env::consts::OS),
            release: System::kernel_version().unwrap_or_default(),
        }
    }

    fn logical_cpus(&self) -> CollectResult<usize> {
        match self.cpu_system().cpus().len() {
            0 => Err(CollectError::Query("no logical cpus reported".to_string())),
            count => Ok(count),
        }
    }

    fn memory(&self) -> CollectResult<MemorySample> {
        let mut sys = System::new();
        sys.refresh_memory();

        Ok(MemorySample {
            total: sys.total_memory(),
            available: sys.available_memory(),
        })
    }

    #[cfg(unix)]
    fn disk(&self, mount: &Path) -> CollectResult<DiskSample> {
        use nix::sys::statvfs::statvfs;

        let stats = statvfs(mount)
            .map_err(|e| CollectError::Query(format!("{}: '{}'", e, mount.display())))?;

        let frsize = stats.fragment_size() as u64;
        let blocks = stats.blocks() as u64;

        Ok(DiskSample {
            total: blocks * frsize,
            free: stats.blocks_available() as u64 * frsize,
            used: blocks.saturating_sub(stats.blocks_free() as u64) * frsize,
        })
    }

    #[cfg(not(unix))]
    fn disk(&self, mount: &Path) -> CollectResult<DiskSample> {
        let disks = sysinfo::Disks::new_with_refreshed_list();

        disks
            .iter()
            .find(|disk| disk.mount_point() == mount)
            .map(|disk| DiskSample {
                total: disk.total_space(),
                free: disk.available_space(),
                used: disk.total_space().saturating_sub(disk.available_space()),
            })
            .ok_or_else(|| CollectError::MountNotFound(mount.to_path_buf()))
    }

    fn network(&self) -> CollectResult<NetworkSample> {
        let networks = Networks::new_with_refreshed_list();

        Ok(networks
            .iter()
            .fold(NetworkSample::default(), |acc, (_, data)| NetworkSample {
                sent: acc.sent.saturating_add(data.total_transmitted()),
                received: acc.received.saturating_add(data.total_received()),
            }))
    }

    fn hostname(&self) -> String {
        System::host_name().unwrap_or_default()
    }
}

/// Kernel family name for a `std::env::consts::OS` tag, e.g. `linux` -> `Linux`.
pub fn kernel_family(os: &str) -> String {
    match os {
        "linux" | "android" => "Linux".to_string(),
        "macos" | "ios" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}
