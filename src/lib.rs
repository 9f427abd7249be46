//! Host system metrics (cpu, memory, disk, network) reported as JSON.

pub mod cli;
pub mod collector;
pub mod error;
pub mod logging;

pub use error::{CollectError, CollectResult};
