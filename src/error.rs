//! Error types for metric collection.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single collector query.
///
/// None of these abort the process: collectors fold them into an
/// `{"error": "..."}` mapping.
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("{accessor} not installed")]
    Unavailable { accessor: &'static str },

    #[error("mount point not found: {}", .0.display())]
    MountNotFound(PathBuf),

    #[error("filesystem at {} reports zero capacity", .0.display())]
    ZeroCapacity(PathBuf),

    #[error("{0}")]
    Query(String),
}

pub type CollectResult<T> = Result<T, CollectError>;
