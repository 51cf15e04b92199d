pub mod config;
pub use config::Config;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SizeLensError {
    #[error("input not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("malformed size log {}: {len} bytes is not a multiple of 8", path.display())]
    Decode { path: PathBuf, len: u64 },
    #[error("size log {} contains no samples", path.display())]
    EmptyInput { path: PathBuf },
    #[error("cannot write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SizeLensError>;
