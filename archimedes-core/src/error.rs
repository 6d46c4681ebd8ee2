use std::io;

use thiserror::Error;

/// Errors raised while loading a [`PoolConfig`](crate::PoolConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("failed to access config file: {0}")]
    Io(#[from] io::Error),
    /// The config file is not valid json5 or does not match the schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The config parsed but holds an out of range value.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}
