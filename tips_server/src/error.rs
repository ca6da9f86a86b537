//! Errors raised while configuring or running the page server.

use std::io;
use std::path::PathBuf;

/// Page server errors
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Config file exists but could not be read
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Config file is not valid TOML for [`crate::ServerConfig`]
    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// Resolved settings are inconsistent
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// Listener could not be opened
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}
