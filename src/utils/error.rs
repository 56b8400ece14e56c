use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopierError {
    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to dial {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("SSH handshake failed: {0}")]
    Handshake(#[source] ssh2::Error),

    #[error("Host key verification failed for {host}: {reason}")]
    HostKey { host: String, reason: String },

    #[error("Authentication failed for user '{username}': {reason}")]
    Authentication { username: String, reason: String },

    #[error("Failed to create SFTP client: {0}")]
    FileTransfer(#[source] ssh2::Error),

    #[error("Failed to open local file '{}': {source}", .path.display())]
    LocalOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create remote file '{path}': {source}")]
    RemoteCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy file contents: {0}")]
    Copy(#[source] std::io::Error),

    #[error("Failed to close {resource}: {source}")]
    Close {
        resource: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl CopierError {
    pub fn invalid_value(field: &str, value: &str, reason: impl Into<String>) -> Self {
        CopierError::InvalidConfigValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// True when the failure happened before any network activity.
    pub fn is_config_error(&self) -> bool {
        matches!(self, CopierError::InvalidConfigValue { .. })
    }
}

pub type Result<T> = std::result::Result<T, CopierError>;
