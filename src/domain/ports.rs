use crate::domain::model::{Credentials, Endpoint, HostKeyPolicy};
use crate::utils::error::Result;
use std::io::Write;

/// Opens an authenticated, encrypted connection to a server.
pub trait Connector {
    type Session: RemoteSession;

    fn connect(
        &self,
        endpoint: &Endpoint,
        credentials: &Credentials,
        host_keys: &HostKeyPolicy,
    ) -> Result<Self::Session>;
}

/// An authenticated connection that can carry a file-transfer subchannel.
pub trait RemoteSession {
    type Transfer: FileTransfer;

    fn open_file_transfer(&self) -> Result<Self::Transfer>;
    fn disconnect(self) -> Result<()>;
}

/// A file-transfer subchannel over a [`RemoteSession`].
pub trait FileTransfer {
    type File: RemoteFile;

    /// Create `path`, truncating it if it already exists.
    fn create(&self, path: &str) -> Result<Self::File>;
    fn close(self) -> Result<()>;
}

pub trait RemoteFile: Write {
    fn close(self) -> std::io::Result<()>;
}
