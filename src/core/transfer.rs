use crate::domain::model::{TransferReport, UploadConfig};
use crate::domain::ports::{Connector, FileTransfer, RemoteFile, RemoteSession};
use crate::utils::error::{CopierError, Result};
use std::fs::File;
use std::time::Instant;

pub struct Uploader<C: Connector> {
    connector: C,
}

impl<C: Connector> Uploader<C> {
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    /// Copy `config.source` to `config.destination` on the remote server.
    ///
    /// Every step runs once, in order, and the first failure is returned as is.
    /// Resources are released in reverse order of acquisition: explicitly on
    /// success, by drop order on failure. A partially written remote file is
    /// left in place.
    pub fn upload(&self, config: &UploadConfig) -> Result<TransferReport> {
        let started = Instant::now();

        tracing::info!("Connecting to {}", config.endpoint);
        let session = self.connector.connect(
            &config.endpoint,
            &config.credentials,
            &config.host_key_policy,
        )?;

        let transfer = session.open_file_transfer()?;

        // Opened before the remote side is touched so a bad source leaves nothing behind.
        let mut local = File::open(&config.source).map_err(|e| CopierError::LocalOpen {
            path: config.source.clone(),
            source: e,
        })?;

        let mut remote = transfer.create(&config.destination)?;
        tracing::debug!(
            "Copying {} -> {}",
            config.source.display(),
            config.destination
        );

        let bytes_copied = std::io::copy(&mut local, &mut remote).map_err(CopierError::Copy)?;

        remote.close().map_err(|e| CopierError::Close {
            resource: "remote file",
            source: e,
        })?;
        drop(local);
        transfer.close()?;
        session.disconnect()?;

        let report = TransferReport {
            source: config.source.clone(),
            destination: config.destination.clone(),
            bytes_copied,
            elapsed: started.elapsed(),
        };

        tracing::info!(
            "Copied {} bytes in {:?}",
            report.bytes_copied,
            report.elapsed
        );
        Ok(report)
    }
}
