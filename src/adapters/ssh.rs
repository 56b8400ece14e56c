use crate::domain::model::{Credentials, Endpoint, HostKeyPolicy};
use crate::domain::ports::{Connector, FileTransfer, RemoteFile, RemoteSession};
use crate::utils::error::{CopierError, Result};
use ssh2::{CheckResult, KnownHostFileKind, OpenFlags, OpenType, Session, Sftp};
use std::net::TcpStream;
use std::path::Path;

const REMOTE_FILE_MODE: i32 = 0o644;

/// [`Connector`] backed by libssh2 with password authentication.
#[derive(Debug, Clone, Default)]
pub struct SshConnector;

impl SshConnector {
    pub fn new() -> Self {
        Self
    }
}

impl Connector for SshConnector {
    type Session = SshSession;

    fn connect(
        &self,
        endpoint: &Endpoint,
        credentials: &Credentials,
        host_keys: &HostKeyPolicy,
    ) -> Result<SshSession> {
        tracing::debug!("Dialing {}", endpoint);
        let tcp = TcpStream::connect((endpoint.host.as_str(), endpoint.port)).map_err(|e| {
            CopierError::Connect {
                addr: endpoint.to_string(),
                source: e,
            }
        })?;

        let mut session = Session::new().map_err(CopierError::Handshake)?;
        session.set_tcp_stream(tcp);
        session.handshake().map_err(CopierError::Handshake)?;

        if let Some(banner) = session.banner() {
            tracing::debug!("Server banner: {}", banner);
        }

        verify_host_key(&session, endpoint, host_keys)?;

        session
            .userauth_password(&credentials.username, &credentials.password)
            .map_err(|e| CopierError::Authentication {
                username: credentials.username.clone(),
                reason: e.message().to_string(),
            })?;

        if !session.authenticated() {
            return Err(CopierError::Authentication {
                username: credentials.username.clone(),
                reason: "server did not accept the password".to_string(),
            });
        }

        tracing::info!("Authenticated to {} as '{}'", endpoint, credentials.username);
        Ok(SshSession { session })
    }
}

fn verify_host_key(session: &Session, endpoint: &Endpoint, policy: &HostKeyPolicy) -> Result<()> {
    let known_hosts_path = match policy {
        HostKeyPolicy::AcceptAny => {
            tracing::warn!(
                "Host key verification is disabled; accepting any key from {}",
                endpoint
            );
            return Ok(());
        }
        HostKeyPolicy::KnownHosts(path) => path,
    };

    let rejected = |reason: String| CopierError::HostKey {
        host: endpoint.to_string(),
        reason,
    };

    let (key, key_type) = session
        .host_key()
        .ok_or_else(|| rejected("server presented no host key".to_string()))?;

    let mut known_hosts = session.known_hosts().map_err(CopierError::Handshake)?;
    known_hosts
        .read_file(known_hosts_path, KnownHostFileKind::OpenSSH)
        .map_err(|e| {
            rejected(format!(
                "cannot read {}: {}",
                known_hosts_path.display(),
                e.message()
            ))
        })?;

    match known_hosts.check_port(&endpoint.host, endpoint.port, key) {
        CheckResult::Match => {
            tracing::debug!("Host key ({:?}) matches {}", key_type, known_hosts_path.display());
            Ok(())
        }
        CheckResult::NotFound => Err(rejected(format!(
            "no entry in {}",
            known_hosts_path.display()
        ))),
        CheckResult::Mismatch => Err(rejected(format!(
            "key does not match the entry in {}",
            known_hosts_path.display()
        ))),
        CheckResult::Failure => Err(rejected("known_hosts lookup failed".to_string())),
    }
}

pub struct SshSession {
    session: Session,
}

impl RemoteSession for SshSession {
    type Transfer = SftpChannel;

    fn open_file_transfer(&self) -> Result<SftpChannel> {
        let sftp = self.session.sftp().map_err(CopierError::FileTransfer)?;
        tracing::debug!("SFTP subsystem ready");
        Ok(SftpChannel { sftp })
    }

    fn disconnect(self) -> Result<()> {
        self.session
            .disconnect(None, "transfer complete", None)
            .map_err(|e| CopierError::Close {
                resource: "SSH connection",
                source: e.into(),
            })
    }
}

pub struct SftpChannel {
    sftp: Sftp,
}

impl FileTransfer for SftpChannel {
    type File = ssh2::File;

    fn create(&self, path: &str) -> Result<ssh2::File> {
        let flags = OpenFlags::WRITE | OpenFlags::CREATE | OpenFlags::TRUNCATE;
        self.sftp
            .open_mode(Path::new(path), flags, REMOTE_FILE_MODE, OpenType::File)
            .map_err(|e| CopierError::RemoteCreate {
                path: path.to_string(),
                source: e.into(),
            })
    }

    fn close(self) -> Result<()> {
        // the subsystem channel is closed when the handle is dropped
        drop(self.sftp);
        Ok(())
    }
}

impl RemoteFile for ssh2::File {
    fn close(mut self) -> std::io::Result<()> {
        ssh2::File::close(&mut self).map_err(std::io::Error::from)
    }
}
