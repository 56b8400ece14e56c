use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SSH_PORT: u16 = 22;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// How the server's host key is checked before credentials are sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HostKeyPolicy {
    /// No check at all; any server is trusted.
    #[default]
    AcceptAny,
    /// Check against an OpenSSH known_hosts file.
    KnownHosts(PathBuf),
}

impl HostKeyPolicy {
    pub fn is_insecure(&self) -> bool {
        matches!(self, HostKeyPolicy::AcceptAny)
    }
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub endpoint: Endpoint,
    pub credentials: Credentials,
    pub source: PathBuf,
    pub destination: String,
    pub host_key_policy: HostKeyPolicy,
}

#[derive(Debug, Clone)]
pub struct TransferReport {
    pub source: PathBuf,
    pub destination: String,
    pub bytes_copied: u64,
    pub elapsed: Duration,
}

impl fmt::Display for TransferReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File '{}' sent to '{}'",
            self.source.display(),
            self.destination
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("deploy", "s3cret");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("deploy"));
        assert!(!rendered.contains("s3cret"));
    }

    #[test]
    fn test_endpoint_display() {
        assert_eq!(Endpoint::new("10.0.0.5", 2222).to_string(), "10.0.0.5:2222");
    }

    #[test]
    fn test_report_confirmation_line() {
        let report = TransferReport {
            source: PathBuf::from("build/app.tar.gz"),
            destination: "/srv/app.tar.gz".to_string(),
            bytes_copied: 42,
            elapsed: Duration::from_millis(5),
        };
        assert_eq!(
            report.to_string(),
            "File 'build/app.tar.gz' sent to '/srv/app.tar.gz'"
        );
    }

    #[test]
    fn test_default_policy_is_insecure() {
        assert!(HostKeyPolicy::default().is_insecure());
        assert!(!HostKeyPolicy::KnownHosts(PathBuf::from("/tmp/kh")).is_insecure());
    }
}
