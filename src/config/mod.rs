use crate::domain::model::{
    Credentials, Endpoint, HostKeyPolicy, UploadConfig, DEFAULT_SSH_PORT,
};
use crate::utils::error::{CopierError, Result};
use crate::utils::escape::quote_ascii;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use clap::{ArgAction, Parser};
use std::fmt;
use std::path::PathBuf;

// Short flags accept both casings so either historical spelling keeps working.
#[derive(Clone, Parser)]
#[command(name = "copier", version)]
#[command(about = "Upload a file to an SFTP server")]
#[command(disable_help_flag = true)]
pub struct CliConfig {
    #[arg(short = 't', visible_short_alias = 'T', long, help = "SSH server host")]
    pub host: String,

    #[arg(short = 'p', visible_short_alias = 'P', long, default_value_t = DEFAULT_SSH_PORT, help = "SSH server port")]
    pub port: u16,

    #[arg(short = 'u', visible_short_alias = 'U', long, help = "SSH username")]
    pub username: String,

    #[arg(short = 'w', visible_short_alias = 'W', long, help = "SSH password")]
    pub password: String,

    #[arg(short = 's', visible_short_alias = 'S', long, help = "Source file path")]
    pub src: String,

    #[arg(short = 'd', visible_short_alias = 'D', long, help = "Destination file path on the server")]
    pub dest: String,

    #[arg(long, help = "Send the password in ASCII-quoted form")]
    pub quote_password: bool,

    #[arg(long, help = "Verify the server host key against a known_hosts file")]
    pub verify_host_key: bool,

    #[arg(
        long,
        value_name = "PATH",
        help = "known_hosts file to verify against [default: ~/.ssh/known_hosts]"
    )]
    pub known_hosts: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short = 'h', visible_short_alias = 'H', long, action = ArgAction::Help, help = "Show help message")]
    #[allow(dead_code)]
    help: Option<bool>,
}

impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("src", &self.src)
            .field("dest", &self.dest)
            .field("quote_password", &self.quote_password)
            .field("verify_host_key", &self.verify_host_key)
            .field("known_hosts", &self.known_hosts)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        validate_non_empty_string("username", &self.username)?;
        validate_path("src", &self.src)?;
        validate_path("dest", &self.dest)?;
        if let Some(path) = &self.known_hosts {
            validate_path("known_hosts", &path.to_string_lossy())?;
        }
        Ok(())
    }
}

impl CliConfig {
    /// Validate the parsed flags and freeze them into an [`UploadConfig`].
    pub fn into_upload_config(self) -> Result<UploadConfig> {
        self.validate()?;

        let host_key_policy = self.host_key_policy()?;
        let password = if self.quote_password {
            quote_ascii(&self.password)
        } else {
            self.password
        };

        Ok(UploadConfig {
            endpoint: Endpoint::new(self.host, self.port),
            credentials: Credentials::new(self.username, password),
            source: PathBuf::from(self.src),
            destination: self.dest,
            host_key_policy,
        })
    }

    fn host_key_policy(&self) -> Result<HostKeyPolicy> {
        if let Some(path) = &self.known_hosts {
            return Ok(HostKeyPolicy::KnownHosts(path.clone()));
        }
        if !self.verify_host_key {
            return Ok(HostKeyPolicy::AcceptAny);
        }

        dirs::home_dir()
            .map(|home| HostKeyPolicy::KnownHosts(home.join(".ssh").join("known_hosts")))
            .ok_or_else(|| {
                CopierError::invalid_value(
                    "known_hosts",
                    "",
                    "Cannot locate the home directory; pass --known-hosts",
                )
            })
    }
}
