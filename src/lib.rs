pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::ssh::SshConnector;
pub use core::transfer::Uploader;
pub use domain::model::{Credentials, Endpoint, HostKeyPolicy, TransferReport, UploadConfig};
pub use utils::error::{CopierError, Result};
