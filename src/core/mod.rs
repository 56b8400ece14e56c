pub mod transfer;

pub use crate::domain::model::{TransferReport, UploadConfig};
pub use crate::domain::ports::{Connector, FileTransfer, RemoteFile, RemoteSession};
pub use crate::utils::error::Result;
