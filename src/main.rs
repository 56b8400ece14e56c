use clap::Parser;
use sftp_copier::utils::logger;
use sftp_copier::{CliConfig, SshConnector, Uploader};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.into_upload_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!("Configuration validation failed: {:?}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let uploader = Uploader::new(SshConnector::new());
    match uploader.upload(&config) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // one diagnostic line on stderr; the full chain only in debug logs
            tracing::debug!("Transfer failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
