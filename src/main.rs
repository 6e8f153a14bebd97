mod chunk_layout;
mod connect_gateway;
mod create_bucket;
mod delete_bucket;
mod delete_key;
mod dns_check;
mod get_config;
mod key_exists;
mod multipart_upload;
mod run_smoke;
mod simple_upload;
mod smoke_config;
mod smoke_error;

use std::{fs::OpenOptions, path::PathBuf, process::ExitCode, sync::Arc};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{get_config::get_config, run_smoke::run_smoke};

/// CRUD smoke test for an S3-compatible gateway (e.g. Ceph RGW).
///
/// Runs a fixed checklist against the gateway: DNS check, bucket creation,
/// two simple uploads, one multipart upload, deletion of the uploaded keys,
/// bucket deletion. The first failing step ends the run with exit code 2 so
/// calling automation (e.g. a Zabbix check) can alert on it.
#[derive(Debug, Parser)]
struct Cli {
    /// Hostname of the storage gateway
    gateway: String,
    /// Port the gateway listens on for plain HTTP
    #[arg(long, default_value_t = 80)]
    port: u16,
    /// Path to a JSON file with the access key, secret key, bucket name and
    /// the local files to upload
    #[arg(short, long)]
    config_path: PathBuf,
    /// Where the run log is written
    #[arg(long, default_value = "rgw_smoke.log")]
    log_path: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let Cli {
        gateway,
        port,
        config_path,
        log_path,
    } = Cli::parse();

    let log_file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("Could not open log file {}: {error}", log_path.display());
            return ExitCode::from(2);
        }
    };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Arc::new(log_file)),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match get_config(&config_path).await {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("Could not read config {}: {error}", config_path.display());
            println!("Could not read config {}: {error}", config_path.display());
            return ExitCode::from(2);
        }
    };

    match run_smoke(&gateway, port, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        // Already reported by the failing step
        Err(_) => ExitCode::from(2),
    }
}
