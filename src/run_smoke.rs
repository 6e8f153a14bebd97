use std::path::Path;

use aws_sdk_s3::Client;
use tracing::error;

use crate::{
    connect_gateway::connect_gateway, create_bucket::create_bucket, delete_bucket::delete_bucket,
    delete_key::delete_key, dns_check::dns_check, key_exists::key_exists,
    multipart_upload::multipart_upload, simple_upload::simple_upload, smoke_config::SmokeConfig,
    smoke_error::SmokeError,
};

/// The fixed checklist: DNS check, bucket creation, two simple uploads, one
/// multipart upload, deletion of the uploaded keys, bucket deletion. Every
/// upload is verified with a HEAD probe before the run moves on. The first
/// failing step is reported and ends the run; nothing is retried and partial
/// remote state (e.g. a created bucket) is left behind.
pub async fn run_smoke(gateway: &str, port: u16, config: &SmokeConfig) -> Result<(), SmokeError> {
    dns_check(gateway)
        .await
        .inspect_err(|error| report("DNS check", error))?;

    let client = connect_gateway(gateway, port, &config.access_key, &config.secret_key);

    create_bucket(&client, &config.bucket)
        .await
        .inspect_err(|error| report("Bucket creation", error))?;

    upload_and_verify(&client, &config.bucket, &config.small_file, &config.small_key)
        .await
        .inspect_err(|error| report("Small file upload", error))?;

    upload_and_verify(&client, &config.bucket, &config.medium_file, &config.medium_key)
        .await
        .inspect_err(|error| report("Medium file upload", error))?;

    let large_key = multipart_upload(&client, &config.bucket, &config.large_file)
        .await
        .inspect_err(|error| report("Large multipart upload", error))?;
    verify_uploaded(&client, &config.bucket, &large_key)
        .await
        .inspect_err(|error| report("Large multipart upload", error))?;

    for key in [
        config.small_key.as_str(),
        config.medium_key.as_str(),
        large_key.as_str(),
    ] {
        delete_key(&client, &config.bucket, key)
            .await
            .inspect_err(|error| report(&format!("Deletion of {key}"), error))?;
    }

    delete_bucket(&client, &config.bucket)
        .await
        .inspect_err(|error| report("Bucket deletion", error))?;

    println!("Done");
    Ok(())
}

async fn upload_and_verify(
    client: &Client,
    bucket: &str,
    local_path: &Path,
    key: &str,
) -> Result<(), SmokeError> {
    simple_upload(client, bucket, local_path, key).await?;
    verify_uploaded(client, bucket, key).await
}

async fn verify_uploaded(client: &Client, bucket: &str, key: &str) -> Result<(), SmokeError> {
    if key_exists(client, bucket, key).await? {
        Ok(())
    } else {
        Err(SmokeError::RemoteService {
            code: None,
            message: format!("{key} is missing from {bucket} right after its upload"),
        })
    }
}

fn report(step: &str, error: &SmokeError) {
    error!("{step} failed: {error}");
    println!("{step} failed: {error}");
}
