use aws_sdk_s3::Client;
use tracing::info;

use crate::smoke_error::SmokeError;

/// Deleting a bucket that is already gone surfaces the gateway's
/// `NoSuchBucket` code as a regular remote-service failure.
pub async fn delete_bucket(client: &Client, bucket: &str) -> Result<(), SmokeError> {
    client
        .delete_bucket()
        .bucket(bucket)
        .send()
        .await
        .map_err(SmokeError::from_sdk)?;
    info!("{bucket} bucket has been deleted");
    Ok(())
}
