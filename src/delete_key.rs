use aws_sdk_s3::Client;
use tracing::info;

use crate::smoke_error::SmokeError;

pub async fn delete_key(client: &Client, bucket: &str, key: &str) -> Result<(), SmokeError> {
    client
        .delete_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(SmokeError::from_sdk)?;
    info!("Deleted {key} from {bucket}");
    Ok(())
}
