use aws_sdk_s3::Client;
use tracing::info;

use crate::smoke_error::SmokeError;

/// Probe a key with a HEAD request. A 404 is a plain `false`; anything else
/// the gateway rejects is an error.
pub async fn key_exists(client: &Client, bucket: &str, key: &str) -> Result<bool, SmokeError> {
    match client
        .head_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
    {
        Ok(_) => {
            info!("{key} exists in {bucket}");
            Ok(true)
        }
        Err(error) => {
            if error
                .as_service_error()
                .is_some_and(|service_error| service_error.is_not_found())
            {
                info!("{key} does not exist in {bucket}");
                Ok(false)
            } else {
                Err(SmokeError::from_sdk(error))
            }
        }
    }
}
