use aws_sdk_s3::types::BucketCannedAcl;
use aws_sdk_s3::Client;
use tracing::info;

use crate::smoke_error::SmokeError;

/// Create the scratch bucket with a public-read canned ACL, the policy the
/// original monitoring setup expects to find on it.
pub async fn create_bucket(client: &Client, bucket: &str) -> Result<(), SmokeError> {
    client
        .create_bucket()
        .bucket(bucket)
        .acl(BucketCannedAcl::PublicRead)
        .send()
        .await
        .map_err(SmokeError::from_sdk)?;
    info!("{bucket} bucket has been created");
    Ok(())
}
