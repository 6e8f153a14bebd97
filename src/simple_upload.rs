use std::path::Path;

use aws_sdk_s3::{primitives::ByteStream, Client};
use tracing::info;

use crate::smoke_error::SmokeError;

/// Stream one local file's full contents to `key` in a single request.
pub async fn simple_upload(
    client: &Client,
    bucket: &str,
    local_path: &Path,
    key: &str,
) -> Result<(), SmokeError> {
    let body = ByteStream::from_path(local_path)
        .await
        .map_err(|error| SmokeError::local_io(local_path, error))?;
    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(body)
        .send()
        .await
        .map_err(SmokeError::from_sdk)?;
    info!("completed simple upload of {} to {bucket}", local_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::simple_upload;
    use crate::{connect_gateway::connect_gateway, smoke_error::SmokeError};

    #[tokio::test]
    async fn missing_local_file_fails_before_any_remote_call() {
        // The client is never dispatched, so no live gateway is needed
        let client = connect_gateway("localhost", 9000, "test", "test");
        let error = simple_upload(
            &client,
            "bucket",
            Path::new("/definitely/not/here.jpeg"),
            "small_test.jpeg",
        )
        .await
        .unwrap_err();
        assert!(matches!(error, SmokeError::LocalIo { path, .. }
            if path == Path::new("/definitely/not/here.jpeg")));
    }
}
