use std::path::Path;

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{CompletedMultipartUpload, CompletedPart};
use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::Length;
use humansize::{format_size, DECIMAL};
use spinners::{Spinner, Spinners};
use tracing::info;

use crate::chunk_layout::part_spans;
use crate::smoke_config::PART_SIZE;
use crate::smoke_error::SmokeError;

/// Upload one large local file through a multipart session keyed by the
/// file's base name, one part at a time in part-number order. Returns the
/// remote key.
///
/// A failure mid-sequence leaves the session unfinished on the gateway; it
/// stays there until the gateway's own incomplete-upload cleanup collects it.
pub async fn multipart_upload(
    client: &Client,
    bucket: &str,
    local_path: &Path,
) -> Result<String, SmokeError> {
    let key = local_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            SmokeError::Unknown(format!("{} has no usable file name", local_path.display()))
        })?
        .to_owned();
    let file_size = tokio::fs::metadata(local_path)
        .await
        .map_err(|error| SmokeError::local_io(local_path, error))?
        .len();
    // A session with zero parts cannot be completed, so refuse the source
    // before opening one.
    if file_size == 0 {
        return Err(SmokeError::EmptySource(local_path.to_owned()));
    }
    let spans = part_spans(file_size, PART_SIZE);

    let upload = client
        .create_multipart_upload()
        .bucket(bucket)
        .key(&key)
        .send()
        .await
        .map_err(SmokeError::from_sdk)?;
    let upload_id = upload
        .upload_id()
        .ok_or_else(|| SmokeError::Unknown("gateway returned no upload ID".into()))?
        .to_owned();
    info!(
        "{key} ({}) will be uploaded to {bucket} in {} parts",
        format_size(file_size, DECIMAL),
        spans.len()
    );

    let mut completed_parts = Vec::with_capacity(spans.len());
    for span in spans {
        let mut spinner = Spinner::with_timer(
            Spinners::Dots,
            format!(
                "Uploading part {} ({})",
                span.number,
                format_size(span.len, DECIMAL)
            ),
        );
        // The stream owns the only open handle on the file and is dropped as
        // soon as the part is sent, so one chunk is resident at a time.
        let body = ByteStream::read_from()
            .path(local_path)
            .offset(span.offset)
            .length(Length::Exact(span.len))
            .build()
            .await
            .map_err(|error| SmokeError::local_io(local_path, error))?;
        let part = client
            .upload_part()
            .bucket(bucket)
            .key(&key)
            .upload_id(&upload_id)
            .part_number(span.number)
            .body(body)
            .send()
            .await
            .map_err(SmokeError::from_sdk)?;
        spinner.stop_with_newline();
        completed_parts.push(
            CompletedPart::builder()
                .set_e_tag(part.e_tag)
                .part_number(span.number)
                .build(),
        );
    }

    client
        .complete_multipart_upload()
        .bucket(bucket)
        .key(&key)
        .upload_id(&upload_id)
        .multipart_upload(
            CompletedMultipartUpload::builder()
                .set_parts(Some(completed_parts))
                .build(),
        )
        .send()
        .await
        .map_err(SmokeError::from_sdk)?;
    info!("Completed {} upload to {bucket}", local_path.display());
    Ok(key)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use tokio::fs::write;

    use super::multipart_upload;
    use crate::{connect_gateway::connect_gateway, smoke_error::SmokeError};

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rgw-smoke-{}-{name}", std::process::id()))
    }

    #[tokio::test]
    async fn missing_local_file_fails_before_any_remote_call() {
        let client = connect_gateway("localhost", 9000, "test", "test");
        let error = multipart_upload(&client, "bucket", Path::new("/definitely/not/here.MP4"))
            .await
            .unwrap_err();
        assert!(matches!(error, SmokeError::LocalIo { .. }));
    }

    #[tokio::test]
    async fn empty_local_file_is_refused_without_opening_a_session() {
        let client = connect_gateway("localhost", 9000, "test", "test");
        let path = scratch_path("empty.MP4");
        write(&path, b"").await.unwrap();
        let error = multipart_upload(&client, "bucket", &path).await.unwrap_err();
        assert!(matches!(error, SmokeError::EmptySource(source) if source == path));
    }
}
