use std::{io, path::PathBuf};

use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// Everything a smoke-test step can fail with. Each step maps its failures
/// into one of these kinds, and the runner treats any of them as fatal.
#[derive(Debug, Error)]
pub enum SmokeError {
    #[error("DNS is not resolving {host}: {source}")]
    Dns {
        host: String,
        #[source]
        source: io::Error,
    },
    #[error("gateway error ({}): {message}", .code.as_deref().unwrap_or("no error code"))]
    RemoteService {
        /// Provider-specific error code, when the gateway sent one
        /// (e.g. `NoSuchBucket`, `AccessDenied`).
        code: Option<String>,
        message: String,
    },
    #[error("local I/O error on {path}: {source}")]
    LocalIo {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("{0} is empty; a multipart upload needs at least one part")]
    EmptySource(PathBuf),
    #[error("{0}")]
    Unknown(String),
}

impl SmokeError {
    pub fn local_io(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::LocalIo {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Collapse an SDK error into the closed taxonomy, keeping the gateway's
    /// own error code when it sent one.
    pub fn from_sdk<E>(error: SdkError<E, HttpResponse>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    {
        match error.as_service_error() {
            Some(service_error) => Self::RemoteService {
                code: service_error.code().map(str::to_owned),
                message: service_error
                    .message()
                    .map(str::to_owned)
                    .unwrap_or_else(|| DisplayErrorContext(&error).to_string()),
            },
            // Dispatch and response failures never saw a decoded service
            // error, so there is no code to report.
            None => match &error {
                SdkError::ConstructionFailure(_) => {
                    Self::Unknown(DisplayErrorContext(&error).to_string())
                }
                _ => Self::RemoteService {
                    code: None,
                    message: DisplayErrorContext(&error).to_string(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Error, ErrorKind};

    use super::SmokeError;

    #[test]
    fn dns_error_names_the_host() {
        let error = SmokeError::Dns {
            host: "gateway.example".into(),
            source: Error::new(ErrorKind::NotFound, "no such host"),
        };
        assert_eq!(
            error.to_string(),
            "DNS is not resolving gateway.example: no such host"
        );
    }

    #[test]
    fn remote_service_error_includes_the_code_when_present() {
        let error = SmokeError::RemoteService {
            code: Some("NoSuchBucket".into()),
            message: "bucket does not exist".into(),
        };
        assert_eq!(
            error.to_string(),
            "gateway error (NoSuchBucket): bucket does not exist"
        );
    }

    #[test]
    fn remote_service_error_without_a_code() {
        let error = SmokeError::RemoteService {
            code: None,
            message: "connection refused".into(),
        };
        assert_eq!(
            error.to_string(),
            "gateway error (no error code): connection refused"
        );
    }

    #[test]
    fn empty_source_names_the_file() {
        let error = SmokeError::EmptySource("/tmp/empty.bin".into());
        assert_eq!(
            error.to_string(),
            "/tmp/empty.bin is empty; a multipart upload needs at least one part"
        );
    }
}
