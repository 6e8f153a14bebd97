use std::{num::NonZero, path::PathBuf};

use serde::Deserialize;

/// Fixed multipart part size, in bytes (500 MiB).
/// This bounds how many parts the large-file upload produces and how much of
/// the file is resident at once. Not configurable at runtime.
pub const PART_SIZE: NonZero<u64> = NonZero::new(524_288_000).unwrap();

/// The values the smoke test needs beyond the gateway hostname. Bucket and
/// remote key names have defaults, so a minimal config is just credentials
/// plus the three local files.
#[derive(Debug, Clone, Deserialize)]
pub struct SmokeConfig {
    pub access_key: String,
    pub secret_key: String,
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Local file small enough for a single-request upload
    pub small_file: PathBuf,
    pub medium_file: PathBuf,
    /// Local file for the multipart path. Uploaded under its base name.
    pub large_file: PathBuf,
    #[serde(default = "default_small_key")]
    pub small_key: String,
    #[serde(default = "default_medium_key")]
    pub medium_key: String,
}

fn default_bucket() -> String {
    "zabbix-crud".into()
}

fn default_small_key() -> String {
    "small_test.jpeg".into()
}

fn default_medium_key() -> String {
    "medium_test.mp4".into()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{SmokeConfig, PART_SIZE};

    #[test]
    fn part_size_is_a_legal_s3_part_size() {
        // Anything but the last part must be at least 5 MiB
        assert!(PART_SIZE.get() >= 5 * 1024 * 1024);
    }

    #[test]
    fn minimal_config_fills_in_defaults() {
        let config = serde_json::from_str::<SmokeConfig>(
            r#"{
                "access_key": "AKIAEXAMPLE",
                "secret_key": "secret",
                "small_file": "/srv/smoke/ceph.jpeg",
                "medium_file": "/srv/smoke/commute.mp4",
                "large_file": "/srv/smoke/GOPR0128.MP4"
            }"#,
        )
        .unwrap();
        assert_eq!(config.bucket, "zabbix-crud");
        assert_eq!(config.small_key, "small_test.jpeg");
        assert_eq!(config.medium_key, "medium_test.mp4");
        assert_eq!(config.large_file, Path::new("/srv/smoke/GOPR0128.MP4"));
    }

    #[test]
    fn explicit_values_override_the_defaults() {
        let config = serde_json::from_str::<SmokeConfig>(
            r#"{
                "access_key": "AKIAEXAMPLE",
                "secret_key": "secret",
                "bucket": "smoke-bucket",
                "small_file": "a",
                "medium_file": "b",
                "large_file": "c",
                "small_key": "s",
                "medium_key": "m"
            }"#,
        )
        .unwrap();
        assert_eq!(config.bucket, "smoke-bucket");
        assert_eq!(config.small_key, "s");
        assert_eq!(config.medium_key, "m");
    }

    #[test]
    fn missing_credentials_are_rejected() {
        let result = serde_json::from_str::<SmokeConfig>(
            r#"{"small_file": "a", "medium_file": "b", "large_file": "c"}"#,
        );
        assert!(result.is_err());
    }
}
