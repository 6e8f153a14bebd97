use aws_config::Region;
use aws_sdk_s3::{config::Credentials, Client};

/// Build a client addressing the gateway directly over plain HTTP with
/// path-style bucket URLs. The region never reaches the wire in that mode,
/// but the SDK requires one anyway.
pub fn connect_gateway(host: &str, port: u16, access_key: &str, secret_key: &str) -> Client {
    Client::from_conf(
        aws_sdk_s3::config::Builder::default()
            .behavior_version_latest()
            .endpoint_url(format!("http://{host}:{port}"))
            .credentials_provider(Credentials::new(
                access_key, secret_key, None, None, "rgw-smoke",
            ))
            .region(Region::from_static("us-east-1"))
            .force_path_style(true)
            .build(),
    )
}
