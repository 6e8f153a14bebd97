use std::io::{Error, ErrorKind};
use std::net::SocketAddr;

use tokio::net::lookup_host;
use tracing::info;

use crate::smoke_error::SmokeError;

/// Resolve the gateway hostname before any storage call is attempted. The
/// port is irrelevant for resolution; 0 keeps the resolver happy.
pub async fn dns_check(host: &str) -> Result<SocketAddr, SmokeError> {
    let mut addresses = lookup_host((host, 0)).await.map_err(|source| SmokeError::Dns {
        host: host.to_owned(),
        source,
    })?;
    let address = addresses.next().ok_or_else(|| SmokeError::Dns {
        host: host.to_owned(),
        source: Error::new(ErrorKind::NotFound, "resolver returned no addresses"),
    })?;
    info!("{host} resolves to {}", address.ip());
    Ok(address)
}
