//! Loopback TCP port probes.
//!
//! Polarity: a successful connect means something is already listening and
//! is reported as an informational "Already in use" line; a failed connect
//! means the port is free for the service to take, which is the success
//! case for this pre-start diagnostic.
use std::net::SocketAddr;

use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::console::checker::config::{PortProbe, PORT_CONNECT_TIMEOUT};
use crate::console::report::CheckReport;

pub async fn run(probe: &PortProbe) -> CheckReport {
    let addr = SocketAddr::from(([127, 0, 0, 1], probe.port));

    probe_addr(addr, probe.service).await
}

/// Probes an explicit address; tests substitute an ephemeral port here.
pub async fn probe_addr(addr: SocketAddr, service: &str) -> CheckReport {
    tracing::debug!("probing TCP {addr}");

    if connects(addr).await {
        CheckReport::info(format!("Port {} ({service}): Already in use", addr.port()))
    } else {
        CheckReport::pass(format!("Port {} ({service}): Available", addr.port()))
    }
}

async fn connects(addr: SocketAddr) -> bool {
    matches!(timeout(PORT_CONNECT_TIMEOUT, TcpStream::connect(addr)).await, Ok(Ok(_)))
}
