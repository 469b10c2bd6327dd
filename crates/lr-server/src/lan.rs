//! LAN address discovery for the startup banner.

use std::net::{IpAddr, UdpSocket};

/// Public address used to pick the outbound interface. Nothing is sent.
const PROBE_ADDR: &str = "8.8.8.8:80";

/// Address of the interface the OS would route public traffic through.
///
/// Connecting a UDP socket only selects a route, so this works offline as
/// long as a default route exists.
pub fn discover_lan_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect(PROBE_ADDR).ok()?;
    socket.local_addr().ok().map(|addr| addr.ip())
}

/// Loopback and LAN URLs for a server listening on `port`.
pub fn access_urls(port: u16) -> (String, String) {
    let lan_host = discover_lan_ip()
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "localhost".to_string());
    (
        format!("http://127.0.0.1:{port}"),
        format!("http://{lan_host}:{port}"),
    )
}

/// Log where the server can be reached.
pub fn log_access_urls(port: u16) {
    let (local, network) = access_urls(port);
    tracing::info!("Server started at:");
    tracing::info!("  Local:   {local}");
    tracing::info!("  Network: {network}");
    tracing::info!("Access this address from other devices on your network.");
}
