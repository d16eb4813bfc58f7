use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the server listens on. Fixed at build time.
pub const DEFAULT_PORT: u16 = 8080;

/// Listener configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: IpAddr,

    /// TCP port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Socket address to hand to the listener.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Line printed once the listener is up.
    pub fn startup_message(&self) -> String {
        format!("Server running on port {}", self.port)
    }
}
