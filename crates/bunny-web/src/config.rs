use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Port the container image has always exposed
pub const DEFAULT_PORT: u16 = 8000;

const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "bunny-web", about = "Virtual bunny care server", version)]
pub struct ServerConfig {
    /// Interface to bind; all interfaces by default
    #[arg(long, env = "BUNNY_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "BUNNY_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory holding index.html and any other frontend assets
    #[arg(long = "static-dir", env = "BUNNY_STATIC", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
