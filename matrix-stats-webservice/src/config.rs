use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Runtime configuration of the analysis service.
#[derive(Debug, Clone, Parser)]
#[command(name = "matrix-stats-webservice")]
#[command(about = "Computes descriptive statistics over the Q and R matrices of a decomposition")]
pub struct Config {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Address to bind.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Reject empty or non-rectangular Q/R matrices instead of analysing them as-is.
    #[arg(long)]
    pub strict_shape: bool,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
