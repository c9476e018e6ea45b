use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::Parser;

pub const DEFAULT_PORT: u16 = 8000;

/// Local helper exposing machine health and installed Steam games over HTTP
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about)]
pub struct Config {
    /// Port to listen on. The server only ever binds to 127.0.0.1
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Use this Steam install directory instead of looking it up
    #[arg(long, value_name = "PATH")]
    pub steam_root: Option<PathBuf>,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            steam_root: None,
        }
    }
}
