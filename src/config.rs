use crate::Error;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
        }
    }
}

impl Config {
    /// Reads `HOST` and `PORT`, falling back to `127.0.0.1:3000`.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();
        if let Some(host) = host {
            let ip: IpAddr = host.parse().map_err(|_| Error::Config {
                name: "HOST",
                value: host.clone(),
            })?;
            config.bind.set_ip(ip);
        }
        if let Some(port) = port {
            let port: u16 = port.parse().map_err(|_| Error::Config {
                name: "PORT",
                value: port.clone(),
            })?;
            config.bind.set_port(port);
        }
        Ok(config)
    }
}
