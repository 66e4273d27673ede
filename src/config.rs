use std::{env, net::{IpAddr, Ipv4Addr, SocketAddr}};

use crate::errors::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub service_name: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_path: Option<String>,
}

impl ServiceConfig {
    /// Reads `HOST`, `PORT` and `LOG_PATH` after loading an optional `.env`.
    pub fn from_env(service_name: &str) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Self::from_lookup(service_name, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(service_name: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let host = match lookup("HOST").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        Ok(ServiceConfig {
            service_name: service_name.to_string(),
            host,
            port,
            log_path: lookup("LOG_PATH").filter(|v| !v.is_empty()),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
