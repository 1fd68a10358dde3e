//! Service configuration.

use std::net::{Ipv4Addr, SocketAddr};

/// Runtime parameters for the HTTP service.
///
/// Use [`Default::default()`] and override fields from the command line.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
        }
    }
}
