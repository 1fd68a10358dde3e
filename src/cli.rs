use std::net::SocketAddr;

use clap::Parser;

/// fee-service: HTTP service computing transaction fees.
#[derive(Parser, Debug)]
#[command(name = "fee-service", version)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, env = "FEE_SERVICE_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "FEE_SERVICE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
