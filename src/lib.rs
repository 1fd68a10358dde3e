pub mod cli;
pub mod config;
pub mod error;
pub mod server;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use server::{build_router, serve, serve_listener};
