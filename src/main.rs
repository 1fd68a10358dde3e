use clap::Parser;
use fee_service::cli::Cli;
use fee_service::ServiceConfig;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv(); // load .env if present

    let cli = Cli::parse();

    // `--log-level` takes a plain level or full filter directives.
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = ServiceConfig {
        bind_addr: cli.bind,
    };
    info!(bind = %config.bind_addr, "fee-service starting");

    let cancel = CancellationToken::new();
    tokio::spawn(shutdown_on_signal(cancel.clone()));

    if let Err(e) = fee_service::serve(&config, cancel).await {
        tracing::error!(error = %e, "fee service fatal error");
        std::process::exit(1);
    }
}

/// Cancel `cancel` on the first SIGINT or SIGTERM so in-flight requests can drain.
async fn shutdown_on_signal(cancel: CancellationToken) {
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        _ = tokio::signal::ctrl_c() => "SIGINT",
        _ = terminate => "SIGTERM",
    };
    info!(signal, "fee-service draining connections");
    cancel.cancel();
}
