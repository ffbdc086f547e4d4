use clap::Parser;
use doh_relay_domain::CliOverrides;
use doh_relay_jobs::{JobRunner, KeepAliveJob, RateLimitSweepJob};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "doh-relay")]
#[command(version)]
#[command(about = "doh-relay - DNS resolution over HTTP with DoH-JSON output")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Requests admitted per client per window
    #[arg(long)]
    max_requests: Option<usize>,

    /// Rate-limit window in seconds
    #[arg(long)]
    window_seconds: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.port,
        bind_address: cli.bind.clone(),
        max_requests: cli.max_requests,
        window_seconds: cli.window_seconds,
        log_level: cli.log_level.clone(),
    };

    let config = doh_relay_domain::Config::load(cli.config.as_deref(), cli_overrides)?;
    config.validate()?;

    bootstrap::init_logging(&config);

    info!("Starting doh-relay v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config);

    // Background jobs: keep-alive self-ping and rate-limiter sweep.
    let shutdown = CancellationToken::new();
    let mut runner = JobRunner::new()
        .with_rate_limit_sweep(RateLimitSweepJob::new(
            services.rate_limiter.clone(),
            config.rate_limit.sweep_interval_seconds,
        ))
        .with_shutdown_token(shutdown.clone());

    if config.keep_alive.enabled {
        let health_url = format!("http://127.0.0.1:{}/health", config.server.web_port);
        runner = runner.with_keep_alive(KeepAliveJob::new(health_url, &config.keep_alive));
    }
    runner.start();

    let bind_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    server::start_web_server(bind_addr, services.app_state).await?;

    shutdown.cancel();
    info!("Server shutdown complete");
    Ok(())
}
