//! Legal AI gateway - routes chat requests across AI providers

use anyhow::Context;
use clap::Parser;
use legal_ai_gateway::config::LoggingConfig;
use legal_ai_gateway::server;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, reload};

#[derive(Debug, Parser)]
#[command(name = "gateway", version, about = "AI provider load balancer for the legal assistant")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "GATEWAY_CONFIG", default_value = "config/gateway.yaml")]
    config: PathBuf,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,

    /// Emit logs as JSON lines
    #[arg(long, env = "GATEWAY_JSON_LOGS")]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let filter_handle = init_tracing(args.json_logs);

    let mut config = server::load_config(&args.config)
        .await
        .with_context(|| format!("loading {}", args.config.display()))?;

    if let Some(handle) = filter_handle {
        handle
            .reload(EnvFilter::new(&config.logging().level))
            .context("applying configured log level")?;
    }

    if let Some(host) = args.host {
        config.gateway.server.host = host;
    }
    if let Some(port) = args.port {
        config.gateway.server.port = port;
    }
    config.validate().context("validating configuration")?;

    server::run_server(config).await.context("running server")
}

/// Install the subscriber at the default level.
///
/// Returns a handle for applying the configured level later, or `None` when
/// `RUST_LOG` is set and wins.
fn init_tracing(json: bool) -> Option<reload::Handle<EnvFilter, Registry>> {
    let from_env = EnvFilter::try_from_default_env().ok();
    let env_overrides = from_env.is_some();
    let filter = from_env.unwrap_or_else(|| EnvFilter::new(LoggingConfig::default().level));
    let (filter, handle) = reload::Layer::new(filter);

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer).init();
    }

    (!env_overrides).then_some(handle)
}
