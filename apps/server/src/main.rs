use anyhow::Context;
use clap::Parser;
use potter::domain::config::ApiConfig;
use potter::kernel::config::load_config;
use potter_server::{Server, init_logger};
use std::path::PathBuf;

#[cfg(feature = "profiling")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

/// Potter API server
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file; `server.toml` in the working directory is used when present
    #[arg(short, long, env = "POTTER_CONFIG")]
    config: Option<PathBuf>,

    /// Overrides `server.port`
    #[arg(short, long)]
    port: Option<u16>,
}

#[potter_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    #[cfg(feature = "profiling")]
    let _profiler = dhat::Profiler::new_heap();

    let cli = Cli::parse();

    let mut cfg: ApiConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }

    let _log = init_logger(&cfg.log)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Configuration loaded");

    Server::builder().config(cfg).build()?.run().await
}
