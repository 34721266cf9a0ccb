//! # dns-edge
//!
//! Edge-side caching dispatcher in front of a pool of stateless
//! DNS-resolution worker instances.

mod bootstrap;
mod di;

use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::trace::TraceLayer;

#[derive(Parser)]
#[command(name = "dns-edge")]
#[command(version)]
#[command(about = "Edge caching dispatcher for DNS resolution workers")]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listen port (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address (overrides config)
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Upstream instance base URL, repeatable (overrides config)
    #[arg(long = "instance")]
    pub instances: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = bootstrap::load_config(&cli)?;
    bootstrap::init_logging(&config);

    let state = di::build_state(&config);
    let app = Router::new()
        .nest(&config.server.base_path, dns_edge_api::create_api_routes(state))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()?;
    tracing::info!(
        %addr,
        base_path = %config.server.base_path,
        instances = config.upstream.instances.len(),
        "dns-edge dispatcher listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
