//! CLI entry point for the neogate HTTP server.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use neogate_graph::GraphClient;
use neogate_server::config;
use neogate_server::routes::create_router;
use neogate_server::state::AppState;

#[derive(Parser)]
#[command(name = "neogate-server")]
#[command(about = "REST facade over a Neo4j graph database")]
struct Cli {
    /// Config file prefix (default: neogate).
    #[arg(short, long, default_value = "neogate")]
    config: String,

    /// Override the listening port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cli = Cli::parse();
    let mut settings = config::load(&cli.config);
    if let Some(port) = cli.port {
        settings.server.port = port;
    }

    // The pool is lazy, so connect succeeds even while Neo4j is down;
    // the server still starts and /health reports the outage.
    let graph = GraphClient::connect(&settings.neo4j).await?;
    if !graph.verify_connectivity().await {
        tracing::warn!(uri = %settings.neo4j.uri, "Neo4j is not reachable; /health will report unhealthy");
    }

    let app = create_router(AppState::new(graph));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
