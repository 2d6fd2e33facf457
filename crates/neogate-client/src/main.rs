//! CLI entry point for the neogate end-to-end client.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use neogate_client::api::ApiClient;
use neogate_client::scenario::run_scenario;

#[derive(Parser)]
#[command(name = "neogate-client")]
#[command(about = "End-to-end exercise of the neogate REST API")]
struct Cli {
    /// Base URL of the neogate server.
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let client = ApiClient::new(&cli.url);

    tracing::info!(url = %cli.url, "Running end-to-end scenario");
    match run_scenario(&client).await {
        Ok(()) => {
            tracing::info!("All scenario steps passed");
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Scenario failed");
            std::process::exit(1);
        }
    }
}
