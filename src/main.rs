use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use echotime::models::ServerConfig;
use echotime::server;

#[derive(Parser)]
#[command(name = "echotime", version)]
#[command(about = "Answer every HTTP request with the server time and the caller's address")]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "echotime=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::default();
    let bind_addr = config.bind_addr();

    let listener = server::bind(bind_addr).await?;
    println!("{}", config.startup_message());
    tracing::info!(addr = %bind_addr, "Echotime server listening");

    server::serve(listener).await?;

    Ok(())
}
