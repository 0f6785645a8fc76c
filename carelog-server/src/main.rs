//! carelog-server binary entry point

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use carelog_server::db;
use carelog_server::{run_server, ServerConfig};

/// Server command-line arguments
#[derive(Parser, Debug)]
#[command(name = "carelog-server", about = "Senior-care tracking REST API")]
struct Args {
    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(short, long, default_value = "9000")]
    port: u16,

    /// Database file path (default: ~/.carelog/carelog.db)
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Allow requests from any origin
    #[arg(long)]
    cors_permissive: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_tracing(args.debug)?;

    let db_path = carelog_core::config::db_path(args.db_path);
    tracing::info!("Opening database at {}", db_path.display());

    let pool = db::create_pool(&db_path)
        .await
        .context("failed to open database")?;

    // The service cannot operate without its schema; bail before binding.
    db::schema::init(&pool)
        .await
        .context("failed to initialize database schema")?;

    let bind_addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .context("invalid bind address")?;

    run_server(
        pool,
        ServerConfig {
            bind_addr,
            cors_permissive: args.cors_permissive,
        },
    )
    .await?;

    Ok(())
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
