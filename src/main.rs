use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use roadnet_api::RestApi;
use roadnet_storage::StorageManager;

/// In-memory city and road graph with shortest-path queries
#[derive(Parser, Debug)]
#[command(name = "roadnet")]
#[command(about = "City/road graph service with Dijkstra shortest paths", long_about = None)]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// HTTP API port
    #[arg(long, default_value_t = 3000)]
    http_port: u16,

    /// JSON file with cities and roads to load at startup
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Number of HTTP worker threads (defaults to the number of CPUs)
    #[arg(long)]
    workers: Option<usize>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    info!("Starting roadnet v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP API port: {}", args.http_port);

    let storage = match &args.seed {
        Some(path) => StorageManager::with_seed(path)?,
        None => StorageManager::new(),
    };
    let storage = Arc::new(storage);
    let (cities, roads, _) = storage.stats();
    info!(cities, roads, "Storage initialized");

    let host = args.host.clone();
    let http_port = args.http_port;
    let workers = args.workers;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(storage, host, http_port, workers).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("roadnet started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
