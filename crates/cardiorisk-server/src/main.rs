//! CardioRisk Server
//!
//! Serves cardiovascular risk evaluations combining a learned coronary
//! artery disease model with guideline-based rule scores.

use anyhow::Result;
use cardiorisk_server::{create_router, AppState, ServerConfig};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::signal;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "cardiorisk-server")]
#[command(about = "CardioRisk hybrid cardiovascular risk evaluator", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Directory holding model.safetensors, model.json and scaler.json
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Exit at startup if the model cannot be loaded
    #[arg(long)]
    require_model: bool,

    /// Listen address
    #[arg(short = 'l', long, default_value = "0.0.0.0")]
    listen: String,

    /// Listen port
    #[arg(short = 'P', long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = ServerConfig::load(&cli.config)?;
    if let Some(dir) = &cli.model_dir {
        config = config.with_model_dir(dir);
    }
    if cli.require_model {
        config = config.with_model_required(true);
    }

    init_tracing(cli.verbose, config.logging.json);

    info!("Starting CardioRisk Server");
    info!("Model artifacts: {:?}", config.model.artifacts.source);

    let metrics_handle = init_metrics()?;

    // Model and scaler load here, before the listener binds
    let state = AppState::new(config, Some(metrics_handle))?;
    info!("Application state initialized (model loaded: {})", state.model_loaded());

    let addr: SocketAddr = format!("{}:{}", cli.listen, cli.port).parse()?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            warn!("Shutdown signal received, stopping server...");
        })
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool, json: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("cardiorisk=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cardiorisk=info"))
    };

    let (text, json) = if json {
        (None, Some(tracing_subscriber::fmt::layer().json()))
    } else {
        (Some(tracing_subscriber::fmt::layer()), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .init();
}

/// Initialize metrics exporter and return handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "cardiorisk_requests_total",
        "Total number of evaluation requests received"
    );
    metrics::describe_counter!("cardiorisk_errors_total", "Total number of errors by type");
    metrics::describe_histogram!(
        "cardiorisk_evaluation_latency_us",
        metrics::Unit::Microseconds,
        "Evaluation latency in microseconds"
    );
    metrics::describe_histogram!(
        "cardiorisk_overall_risk",
        "Distribution of reported overall risk percentages"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
