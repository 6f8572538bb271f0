//! Planck Dashboard binary entry point.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use planck_dashboard::{AppState, DashboardConfig, create_router};

/// Planck - circuit generation, visualization and analysis service
#[derive(Parser)]
#[command(name = "planck-dashboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "PLANCK_CONFIG")]
    config: Option<PathBuf>,

    /// Bind address, overriding the configuration
    #[arg(short, long)]
    bind: Option<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = DashboardConfig::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
        config.validate()?;
    }

    init_tracing(&config, cli.verbose);

    let bind_addr = config.bind_address()?;
    let state = Arc::new(AppState::with_config(config));
    let app = create_router(state);

    tracing::info!("Starting Planck Dashboard at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Planck Dashboard stopped");
    Ok(())
}

fn init_tracing(config: &DashboardConfig, verbose: u8) {
    let level = match verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let default_filter = format!(
        "planck_dashboard={level},planck_qasm={level},planck_render={level},\
         planck_templates={level},planck_ir={level},tower_http=info"
    );
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = if config.json_logs() {
        fmt::layer().with_target(true).json().boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
