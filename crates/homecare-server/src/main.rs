//! homecare-site HTTP Server
//!
//! Serves the built WASM page as static files. There is no API beyond a
//! health check: intake requests go straight from the browser to the form
//! relay.
//!
//! `homecare-server verify` checks the `HOMECARE_*` configuration and exits.

mod handlers;
mod state;
mod verify;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use axum::{Router, routing::get};
use clap::{Parser, Subcommand};
use homecare_core::SiteConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::handlers::health_check;
use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "homecare-server", version, about = "Static host for the agency page")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check the site configuration and exit
    Verify,
}

#[derive(Debug, clap::Args)]
struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
    bind: String,

    /// Directory produced by `trunk build`
    #[arg(long, env = "HOMECARE_STATIC_DIR", default_value = "dist")]
    static_dir: PathBuf,
}

fn main() -> anyhow::Result<ExitCode> {
    // Load environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Verify) => Ok(verify::run()),
        None => serve(cli.serve),
    }
}

#[tokio::main]
async fn serve(args: ServeArgs) -> anyhow::Result<ExitCode> {
    let ServeArgs { bind, static_dir } = args;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A malformed flag only resets the flag; `verify` reports it
    let config = SiteConfig::from_lookup_lenient(|key| std::env::var(key).ok());

    match config.validate() {
        Ok(()) => tracing::info!("✓ Site configuration valid for {}", config.business_name),
        Err(e) => {
            for violation in e.violations() {
                tracing::warn!("⚠ {}", violation);
            }
            tracing::warn!("  Run `homecare-server verify` for details");
        }
    }

    if !static_dir.is_dir() {
        tracing::warn!("⚠ Static directory {} not found", static_dir.display());
        tracing::warn!("  Build the page first: trunk build --release");
    }

    let state = AppState { config: Arc::new(config), static_dir };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🏠 homecare-site running on http://{}", bind);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("  GET  /        - Agency page");
    tracing::info!("  GET  /health  - Health check");

    axum::serve(listener, app).await?;

    Ok(ExitCode::SUCCESS)
}

fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new(&state.static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
