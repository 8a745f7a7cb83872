//! fincast API server
//!
//! Stateless JSON surface over the projection engines in `fincast_core`.
//! Every endpoint takes a full input snapshot and returns the computed
//! result; nothing is persisted here.

use std::net::SocketAddr;

use axum::{Router, routing::get, routing::post};
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod error;
mod handlers;
mod validation;

#[derive(Debug, Parser)]
#[command(name = "fincast_server", about = "Financial projection API")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:3001")]
    bind: SocketAddr,

    /// Log filter, e.g. "info" or "fincast_server=debug,tower_http=debug"
    #[arg(long, default_value = "info")]
    log_filter: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_filter)),
        )
        .init();

    let app = Router::new()
        .route("/", get(|| async { "fincast API server" }))
        .route("/api/risk", post(handlers::risk))
        .route("/api/forecast", post(handlers::forecast))
        .route("/api/simulate", post(handlers::simulate))
        .route("/api/payoff", post(handlers::payoff))
        .route("/api/summary", post(handlers::summary))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .expect("Failed to bind listen address");
    tracing::info!("listening on {}", listener.local_addr().expect("local address"));
    axum::serve(listener, app).await.expect("server error");
}
