mod configuration;
mod controllers;
mod data;

use std::net::SocketAddr;
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use crate::configuration::Configuration;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into())
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Loading configuration");
    let configuration = Configuration::load("configuration.toml").await?;
    let port = configuration.resolved_port();

    let app = application_router()
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let server = axum::Server::try_bind(&addr)?
        .serve(app.into_make_service());
    println!("Server running on port {}", server.local_addr().port());
    server.await?;

    Ok(())
}

fn application_router() -> Router {
    // Unmatched methods on registered paths answer 404, not axum's default 405
    Router::new()
        .route("/", get(controllers::greetings::root).fallback(controllers::greetings::not_found))
        .route("/NSARG", get(controllers::greetings::nsarg).fallback(controllers::greetings::not_found))
}
