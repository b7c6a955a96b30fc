//! # User Service Entrypoint
//!
//! Reads the listen port from the environment, assembles the router, and
//! serves until interrupted.

use std::net::SocketAddr;
use std::sync::Arc;

use user_service::server;
use user_service::users::store::UserStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let store = Arc::new(UserStore::new());
    let app = server::app(store);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("User service running on port {}", port);
    tracing::info!("Visit http://localhost:{} to use the web interface", port);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app).await?;

    Ok(())
}
