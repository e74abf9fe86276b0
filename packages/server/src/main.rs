use std::net::SocketAddr;

use anyhow::Context;
use common::event::EventState;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use campero_server::config::AppConfig;
use campero_server::seed;
use campero_server::state::{AppState, Stores};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let stores = Stores::in_memory();
    let event = if config.seed.demo_data {
        seed::seed_demo_data(&stores)
            .await
            .context("Failed to seed demo data")?;
        seed::demo_event_state()?
    } else {
        EventState::starting_now()
    };

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server.host / server.port")?;

    let app = campero_server::build_router(AppState::new(config, stores, event));

    info!("Server running at http://{}", addr);
    info!("API docs at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
