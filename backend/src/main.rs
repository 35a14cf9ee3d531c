//! Tagarela entry-point: logging, configuration, and the HTTP server.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use tagarela::config::ServerSettings;
use tagarela::domain::{GossipBoard, GossipBoardService};
use tagarela::inbound::http::health::HealthState;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_env().map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let clock = Arc::new(DefaultClock);
    let service = if settings.seed_example_data() {
        GossipBoardService::seeded(clock).map_err(std::io::Error::other)?
    } else {
        GossipBoardService::new(GossipBoard::new(), clock)
    };
    info!(
        %bind_addr,
        seeded = settings.seed_example_data(),
        "starting gossip board server"
    );

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, ServerConfig::new(bind_addr, service))?.await
}
