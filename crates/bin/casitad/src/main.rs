//! # casitad — casita daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Construct the in-memory repositories (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use axum::ServiceExt;
use axum::extract::Request;
use casita_adapter_http_axum::router;
use casita_adapter_http_axum::state::AppState;
use casita_adapter_storage_memory::{
    MemoryDeviceRepository, MemoryHouseRepository, MemoryRoomRepository, MemoryUserRepository,
};
use casita_app::services::device_service::DeviceService;
use casita_app::services::house_service::HouseService;
use casita_app::services::room_service::RoomService;
use casita_app::services::user_service::UserService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Repositories — clones share the underlying collection, so the room
    // and device services see the same houses and rooms as their parents.
    let user_repo = MemoryUserRepository::new();
    let house_repo = MemoryHouseRepository::new();
    let room_repo = MemoryRoomRepository::new();
    let device_repo = MemoryDeviceRepository::new();

    // Services
    let user_service = UserService::new(user_repo);
    let house_service = HouseService::new(house_repo.clone());
    let room_service = RoomService::new(room_repo.clone(), house_repo);
    let device_service = DeviceService::new(device_repo, room_repo);

    // HTTP
    let state = AppState::new(user_service, house_service, room_service, device_service);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "casitad listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        _ = terminate => {}
    }
}
