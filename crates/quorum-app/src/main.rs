use std::sync::Arc;

use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use quorum_app::app::api::routes;
use quorum_app::config::ConfigHandler;
use quorum_app::store_handler::StoreProviderHandler;
use quorum_core::config::load_config;
use quorum_db::catalog::StaticResourceCatalog;
use quorum_db::model::resource::Resource;
use quorum_db::store::memory::MemoryBookingStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Quorum booking approval server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let store = Arc::new(MemoryBookingStore::new());
    let catalog = Arc::new(StaticResourceCatalog::new(config.resources.iter().map(
        |resource| Resource {
            id: resource.id,
            name: resource.name.clone(),
            category: resource.category,
            capacity: resource.capacity,
        },
    )));

    tracing::info!(
        resources = config.resources.len(),
        "Resource catalog seeded"
    );

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(StoreProviderHandler { store, catalog })
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .push(routes()?);

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
