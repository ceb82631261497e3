use std::sync::Arc;

use anyhow::Context;
use tripnow_client::{ReservationListView, ReservationRepository};
use tripnow_core::{IdentityProvider, KeyValueStore, MemoryStore};
use tripnow_store::{Config, FileStore, HttpReservationApi};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripnow_app=debug,tripnow_client=debug,tripnow_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });
    tracing::info!("Using reservations API at {}", config.api.base_url);

    let store: Arc<dyn KeyValueStore> = match FileStore::open(&config.storage.path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!(
                "Storage at {} unavailable, session will not persist: {}",
                config.storage.path.display(),
                e
            );
            Arc::new(MemoryStore::new())
        }
    };
    let identity = Arc::new(IdentityProvider::new(store));
    let api = Arc::new(HttpReservationApi::new(&config.api).context("Failed to build HTTP client")?);

    let repository = ReservationRepository::new(api, identity);
    let mut updates = repository.subscribe();
    let mut view =
        ReservationListView::new(repository).with_refresh_interval(config.refresh.interval());
    view.activate();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                if !state.loading {
                    println!("{}", render::render(&state));
                }
            }
        }
    }

    view.teardown();
    tracing::info!("Shutting down");
    Ok(())
}
