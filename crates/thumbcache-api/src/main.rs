use std::sync::Arc;

use thumbcache_api::state::AppState;
use thumbcache_api::{setup, telemetry};
use thumbcache_core::Config;
use thumbcache_processing::ImageResampler;
use thumbcache_services::ResizeCacheService;
use thumbcache_storage::create_storage;

// Use mimalloc as the global allocator for better performance and lower fragmentation,
// especially when running on musl-based systems inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();
    telemetry::init_telemetry();

    let config = Config::from_env()?;

    let storage = create_storage(&config).await?;
    tracing::info!(backend = %storage.backend_type(), "Storage backend initialized");

    let service = ResizeCacheService::new(config.clone(), storage, Arc::new(ImageResampler));
    let state = Arc::new(AppState {
        service,
        config: config.clone(),
    });

    let app = setup::build_router(state);
    setup::start_server(&config, app).await?;

    Ok(())
}
