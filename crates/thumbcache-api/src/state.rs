//! Application state shared across handlers.

use thumbcache_core::Config;
use thumbcache_services::ResizeCacheService;

/// Immutable per-process state: the orchestrator and the loaded
/// configuration. Nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub service: ResizeCacheService,
    pub config: Config,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
