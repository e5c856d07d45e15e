use std::sync::Arc;

use pixelbox_core::media::MediaResolver;

use crate::cache::ResponseCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pixelbox_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Time-bounded cache for featured lists, stats and the about section.
    pub cache: Arc<ResponseCache>,
    /// Turns stored media references into public URLs.
    pub media: MediaResolver,
}

impl AppState {
    pub fn new(pool: pixelbox_db::DbPool, config: ServerConfig) -> Self {
        let cache = ResponseCache::new(std::time::Duration::from_secs(config.cache_ttl_secs));
        let media = MediaResolver::new(config.public_base_url.clone());
        Self {
            pool,
            config: Arc::new(config),
            cache: Arc::new(cache),
            media,
        }
    }
}
