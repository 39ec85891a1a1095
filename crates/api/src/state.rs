use std::sync::Arc;

use aula_core::storage::ObjectStorage;
use aula_db::ContentStore;

use crate::config::ServerConfig;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheap to clone: everything sits behind an `Arc`. Handlers build fresh
/// use-case instances per request over these.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub storage: Arc<dyn ObjectStorage>,
    pub config: Arc<ServerConfig>,
}
