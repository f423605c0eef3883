use std::sync::Arc;

use tracing::error;

use chatter_db::Database;

use crate::error::ServiceError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
}

/// Run blocking store work off the async runtime.
pub(crate) async fn run_blocking<F, T>(state: &AppState, f: F) -> Result<T, ServiceError>
where
    F: FnOnce(&Database) -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state.db))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ServiceError::Internal(e.to_string())
        })?
}
