//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;

/// Shared state cloned into each request handler.
///
/// `DatabaseConnection` is a connection pool, so clones share the underlying
/// pool; the configuration is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Arc<Config>) -> Self {
        Self { db, config }
    }
}
