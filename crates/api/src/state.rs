use std::sync::Arc;

use coursehub_core::payment::PaymentGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: coursehub_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Payment collaborator consulted before enrolling in a paid course.
    pub payments: Arc<dyn PaymentGateway>,
}
