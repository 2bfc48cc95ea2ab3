//! Application state and HTTP router construction.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::Config;
use crate::db::Database;
use crate::graphql::{RendezvousSchema, build_schema};
use crate::services::{NotificationService, NotificationServiceConfig};

/// Shared state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Database,
    pub notifications: Arc<NotificationService>,
    pub schema: RendezvousSchema,
}

impl AppState {
    /// Wire the schema to a store and a fresh notification hub
    pub fn new(config: Config, db: Database) -> Self {
        let notifications = Arc::new(NotificationService::new(NotificationServiceConfig {
            channel_capacity: config.event_channel_capacity,
        }));
        let schema = build_schema(db.clone(), notifications.clone());

        Self {
            config: Arc::new(config),
            db,
            notifications,
            schema,
        }
    }
}

/// Build the full Axum router: health probes, /graphql, /graphql/ws and layers
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(api::health::router())
        .merge(api::graphql::router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
