//! cookery-server library: HTTP API of the cooking platform
//!
//! Exposes recipes, chefs, master classes, users, subscriptions,
//! enrollments, search and recommendations over JSON.

use axum::Router;
use chrono::{DateTime, Utc};
use cookery_common::config::ServerConfig;
use std::path::PathBuf;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod error;

pub use crate::db::Store;
pub use crate::error::{ApiError, ApiResult};

/// Files served outside the JSON API
#[derive(Debug, Clone)]
pub struct SiteFiles {
    /// Landing page served at `/`
    pub index_file: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl From<&ServerConfig> for SiteFiles {
    fn from(config: &ServerConfig) -> Self {
        Self {
            index_file: config.index_file.clone(),
            static_dir: config.static_dir.clone(),
        }
    }
}

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database access
    pub store: Store,
    /// Landing page and static directory
    pub site: SiteFiles,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(store: Store, site: SiteFiles) -> Self {
        Self {
            store,
            site,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
///
/// CORS covers `/`, `/health` and `/api/*`; `/static` is served without it.
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;
    use axum::routing::{get, post};

    let site = state.site.clone();

    Router::new()
        .route("/api/recipes", get(api::list_recipes).post(api::create_recipe))
        .route("/api/chefs", get(api::list_chefs).post(api::create_chef))
        .route(
            "/api/masterclasses",
            get(api::list_master_classes).post(api::create_master_class),
        )
        .route("/api/users", get(api::list_users).post(api::create_user))
        .route("/api/shopping-list", get(api::shopping_list))
        .route("/api/recommendations", get(api::recommendations))
        .route("/api/subscribe", post(api::subscribe))
        .route("/api/enroll", post(api::enroll))
        .route("/api/user-history", get(api::user_history))
        .route("/api/user-subscriptions", get(api::user_subscriptions))
        .route("/api/stats", get(api::stats))
        .route("/api/search", get(api::search_recipes))
        .route("/", api::index_route(&site))
        .merge(api::health_routes())
        .layer(middleware::from_fn(api::cors))
        .nest_service("/static", api::static_files(&site))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
