//! Landing page and static file serving

use axum::routing::{get_service, MethodRouter};
use tower_http::services::{ServeDir, ServeFile};

use crate::{AppState, SiteFiles};

/// GET / serves the configured landing page file
pub fn index_route(site: &SiteFiles) -> MethodRouter<AppState> {
    get_service(ServeFile::new(&site.index_file))
}

/// /static/* file passthrough
pub fn static_files(site: &SiteFiles) -> ServeDir {
    ServeDir::new(&site.static_dir)
}
