//! Serving the theme stylesheets and toggle script.

use std::path::Path;

use axum::{
    extract::Path as UrlPath,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use swagger_theme_render::ThemeAssets;

use crate::app::DocsApp;

/// Mount the theme assets at `mount_path`.
///
/// Serves `static_dir` verbatim when given, the embedded copies otherwise.
pub fn mount_theme_assets<S>(app: &mut DocsApp<S>, mount_path: &str, static_dir: Option<&Path>)
where
    S: Clone + Send + Sync + 'static,
{
    match static_dir {
        Some(dir) => {
            tracing::debug!("Serving theme assets from {} at {}", dir.display(), mount_path);
            app.mount(mount_path, ServeDir::new(dir));
        }
        None => {
            tracing::debug!("Serving embedded theme assets at {}", mount_path);
            app.mount_router(mount_path, embedded_assets_router());
        }
    }
}

/// Router serving the embedded theme files by name.
pub fn embedded_assets_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/{file}", get(serve_embedded_asset))
}

async fn serve_embedded_asset(UrlPath(file): UrlPath<String>) -> Response {
    match ThemeAssets::get(&file) {
        Some(asset) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, asset.content_type),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            asset.content,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}
