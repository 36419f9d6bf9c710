//! Application router that remembers what it has registered.
//!
//! `axum::Router` cannot be inspected once routes are added, so `DocsApp`
//! records route paths and mounts alongside the router. The docs setup uses
//! this to mount assets only once and to detect a colliding docs route.

use std::collections::BTreeSet;
use std::convert::Infallible;

use axum::{extract::Request, response::IntoResponse, routing::MethodRouter, Router};
use tower::Service;

/// OpenAPI document path used when the app does not set one.
pub const DEFAULT_OPENAPI_URL: &str = "/openapi.json";

/// An `axum::Router` plus the metadata the docs page needs.
pub struct DocsApp<S = ()> {
    router: Router<S>,
    title: String,
    openapi_url: Option<String>,
    root_path: String,
    routes: BTreeSet<String>,
    mounts: BTreeSet<String>,
}

impl<S> DocsApp<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Create an app with the given API title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            router: Router::new(),
            title: title.into(),
            openapi_url: Some(DEFAULT_OPENAPI_URL.to_string()),
            root_path: String::new(),
            routes: BTreeSet::new(),
            mounts: BTreeSet::new(),
        }
    }

    /// Set the path the OpenAPI document is served at.
    pub fn with_openapi_url(mut self, openapi_url: Option<String>) -> Self {
        self.openapi_url = openapi_url;
        self
    }

    /// Set the prefix the app is served behind, e.g. by a reverse proxy.
    pub fn with_root_path(mut self, root_path: impl Into<String>) -> Self {
        self.root_path = root_path.into();
        self
    }

    /// Register a route.
    pub fn route(mut self, path: &str, method_router: MethodRouter<S>) -> Self {
        self.add_route(path, method_router);
        self
    }

    /// Register a route in place.
    pub fn add_route(&mut self, path: &str, method_router: MethodRouter<S>) {
        self.routes.insert(path.to_string());
        self.router = std::mem::take(&mut self.router).route(path, method_router);
    }

    /// Serve a service under a path prefix.
    pub fn mount<T>(&mut self, path: &str, service: T)
    where
        T: Service<Request, Error = Infallible> + Clone + Send + Sync + 'static,
        T::Response: IntoResponse,
        T::Future: Send + 'static,
    {
        let path = normalize_mount(path);
        self.router = std::mem::take(&mut self.router).nest_service(&path, service);
        self.mounts.insert(path);
    }

    /// Serve a router under a path prefix.
    pub fn mount_router(&mut self, path: &str, router: Router<S>) {
        let path = normalize_mount(path);
        self.router = std::mem::take(&mut self.router).nest(&path, router);
        self.mounts.insert(path);
    }

    /// Whether a route was registered at exactly this path.
    pub fn has_route(&self, path: &str) -> bool {
        self.routes.contains(path)
    }

    /// Whether something is mounted at this prefix.
    pub fn has_mount(&self, path: &str) -> bool {
        self.mounts.contains(&normalize_mount(path))
    }

    /// API title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Path of the OpenAPI document.
    pub fn openapi_url(&self) -> &str {
        self.openapi_url.as_deref().unwrap_or(DEFAULT_OPENAPI_URL)
    }

    /// Prefix the app is served behind.
    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    /// Finish building and return the router.
    pub fn into_router(self) -> Router<S> {
        self.router
    }
}

fn normalize_mount(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
