//! HTTP server for a finished docs app.

use std::net::SocketAddr;

use axum::Router;
use swagger_theme_render::RenderError;

/// Configuration for the docs server.
#[derive(Debug, Clone)]
pub struct DocsServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Path opened in the browser on start
    pub docs_path: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for DocsServerConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            host: "127.0.0.1".to_string(),
            docs_path: "/docs".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur when setting up or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid {field}: {path:?} must be an absolute literal path, not the root")]
    InvalidPath { field: &'static str, path: String },

    #[error("Static directory not found: {0}")]
    StaticDirNotFound(String),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),
}

/// Serves a router built with [`DocsApp`](crate::DocsApp).
pub struct DocsServer {
    config: DocsServerConfig,
}

impl DocsServer {
    /// Create a new docs server.
    pub fn new(config: DocsServerConfig) -> Self {
        Self { config }
    }

    /// Address the server binds to.
    pub fn addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        addr.parse()
            .map_err(|_| ServerError::InvalidAddress(addr.clone()))
    }

    /// Bind and serve `app` until the process is stopped.
    pub async fn start(self, app: Router) -> Result<(), ServerError> {
        let addr = self.addr()?;

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        let url = format!("http://{}{}", addr, self.config.docs_path);
        tracing::info!("Serving docs at {}", url);

        if self.config.open {
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open browser: {}", e);
            }
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}
