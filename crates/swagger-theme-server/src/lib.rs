//! Dark/light themed Swagger UI for axum apps.
//!
//! Mounts the theme assets once and registers a docs page that renders
//! Swagger UI with the theme stylesheets and toggle script spliced in.

pub mod app;
pub mod assets;
pub mod config;
pub mod server;
pub mod setup;

pub use app::DocsApp;
pub use config::ThemeConfig;
pub use server::{DocsServer, DocsServerConfig, ServerError};
pub use setup::{render_themed_docs, setup_swagger_ui_theme};
