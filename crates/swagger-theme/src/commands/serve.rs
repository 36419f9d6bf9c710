//! Serve an OpenAPI document with the themed docs page.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use serde_json::Value;
use swagger_theme_server::{
    setup_swagger_ui_theme, DocsApp, DocsServer, DocsServerConfig, ThemeConfig,
};

use crate::config::load_config;

/// Options for the serve command.
#[derive(Debug)]
pub struct ServeOptions {
    pub spec: PathBuf,
    pub port: u16,
    pub host: String,
    pub title: Option<String>,
    pub open: bool,
}

/// Run the serve command.
pub async fn run(config_path: &Path, options: ServeOptions) -> Result<()> {
    let config = load_config(config_path)?.theme;
    let spec = load_spec(&options.spec)?;

    let title = options
        .title
        .or_else(|| spec_title(&spec))
        .unwrap_or_else(|| "API".to_string());

    let app = build_app(&config, spec, &title)?;

    DocsServer::new(DocsServerConfig {
        port: options.port,
        host: options.host,
        docs_path: config.docs_path.clone(),
        open: options.open,
    })
    .start(app)
    .await?;

    Ok(())
}

/// Build the router serving `spec` and the themed docs page.
pub fn build_app(config: &ThemeConfig, spec: Value, title: &str) -> Result<Router> {
    let spec = Arc::new(spec);

    let mut app = DocsApp::new(title);
    let openapi_url = app.openapi_url().to_string();
    app.add_route(
        &openapi_url,
        get(move || {
            let spec = Arc::clone(&spec);
            async move { Json(Value::clone(&spec)) }
        }),
    );

    setup_swagger_ui_theme(&mut app, config)?;

    Ok(app.into_router())
}

/// Read an OpenAPI document, converting YAML to JSON.
pub fn load_spec(path: &Path) -> Result<Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    let spec: Value = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {} as YAML", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as JSON", path.display()))?
    };

    if !spec.is_object() {
        anyhow::bail!("{} is not an OpenAPI document", path.display());
    }

    tracing::info!("Loaded OpenAPI document from {}", path.display());
    Ok(spec)
}

fn spec_title(spec: &Value) -> Option<String> {
    spec.pointer("/info/title")
        .and_then(Value::as_str)
        .map(str::to_string)
}
