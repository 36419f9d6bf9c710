//! Theme configuration.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};

use swagger_theme_render::render::{DEFAULT_SWAGGER_CSS_URL, DEFAULT_SWAGGER_JS_URL};

use crate::server::ServerError;

/// Settings for the themed Swagger UI docs page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ThemeConfig {
    /// Path the docs page is served at
    #[serde(default = "default_docs_path")]
    pub docs_path: String,

    /// Page title; defaults to "{app title} Docs"
    #[serde(default)]
    pub title: Option<String>,

    /// URL prefix the theme assets are mounted under
    #[serde(default = "default_static_mount_path")]
    pub static_mount_path: String,

    /// Serve theme assets from this directory instead of the embedded copies
    #[serde(default)]
    pub static_dir: Option<PathBuf>,

    /// Swagger UI bundle script URL
    #[serde(default = "default_swagger_js_url")]
    pub swagger_js_url: String,

    /// Swagger UI stylesheet URL
    #[serde(default = "default_swagger_css_url")]
    pub swagger_css_url: String,

    /// Favicon URL
    #[serde(default)]
    pub swagger_favicon_url: Option<String>,

    /// OAuth2 redirect path
    #[serde(default)]
    pub oauth2_redirect_url: Option<String>,

    /// Options passed to `ui.initOAuth`
    #[serde(default)]
    pub init_oauth: Option<Map<String, Value>>,

    /// Swagger UI options merged over the themed defaults
    #[serde(default)]
    pub swagger_ui_parameters: Option<Map<String, Value>>,
}

fn default_docs_path() -> String {
    "/docs".to_string()
}
fn default_static_mount_path() -> String {
    "/swagger-ui-theme-static".to_string()
}
fn default_swagger_js_url() -> String {
    DEFAULT_SWAGGER_JS_URL.to_string()
}
fn default_swagger_css_url() -> String {
    DEFAULT_SWAGGER_CSS_URL.to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            docs_path: default_docs_path(),
            title: None,
            static_mount_path: default_static_mount_path(),
            static_dir: None,
            swagger_js_url: default_swagger_js_url(),
            swagger_css_url: default_swagger_css_url(),
            swagger_favicon_url: None,
            oauth2_redirect_url: None,
            init_oauth: None,
            swagger_ui_parameters: None,
        }
    }
}

impl ThemeConfig {
    /// Check the paths can be registered on a router.
    pub fn validate(&self) -> Result<(), ServerError> {
        check_literal_path("docs_path", &self.docs_path)?;
        check_literal_path("static_mount_path", &self.static_mount_path)?;

        // Nesting at the root is not supported by axum.
        if self.static_mount_path.trim_end_matches('/').is_empty() {
            return Err(ServerError::InvalidPath {
                field: "static_mount_path",
                path: self.static_mount_path.clone(),
            });
        }

        if let Some(dir) = &self.static_dir {
            if !dir.is_dir() {
                return Err(ServerError::StaticDirNotFound(dir.display().to_string()));
            }
        }

        Ok(())
    }
}

/// A path axum will accept as a plain route: absolute, no captures, no
/// wildcards, no old-style `:param` segments.
fn check_literal_path(field: &'static str, path: &str) -> Result<(), ServerError> {
    let valid = path.starts_with('/')
        && !path.contains(['{', '}'])
        && path
            .split('/')
            .all(|segment| !segment.starts_with('*') && !segment.starts_with(':'));

    if valid {
        Ok(())
    } else {
        Err(ServerError::InvalidPath {
            field,
            path: path.to_string(),
        })
    }
}
