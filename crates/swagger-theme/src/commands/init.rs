//! Write a default theme.toml.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'swagger-theme serve --spec openapi.json' to preview your docs.");

    Ok(())
}

pub const DEFAULT_CONFIG: &str = r#"# swagger-theme configuration

[theme]
# Path the docs page is served at
docs_path = "/docs"

# Page title (defaults to "<API title> Docs")
# title = "My API Docs"

# URL prefix for the theme stylesheets and toggle script
static_mount_path = "/swagger-ui-theme-static"

# Serve theme assets from a directory instead of the built-in copies
# static_dir = "swagger-theme-static"

# Swagger UI bundle
swagger_js_url = "https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"
swagger_css_url = "https://unpkg.com/swagger-ui-dist@5/swagger-ui.css"
# swagger_favicon_url = "https://example.com/favicon.png"

# OAuth2 redirect path, resolved against the page origin
# oauth2_redirect_url = "/docs/oauth2-redirect"

# Options passed to ui.initOAuth
# [theme.init_oauth]
# clientId = "docs"

# Swagger UI options, merged over the built-in defaults
[theme.swagger_ui_parameters]
docExpansion = "none"
defaultModelsExpandDepth = -1
persistAuthorization = true
displayRequestDuration = true
"#;
