//! Registering the themed Swagger UI docs page on an app.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};

use swagger_theme_render::{
    inject_theme, merge_parameters, render::DEFAULT_SWAGGER_FAVICON_URL, RenderError,
    SwaggerUiPage, SwaggerUiRenderer,
};

use crate::app::DocsApp;
use crate::assets::mount_theme_assets;
use crate::config::ThemeConfig;
use crate::server::ServerError;

/// Everything the docs handler needs, resolved at setup time.
struct DocsPage {
    renderer: SwaggerUiRenderer,
    config: ThemeConfig,
    openapi_url: String,
    title: String,
}

/// Mount the theme assets and register the themed docs page.
///
/// Assets are mounted only if nothing is mounted at the configured prefix yet,
/// so calling this more than once is safe. A route already registered at the
/// docs path or at the mount prefix is left in place and a warning is logged.
///
/// The docs route registered by an earlier call counts as an existing route,
/// so repeating setup with the same `docs_path` logs that warning too.
pub fn setup_swagger_ui_theme<S>(
    app: &mut DocsApp<S>,
    config: &ThemeConfig,
) -> Result<(), ServerError>
where
    S: Clone + Send + Sync + 'static,
{
    config.validate()?;

    let mount_path = config.static_mount_path.trim_end_matches('/');
    if app.has_route(mount_path) || app.has_route(&format!("{}/", mount_path)) {
        tracing::warn!(
            "A route already exists at '{}'. Theme assets are not mounted; \
             set a different static_mount_path for the theme.",
            config.static_mount_path
        );
    } else if !app.has_mount(mount_path) {
        mount_theme_assets(app, mount_path, config.static_dir.as_deref());
    }

    if app.has_route(&config.docs_path) || app.has_mount(&config.docs_path) {
        tracing::warn!(
            "A route already exists at '{}'. The app may already serve its own docs page. \
             Disable the existing docs route, or set a different docs_path for the theme.",
            config.docs_path
        );
        return Ok(());
    }

    let page = Arc::new(DocsPage {
        renderer: SwaggerUiRenderer::new()?,
        config: config.clone(),
        openapi_url: format!(
            "{}{}",
            app.root_path().trim_end_matches('/'),
            app.openapi_url()
        ),
        title: config
            .title
            .clone()
            .unwrap_or_else(|| format!("{} Docs", app.title())),
    });

    tracing::info!("Themed Swagger UI registered at {}", config.docs_path);

    app.add_route(
        &config.docs_path,
        get(move || {
            let page = Arc::clone(&page);
            async move { docs_handler(&page) }
        }),
    );

    Ok(())
}

/// Render the Swagger UI page for `openapi_url` with the theme tags spliced in.
pub fn render_themed_docs(
    renderer: &SwaggerUiRenderer,
    config: &ThemeConfig,
    openapi_url: &str,
    title: &str,
) -> Result<String, RenderError> {
    let page = SwaggerUiPage {
        openapi_url: openapi_url.to_string(),
        title: title.to_string(),
        swagger_js_url: config.swagger_js_url.clone(),
        swagger_css_url: config.swagger_css_url.clone(),
        swagger_favicon_url: config
            .swagger_favicon_url
            .clone()
            .unwrap_or_else(|| DEFAULT_SWAGGER_FAVICON_URL.to_string()),
        oauth2_redirect_url: config.oauth2_redirect_url.clone(),
        init_oauth: config.init_oauth.clone(),
        parameters: merge_parameters(config.swagger_ui_parameters.as_ref()),
    };

    let base = renderer.render(&page)?;
    Ok(inject_theme(&base, &config.static_mount_path))
}

fn docs_handler(page: &DocsPage) -> Response {
    match render_themed_docs(&page.renderer, &page.config, &page.openapi_url, &page.title) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render docs page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render docs page").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{body::Body, http::Request, Router};
    use serde_json::json;
    use tower::ServiceExt;

    async fn get_text(router: Router, uri: &str) -> (StatusCode, String, Option<String>) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap().to_string());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, String::from_utf8(body.to_vec()).unwrap(), content_type)
    }

    fn themed_app(config: &ThemeConfig) -> DocsApp {
        let mut app = DocsApp::new("Pets API");
        setup_swagger_ui_theme(&mut app, config).unwrap();
        app
    }

    #[tokio::test]
    async fn serves_themed_docs_page() {
        let app = themed_app(&ThemeConfig::default());
        let (status, html, content_type) = get_text(app.into_router(), "/docs").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(html.contains("<title>Pets API Docs</title>"));
        assert!(html.contains(r#"url: "/openapi.json","#));
        assert_eq!(html.matches("swagger_ui_custom.css").count(), 1);
        assert_eq!(html.matches("swagger_ui_toggle.css").count(), 1);
        assert_eq!(html.matches(r#"id="swagger-dark-css""#).count(), 1);
        assert_eq!(html.matches("swagger_theme_toggle.js").count(), 1);
    }

    #[tokio::test]
    async fn serves_embedded_assets() {
        let app = themed_app(&ThemeConfig::default());
        let router = app.into_router();

        let (status, js, content_type) = get_text(
            router.clone(),
            "/swagger-ui-theme-static/swagger_theme_toggle.js",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("application/javascript"));
        assert!(js.contains("swagger-docs-theme"));

        let (status, _, content_type) = get_text(
            router.clone(),
            "/swagger-ui-theme-static/swagger_ui_dark.css",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/css"));

        let (status, _, _) = get_text(router, "/swagger-ui-theme-static/other.css").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn setup_twice_mounts_assets_once() {
        let config = ThemeConfig::default();
        let mut app = DocsApp::new("Pets API");

        setup_swagger_ui_theme(&mut app, &config).unwrap();
        setup_swagger_ui_theme(&mut app, &config).unwrap();
        assert!(app.has_mount("/swagger-ui-theme-static"));

        // A second nest at the same prefix would have panicked.
        let (status, html, _) = get_text(app.into_router(), "/docs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("swagger_theme_toggle.js").count(), 1);
    }

    #[tokio::test]
    async fn second_docs_path_reuses_existing_mount() {
        let mut app = DocsApp::new("Pets API");
        setup_swagger_ui_theme(&mut app, &ThemeConfig::default()).unwrap();
        setup_swagger_ui_theme(
            &mut app,
            &ThemeConfig {
                docs_path: "/internal/docs".to_string(),
                static_mount_path: "/swagger-ui-theme-static/".to_string(),
                ..Default::default()
            },
        )
        .unwrap();

        let (status, html, _) = get_text(app.into_router(), "/internal/docs").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"href="/swagger-ui-theme-static/swagger_ui_dark.css""#));
    }

    #[tokio::test]
    async fn existing_docs_route_keeps_precedence() {
        let mut app = DocsApp::new("Pets API").route("/docs", get(|| async { "default docs" }));

        setup_swagger_ui_theme(&mut app, &ThemeConfig::default()).unwrap();
        assert!(app.has_mount("/swagger-ui-theme-static"));

        let (status, body, _) = get_text(app.into_router(), "/docs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "default docs");
    }

    #[tokio::test]
    async fn existing_route_at_mount_path_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = DocsApp::new("Pets API")
            .route("/swagger-ui-theme-static", get(|| async { "app assets" }));

        let config = ThemeConfig {
            static_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        setup_swagger_ui_theme(&mut app, &config).unwrap();
        assert!(!app.has_mount("/swagger-ui-theme-static"));

        let router = app.into_router();
        let (status, body, _) = get_text(router.clone(), "/swagger-ui-theme-static").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "app assets");

        let (status, html, _) = get_text(router, "/docs").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("swagger_theme_toggle.js"));
    }

    #[test]
    fn trailing_slash_route_at_mount_path_blocks_embedded_assets() {
        let mut app: DocsApp = DocsApp::new("Pets API")
            .route("/swagger-ui-theme-static/", get(|| async { "app assets" }));

        setup_swagger_ui_theme(&mut app, &ThemeConfig::default()).unwrap();
        assert!(!app.has_mount("/swagger-ui-theme-static"));
    }

    #[tokio::test]
    async fn overrides_reach_rendered_page() {
        let config = ThemeConfig {
            title: Some("Custom Title".to_string()),
            swagger_ui_parameters: json!({ "docExpansion": "list", "filter": true })
                .as_object()
                .cloned(),
            ..Default::default()
        };
        let (_, html, _) = get_text(themed_app(&config).into_router(), "/docs").await;

        assert!(html.contains("<title>Custom Title</title>"));
        assert!(html.contains(r#""docExpansion": "list","#));
        assert!(!html.contains(r#""docExpansion": "none","#));
        assert!(html.contains(r#""filter": true,"#));
        assert!(html.contains(r#""defaultModelsExpandDepth": -1,"#));
        assert!(html.contains(r#""persistAuthorization": true,"#));
    }

    #[tokio::test]
    async fn prefixes_openapi_url_with_root_path() {
        let mut app = DocsApp::new("Pets API")
            .with_openapi_url(Some("/spec.json".to_string()))
            .with_root_path("/gateway/");
        setup_swagger_ui_theme(&mut app, &ThemeConfig::default()).unwrap();

        let (_, html, _) = get_text(app.into_router(), "/docs").await;
        assert!(html.contains(r#"url: "/gateway/spec.json","#));
    }

    #[tokio::test]
    async fn disabled_openapi_url_falls_back_to_default() {
        let mut app = DocsApp::new("Pets API").with_openapi_url(None);
        setup_swagger_ui_theme(&mut app, &ThemeConfig::default()).unwrap();

        let (_, html, _) = get_text(app.into_router(), "/docs").await;
        assert!(html.contains(r#"url: "/openapi.json","#));
    }

    #[tokio::test]
    async fn serves_assets_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("swagger_ui_dark.css"), "body { color: red; }").unwrap();

        let config = ThemeConfig {
            static_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let (status, css, _) = get_text(
            themed_app(&config).into_router(),
            "/swagger-ui-theme-static/swagger_ui_dark.css",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(css, "body { color: red; }");
    }

    #[test]
    fn wildcard_docs_path_is_rejected() {
        let mut app: DocsApp = DocsApp::new("Pets API");
        let config = ThemeConfig {
            docs_path: "/docs/*".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            setup_swagger_ui_theme(&mut app, &config),
            Err(ServerError::InvalidPath { field: "docs_path", .. })
        ));
        assert!(!app.has_route("/docs/*"));
    }

    #[test]
    fn renders_with_shared_renderer() {
        let renderer = SwaggerUiRenderer::new().unwrap();
        let config = ThemeConfig::default();

        let html = render_themed_docs(&renderer, &config, "/openapi.json", "Pets").unwrap();
        let again = render_themed_docs(&renderer, &config, "/v2.json", "Pets").unwrap();

        assert_eq!(html.matches(r#"id="swagger-dark-css""#).count(), 1);
        assert!(again.contains(r#"url: "/v2.json","#));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut app: DocsApp = DocsApp::new("Pets API");
        let config = ThemeConfig {
            docs_path: "docs".to_string(),
            ..Default::default()
        };

        assert!(setup_swagger_ui_theme(&mut app, &config).is_err());
        assert!(!app.has_mount("/swagger-ui-theme-static"));
    }
}
