//! Demo API with a login and a token-protected ping endpoint.

use std::path::Path;

use anyhow::Result;
use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use swagger_theme_server::{
    setup_swagger_ui_theme, DocsApp, DocsServer, DocsServerConfig, ThemeConfig,
};

use crate::config::load_config;

const DEMO_USER: &str = "admin";
const DEMO_PASS: &str = "admin";
const DEMO_TOKEN: &str = "dev-token";

/// Run the demo command.
pub async fn run(config_path: &Path, port: u16, open: bool) -> Result<()> {
    let config = load_config(config_path)?.theme;
    let app = build_app(&config)?;

    tracing::info!(
        "Demo credentials: {}/{}, token: {}",
        DEMO_USER,
        DEMO_PASS,
        DEMO_TOKEN
    );

    DocsServer::new(DocsServerConfig {
        port,
        docs_path: config.docs_path.clone(),
        open,
        ..Default::default()
    })
    .start(app)
    .await?;

    Ok(())
}

/// Build the demo router with the themed docs page.
pub fn build_app(config: &ThemeConfig) -> Result<Router> {
    let mut app = DocsApp::new("Swagger Theme Demo")
        .route("/login", post(login))
        .route("/ping", get(ping));

    let openapi_url = app.openapi_url().to_string();
    app.add_route(&openapi_url, get(|| async { Json(openapi_document()) }));

    setup_swagger_ui_theme(&mut app, config)?;

    Ok(app.into_router())
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    username: String,
    password: String,
}

fn authenticate_user(username: &str, password: &str) -> bool {
    username == DEMO_USER && password == DEMO_PASS
}

async fn login(Json(body): Json<LoginRequest>) -> Json<Value> {
    if !authenticate_user(&body.username, &body.password) {
        return Json(json!({ "ok": false, "message": "Invalid credentials" }));
    }

    Json(json!({ "ok": true, "message": "Login successful", "token": DEMO_TOKEN }))
}

async fn ping(headers: HeaderMap) -> Response {
    match bearer_token(&headers) {
        None => unauthorized("Missing or invalid Authorization header"),
        Some(token) if token != DEMO_TOKEN => unauthorized("Invalid token"),
        Some(token) => Json(json!({ "ok": true, "message": "pong", "token": token })).into_response(),
    }
}

/// Extract the credentials of a `Bearer` Authorization header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, credentials) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    Some(credentials.trim())
}

fn unauthorized(detail: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "detail": detail }))).into_response()
}

fn openapi_document() -> Value {
    json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Swagger Theme Demo",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Log in with `admin` / `admin` to get a token, then call `/ping` with it."
        },
        "paths": {
            "/login": {
                "post": {
                    "summary": "Login",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/LoginRequest" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Login result",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/ResponseModel" }
                                }
                            }
                        }
                    }
                }
            },
            "/ping": {
                "get": {
                    "summary": "Ping",
                    "security": [{ "HTTPBearer": [] }],
                    "responses": {
                        "200": { "description": "Pong" },
                        "401": { "description": "Missing or invalid token" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "LoginRequest": {
                    "type": "object",
                    "required": ["username", "password"],
                    "properties": {
                        "username": { "type": "string" },
                        "password": { "type": "string" }
                    }
                },
                "ResponseModel": {
                    "type": "object",
                    "properties": {
                        "ok": { "type": "boolean" },
                        "message": { "type": "string" },
                        "token": { "type": "string" }
                    }
                }
            },
            "securitySchemes": {
                "HTTPBearer": { "type": "http", "scheme": "bearer" }
            }
        }
    })
}
