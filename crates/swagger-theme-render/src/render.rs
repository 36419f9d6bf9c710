//! Base Swagger UI page renderer.

use minijinja::{context, AutoEscape, Environment};
use serde::Serialize;
use serde_json::Value;

use crate::params::{extend_parameters, SwaggerUiParameters};

/// Swagger UI bundle served from the unpkg CDN.
pub const DEFAULT_SWAGGER_JS_URL: &str = "https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js";

/// Swagger UI stylesheet served from the unpkg CDN.
pub const DEFAULT_SWAGGER_CSS_URL: &str = "https://unpkg.com/swagger-ui-dist@5/swagger-ui.css";

/// Favicon used when none is configured.
pub const DEFAULT_SWAGGER_FAVICON_URL: &str = "https://fastapi.tiangolo.com/img/favicon.png";

/// Inputs for rendering a Swagger UI page.
#[derive(Debug, Clone)]
pub struct SwaggerUiPage {
    /// URL of the OpenAPI document the UI renders against
    pub openapi_url: String,

    /// Page title
    pub title: String,

    /// Swagger UI bundle script URL
    pub swagger_js_url: String,

    /// Swagger UI stylesheet URL
    pub swagger_css_url: String,

    /// Favicon URL
    pub swagger_favicon_url: String,

    /// OAuth2 redirect path, resolved against `window.location.origin`
    pub oauth2_redirect_url: Option<String>,

    /// Options passed to `ui.initOAuth`
    pub init_oauth: Option<serde_json::Map<String, Value>>,

    /// Swagger UI options, layered over the bundle defaults
    pub parameters: SwaggerUiParameters,
}

impl SwaggerUiPage {
    /// Create a page with the CDN asset URLs and no extra parameters.
    pub fn new(openapi_url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            openapi_url: openapi_url.into(),
            title: title.into(),
            swagger_js_url: DEFAULT_SWAGGER_JS_URL.to_string(),
            swagger_css_url: DEFAULT_SWAGGER_CSS_URL.to_string(),
            swagger_favicon_url: DEFAULT_SWAGGER_FAVICON_URL.to_string(),
            oauth2_redirect_url: None,
            init_oauth: None,
            parameters: SwaggerUiParameters::new(),
        }
    }
}

/// Errors that can occur when rendering a page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to serialize UI option: {0}")]
    Json(#[from] serde_json::Error),
}

/// One `key: value` line of the `SwaggerUIBundle` call, both JSON-encoded.
#[derive(Debug, Serialize)]
struct ParamLine {
    key: String,
    value: String,
}

/// Options every Swagger UI page starts from.
fn bundle_parameters() -> SwaggerUiParameters {
    let mut params = SwaggerUiParameters::new();
    params.insert("dom_id".to_string(), Value::from("#swagger-ui"));
    params.insert("layout".to_string(), Value::from("BaseLayout"));
    params.insert("deepLinking".to_string(), Value::from(true));
    params.insert("showExtensions".to_string(), Value::from(true));
    params.insert("showCommonExtensions".to_string(), Value::from(true));
    params
}

/// Renders Swagger UI pages from a template parsed once.
pub struct SwaggerUiRenderer {
    env: Environment<'static>,
}

impl SwaggerUiRenderer {
    /// Create a renderer with the Swagger UI page template loaded.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("attr", escape_attr);
        env.add_template(TEMPLATE_NAME, SWAGGER_UI_TEMPLATE)?;

        Ok(Self { env })
    }

    /// Render the Swagger UI HTML page.
    pub fn render(&self, page: &SwaggerUiPage) -> Result<String, RenderError> {
        let mut params = bundle_parameters();
        extend_parameters(&mut params, &page.parameters);

        let parameters = params
            .iter()
            .map(|(key, value)| {
                Ok(ParamLine {
                    key: script_json(&Value::from(key.as_str()))?,
                    value: script_json(value)?,
                })
            })
            .collect::<Result<Vec<_>, serde_json::Error>>()?;

        let oauth2_redirect_url = page
            .oauth2_redirect_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(|url| script_json(&Value::from(url)))
            .transpose()?;

        let init_oauth = page
            .init_oauth
            .as_ref()
            .filter(|options| !options.is_empty())
            .map(|options| script_json(&Value::Object(options.clone())))
            .transpose()?;

        let tmpl = self.env.get_template(TEMPLATE_NAME)?;

        let html = tmpl.render(context! {
            title => &page.title,
            css_url => &page.swagger_css_url,
            js_url => &page.swagger_js_url,
            favicon_url => &page.swagger_favicon_url,
            openapi_url => script_json(&Value::from(page.openapi_url.as_str()))?,
            parameters => parameters,
            oauth2_redirect_url => oauth2_redirect_url,
            init_oauth => init_oauth,
        })?;

        Ok(html)
    }
}

/// Encode a value as JSON that is safe to embed in an inline `<script>`.
fn script_json(value: &Value) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Escape text for use inside a double-quoted attribute or element body.
fn escape_attr(value: String) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

const TEMPLATE_NAME: &str = "swagger_ui";

const SWAGGER_UI_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
<link type="text/css" rel="stylesheet" href="{{ css_url | attr }}">
<link rel="shortcut icon" href="{{ favicon_url | attr }}">
<title>{{ title | attr }}</title>
</head>
<body>
<div id="swagger-ui">
</div>
<script src="{{ js_url | attr }}"></script>
<!-- `SwaggerUIBundle` is now available on the page -->
<script>
const ui = SwaggerUIBundle({
    url: {{ openapi_url }},
{% for param in parameters %}    {{ param.key }}: {{ param.value }},
{% endfor %}{% if oauth2_redirect_url %}    oauth2RedirectUrl: window.location.origin + {{ oauth2_redirect_url }},
{% endif %}    presets: [
        SwaggerUIBundle.presets.apis,
        SwaggerUIBundle.SwaggerUIStandalonePreset
    ],
})
{% if init_oauth %}ui.initOAuth({{ init_oauth }})
{% endif %}</script>
</body>
</html>
"##;
