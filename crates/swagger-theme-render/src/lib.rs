//! Swagger UI page rendering with dark/light theme support.
//!
//! Renders the base Swagger UI HTML page, merges UI parameters over the themed
//! defaults, and splices the theme stylesheets and toggle script into the page.

pub mod assets;
pub mod inject;
pub mod params;
pub mod render;

pub use assets::{Asset, ThemeAssets};
pub use inject::inject_theme;
pub use params::{default_parameters, merge_parameters, SwaggerUiParameters};
pub use render::{RenderError, SwaggerUiPage, SwaggerUiRenderer};
