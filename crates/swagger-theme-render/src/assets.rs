//! Theme stylesheets and toggle script, embedded at compile time.

/// A static theme file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    /// File name under the static mount
    pub name: &'static str,
    /// Value for the `Content-Type` header
    pub content_type: &'static str,
    /// File contents
    pub content: &'static str,
}

/// Layout tweaks applied in both themes.
pub const CUSTOM_CSS: Asset = Asset {
    name: "swagger_ui_custom.css",
    content_type: "text/css; charset=utf-8",
    content: include_str!("assets/swagger_ui_custom.css"),
};

/// Styling for the toggle button.
pub const TOGGLE_CSS: Asset = Asset {
    name: "swagger_ui_toggle.css",
    content_type: "text/css; charset=utf-8",
    content: include_str!("assets/swagger_ui_toggle.css"),
};

/// Dark palette, enabled by the toggle script.
pub const DARK_CSS: Asset = Asset {
    name: "swagger_ui_dark.css",
    content_type: "text/css; charset=utf-8",
    content: include_str!("assets/swagger_ui_dark.css"),
};

/// Toggle button and theme persistence.
pub const TOGGLE_JS: Asset = Asset {
    name: "swagger_theme_toggle.js",
    content_type: "application/javascript; charset=utf-8",
    content: include_str!("assets/swagger_theme_toggle.js"),
};

/// Lookup over the embedded theme files.
pub struct ThemeAssets;

impl ThemeAssets {
    /// All embedded files.
    pub fn all() -> [Asset; 4] {
        [CUSTOM_CSS, TOGGLE_CSS, DARK_CSS, TOGGLE_JS]
    }

    /// Find a file by name.
    pub fn get(name: &str) -> Option<Asset> {
        Self::all().into_iter().find(|asset| asset.name == name)
    }
}
