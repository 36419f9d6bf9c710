//! Splice the theme stylesheets and toggle script into a rendered page.

use crate::assets::{CUSTOM_CSS, DARK_CSS, TOGGLE_CSS, TOGGLE_JS};

const HEAD_CLOSE: &str = "</head>";
const BODY_CLOSE: &str = "</body>";

/// Insert the theme `<link>` tags before the first `</head>` and the toggle
/// `<script>` before the first `</body>`.
///
/// When a marker is missing the tags are appended to the end of the document
/// instead, so each tag is present exactly once either way.
pub fn inject_theme(html: &str, static_mount_path: &str) -> String {
    let mount = static_mount_path.trim_end_matches('/');

    let head = format!(
        r#"
<link rel="stylesheet" href="{mount}/{custom}" />
<link rel="stylesheet" href="{mount}/{toggle}" />
<link id="swagger-dark-css" rel="stylesheet" href="{mount}/{dark}" disabled />
"#,
        custom = CUSTOM_CSS.name,
        toggle = TOGGLE_CSS.name,
        dark = DARK_CSS.name,
    );

    let body = format!(
        r#"
<script src="{mount}/{script}"></script>
"#,
        script = TOGGLE_JS.name,
    );

    let html = insert_before(html, HEAD_CLOSE, &head);
    insert_before(&html, BODY_CLOSE, &body)
}

/// Insert `snippet` before the first occurrence of `marker`.
fn insert_before(html: &str, marker: &str, snippet: &str) -> String {
    match html.find(marker) {
        Some(pos) => {
            let mut out = String::with_capacity(html.len() + snippet.len());
            out.push_str(&html[..pos]);
            out.push_str(snippet);
            out.push_str(&html[pos..]);
            out
        }
        None => {
            tracing::warn!(
                "{} not found in Swagger UI page, appending theme tags to the end",
                marker
            );
            let mut out = String::with_capacity(html.len() + snippet.len());
            out.push_str(html);
            out.push_str(snippet);
            out
        }
    }
}
