//! HTML views
//!
//! Server-rendered pages. Every user or remote value passes through
//! [`escape_html`] before it is interpolated.

mod index;
mod translate;
mod vision;

pub use index::render_index;
pub use translate::{render_translate, TranslatePage};
pub use vision::{render_vision, VisionPage};

use axum::http::StatusCode;

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const STYLE: &str = r#"
body { font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; margin: 0; background: #f4f6f8; color: #1f2328; }
header { background: #0078d4; color: #fff; padding: 16px 32px; }
header a { color: #fff; text-decoration: none; margin-right: 16px; }
main { max-width: 760px; margin: 32px auto; background: #fff; padding: 24px 32px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.12); }
label { display: block; font-weight: 600; margin: 12px 0 4px; }
textarea, input[type=url], select { width: 100%; box-sizing: border-box; padding: 8px; font-size: 1rem; }
button { margin-top: 16px; padding: 8px 20px; background: #0078d4; color: #fff; border: 0; border-radius: 4px; cursor: pointer; }
.result { margin-top: 24px; padding: 16px; background: #eef6ff; border-radius: 6px; }
.error { margin-top: 24px; padding: 16px; background: #fdecea; color: #8a1c12; border-radius: 6px; }
.preview { max-width: 100%; margin-top: 16px; border-radius: 6px; }
ul.tags { list-style: none; padding: 0; }
ul.tags li { display: inline-block; background: #e1e4e8; border-radius: 12px; padding: 2px 10px; margin: 2px; }
"#;

/// Wrap page content in the shared document layout
pub(crate) fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · Azure AI Tools</title>
<style>{STYLE}</style>
</head>
<body>
<header>
<a href="/"><strong>Azure AI Tools</strong></a>
<a href="/translate">Translator</a>
<a href="/vision">Vision</a>
</header>
<main>
{content}
</main>
</body>
</html>"#,
        title = escape_html(title),
        content = content,
    )
}

/// Standalone error page for errors that escape a handler
pub fn render_error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    let content = format!(
        r#"<h1>{code} {title}</h1>
<div class="error">{message}</div>
<p><a href="/">Back to home</a></p>"#,
        code = status.as_u16(),
        title = escape_html(title),
        message = escape_html(message),
    );
    layout(title, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_error_page() {
        let html = render_error_page(StatusCode::NOT_FOUND, "Resource not found: /nope<script>");
        assert!(html.contains("404 Not Found"));
        assert!(html.contains("/nope&lt;script&gt;"));
    }
}
