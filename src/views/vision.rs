//! Image analysis form page

use super::{escape_html, layout};
use crate::models::vision::ImageAnalysis;
use crate::models::Outcome;

/// Data shown on the vision page
#[derive(Debug, Clone, Default)]
pub struct VisionPage {
    /// Submitted image URL, echoed back and previewed
    pub image_url: String,
    /// Present only after a POST
    pub result: Option<Outcome<ImageAnalysis>>,
}

fn percent(confidence: f32) -> String {
    format!("{:.1}%", confidence * 100.0)
}

fn render_analysis(analysis: &ImageAnalysis) -> String {
    let mut html = String::from(r#"<div class="result" id="result">"#);

    match analysis.caption() {
        Some(caption) => html.push_str(&format!(
            "<h2>Caption</h2><p>{} <small>({})</small></p>",
            escape_html(&caption.text),
            percent(caption.confidence)
        )),
        None => html.push_str("<h2>Caption</h2><p>No caption returned.</p>"),
    }

    html.push_str("<h2>Tags</h2>");
    if analysis.tags().is_empty() {
        html.push_str("<p>No tags returned.</p>");
    } else {
        html.push_str(r#"<ul class="tags">"#);
        for tag in analysis.tags() {
            html.push_str(&format!(
                "<li>{} <small>{}</small></li>",
                escape_html(&tag.name),
                percent(tag.confidence)
            ));
        }
        html.push_str("</ul>");
    }

    html.push_str("<h2>Objects</h2>");
    if analysis.objects().is_empty() {
        html.push_str("<p>No objects detected.</p>");
    } else {
        html.push_str("<ul>");
        for object in analysis.objects() {
            let label = object
                .label()
                .map(|tag| format!("{} ({})", escape_html(&tag.name), percent(tag.confidence)))
                .unwrap_or_else(|| "unlabelled".to_string());
            let b = object.bounding_box;
            html.push_str(&format!(
                "<li>{} at x={}, y={}, {}×{}</li>",
                label, b.x, b.y, b.w, b.h
            ));
        }
        html.push_str("</ul>");
    }

    if let Some(meta) = analysis.metadata {
        html.push_str(&format!("<p><small>Image size: {}×{}</small></p>", meta.width, meta.height));
    }

    html.push_str("</div>");
    html
}

pub fn render_vision(page: &VisionPage) -> String {
    let result = match &page.result {
        None => String::new(),
        Some(Outcome::Success { data }) => render_analysis(data),
        Some(Outcome::Error { message }) => format!(
            r#"<div class="error" id="result" role="alert">{}</div>"#,
            escape_html(message)
        ),
    };

    let preview = if page.image_url.is_empty() {
        String::new()
    } else {
        format!(
            r#"<img class="preview" src="{url}" alt="Submitted image">"#,
            url = escape_html(&page.image_url)
        )
    };

    let content = format!(
        r#"<h1>Image analysis</h1>
<form method="post" action="/vision">
<label for="image_url">Image URL</label>
<input type="url" id="image_url" name="image_url" value="{url}" placeholder="https://..." required>
<button type="submit">Analyze</button>
</form>
{preview}
{result}"#,
        url = escape_html(&page.image_url),
        preview = preview,
        result = result,
    );

    layout("Vision", &content)
}
