//! Translation form page

use super::{escape_html, layout};
use crate::models::{Outcome, TARGET_LANGUAGES};

/// Data shown on the translation page
#[derive(Debug, Clone, Default)]
pub struct TranslatePage {
    /// Submitted source text, echoed back into the form
    pub text: String,
    /// Selected target language code
    pub language: String,
    /// Fixed source language code
    pub source_language: String,
    /// Present only after a POST
    pub result: Option<Outcome<String>>,
}

pub fn render_translate(page: &TranslatePage) -> String {
    let options: String = TARGET_LANGUAGES
        .iter()
        .map(|(code, name)| {
            let selected = if *code == page.language { " selected" } else { "" };
            format!(
                r#"<option value="{code}"{selected}>{name} ({code})</option>"#,
                code = escape_html(code),
                name = escape_html(name),
                selected = selected,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let result = match &page.result {
        None => String::new(),
        Some(Outcome::Success { data }) => format!(
            r#"<div class="result" id="translated_text"><h2>Translation</h2><p>{}</p></div>"#,
            escape_html(data)
        ),
        Some(Outcome::Error { message }) => format!(
            r#"<div class="error" id="translated_text" role="alert">{}</div>"#,
            escape_html(message)
        ),
    };

    let content = format!(
        r#"<h1>Text translator</h1>
<form method="post" action="/translate">
<label for="text">Text ({source})</label>
<textarea id="text" name="text" rows="5" required>{text}</textarea>
<label for="language">Translate to</label>
<select id="language" name="language">
{options}
</select>
<button type="submit">Translate</button>
</form>
{result}"#,
        source = escape_html(&page.source_language),
        text = escape_html(&page.text),
        options = options,
        result = result,
    );

    layout("Translator", &content)
}
