//! Landing page

use super::layout;

pub fn render_index() -> String {
    let content = r#"<h1>Azure AI Tools</h1>
<p>Two small tools backed by Azure AI services.</p>
<ul>
<li><a href="/translate">Text translator</a>: translate text into another language.</li>
<li><a href="/vision">Image analysis</a>: caption, tag and detect objects in an image by URL.</li>
</ul>"#;
    layout("Home", content)
}
