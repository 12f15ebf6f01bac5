//! Article documents
//!
//! Pages that show a single Markdown document want a title next to the rendered body. The title
//! is the text of the first level-1 heading in the *source*, falling back to a configured
//! default when there is none. Only the title is escaped: it ends up inside our own markup,
//! while the body keeps the converter's no-sanitizing contract.

use crate::renderer::Renderer;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^#\s+(.+)$").expect("TITLE regex is valid"));

/// Options for [`render_document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Title used when the source has no level-1 heading.
    pub default_title: String,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            default_title: "Documentation".to_string(),
        }
    }
}

/// A rendered body plus its title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub title: String,
    pub body: String,
}

impl RenderedDocument {
    /// Wrap the body in an article shell with an escaped title header.
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"markpass-article-header\">\n\
             <h2 class=\"markpass-article-title\">{}</h2>\n\
             </div>\n\
             <div class=\"markpass-article-body\">\n\
             {}\n\
             </div>",
            html_escape::encode_text(&self.title),
            self.body
        )
    }
}

/// Text of the first `# ` heading in a Markdown source, if any.
pub fn extract_title(markdown: &str) -> Option<String> {
    TITLE
        .captures(markdown)
        .and_then(|caps| caps.get(1))
        .map(|title| title.as_str().to_string())
}

/// Render `source` and pair it with its title.
pub fn render_document(
    source: &str,
    renderer: &dyn Renderer,
    options: &DocumentOptions,
) -> RenderedDocument {
    let title = extract_title(source).unwrap_or_else(|| options.default_title.clone());
    RenderedDocument {
        title,
        body: renderer.render(source),
    }
}
