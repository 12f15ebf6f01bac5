//! Markdown renderers backed by [`MarkdownConverter`]

use crate::converter::{ConvertOptions, MarkdownConverter};
use crate::renderer::Renderer;

/// Markdown with raw HTML passthrough.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer {
    converter: MarkdownConverter,
}

impl Renderer for MarkdownRenderer {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown with raw HTML and embed passthrough"
    }

    fn render(&self, source: &str) -> String {
        self.converter.convert(source)
    }
}

/// Markdown without raw HTML protection.
#[derive(Debug, Clone, Copy)]
pub struct BasicMarkdownRenderer {
    converter: MarkdownConverter,
}

impl Default for BasicMarkdownRenderer {
    fn default() -> Self {
        Self {
            converter: MarkdownConverter::new(ConvertOptions { raw_html: false }),
        }
    }
}

impl Renderer for BasicMarkdownRenderer {
    fn name(&self) -> &str {
        "markdown-basic"
    }

    fn description(&self) -> &str {
        "Markdown without raw HTML protection"
    }

    fn render(&self, source: &str) -> String {
        self.converter.convert(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_differ_only_on_raw_html() {
        let plain = "**bold** text";
        assert_eq!(
            MarkdownRenderer::default().render(plain),
            BasicMarkdownRenderer::default().render(plain)
        );

        let embed = "<video src=\"a_*b*_.mp4\"></video>";
        assert_eq!(MarkdownRenderer::default().render(embed), embed);
        assert_ne!(BasicMarkdownRenderer::default().render(embed), embed);
    }
}
