//! Line-break renderer
//!
//! Used where no Markdown support is wanted at all: the text is kept as-is and every newline
//! becomes a `<br>`.

use crate::renderer::Renderer;

#[derive(Debug, Clone, Copy, Default)]
pub struct LineBreakRenderer;

impl Renderer for LineBreakRenderer {
    fn name(&self) -> &str {
        "line-breaks"
    }

    fn description(&self) -> &str {
        "Plain text with newlines turned into <br>"
    }

    fn render(&self, source: &str) -> String {
        source.replace('\n', "<br>")
    }
}
