//! Markdown to HTML conversion
//!
//! [`MarkdownConverter::convert`] runs four stages in a fixed order:
//!
//!     A. raw HTML extraction      (./passthrough.rs)
//!     B. Markdown rules           (./rules.rs)
//!     C. paragraph wrapping       (./paragraphs.rs)
//!     D. raw HTML restoration     (./passthrough.rs)
//!
//! The converter is pure: every call works on its own copies of the text and its own
//! placeholder table, so one instance can be shared freely across threads.
//!
//! No escaping or sanitizing is done. Raw HTML in the source, recognized or not, reaches the
//! output verbatim; callers rendering untrusted input must sanitize it themselves.

use crate::paragraphs::{wrap_paragraphs, wrap_paragraphs_without_placeholders};
use crate::passthrough::RawBlockStash;
use crate::rules::apply_rules;

/// Knobs for [`MarkdownConverter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Protect raw HTML containers, embeds and void tags from the Markdown rules.
    ///
    /// With this off, stages A and D are skipped and raw HTML is exposed to every rule.
    pub raw_html: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { raw_html: true }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownConverter {
    options: ConvertOptions,
}

impl MarkdownConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Convert Markdown (with embedded raw HTML) to an HTML fragment.
    ///
    /// Total over all inputs: malformed or unbalanced markup falls through as text.
    pub fn convert(&self, text: &str) -> String {
        if !self.options.raw_html {
            let html = wrap_paragraphs_without_placeholders(&apply_rules(text));
            tracing::debug!(
                input_len = text.len(),
                output_len = html.len(),
                "converted markdown without raw html passthrough"
            );
            return html;
        }

        let mut stash = RawBlockStash::new();
        let protected = stash.extract(text);
        let rewritten = apply_rules(&protected);
        let wrapped = wrap_paragraphs(&rewritten);
        let html = stash.restore(&wrapped);

        tracing::debug!(
            input_len = text.len(),
            output_len = html.len(),
            raw_blocks = stash.len(),
            "converted markdown"
        );
        html
    }
}

/// Convert with the default options (raw HTML passthrough on).
pub fn convert(text: &str) -> String {
    MarkdownConverter::default().convert(text)
}
