//! Raw HTML passthrough
//!
//! Raw HTML embedded in a Markdown source must survive the Markdown rules untouched: an
//! iframe's `src` may well contain `*`, `_` or `[...]` sequences. Before any rule runs, the
//! recognized raw spans are swapped for opaque placeholder lines, and once paragraph wrapping
//! is done the placeholders are swapped back for the original text, byte for byte.
//!
//! Extraction runs four passes, each over the output of the previous one:
//!
//!     1. container elements (div, section, article, aside, header, footer, nav, figure,
//!        figcaption), opening tag through the first closing tag of the same name
//!     2. iframe elements
//!     3. video elements
//!     4. void elements (img, br, hr, source, track), a single optionally self-closed tag
//!
//! Containers go first so that an iframe nested in a `<figure>` travels with its container
//! instead of being captured on its own. The reverse nesting, a container inside an iframe or
//! video, leaves the container's token inside the embed's stored text. Matching is a single non-recursive scan: a `<div>`
//! nested in a `<div>` ends the outer match at the inner closing tag.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Tag names whose whole span is captured by the container pass.
pub const CONTAINER_TAGS: &[&str] = &[
    "div",
    "section",
    "article",
    "aside",
    "header",
    "footer",
    "nav",
    "figure",
    "figcaption",
];

/// Void tags captured as a single tag by the last pass.
pub const VOID_TAGS: &[&str] = &["img", "br", "hr", "source", "track"];

const PLACEHOLDER_PREFIX: &str = "___HTML_BLOCK_";
const PLACEHOLDER_SUFFIX: &str = "___";

// One alternative per tag name keeps the closing tag tied to the opening one
// without a backreference, so the linear-time engine can be used.
static CONTAINER_BLOCK: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = CONTAINER_TAGS
        .iter()
        .map(|tag| format!("<{tag}[^>]*>.*?</{tag}>"))
        .collect();
    Regex::new(&format!("(?is){}", alternatives.join("|")))
        .expect("CONTAINER_BLOCK regex is valid")
});

static IFRAME_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<iframe[^>]*>.*?</iframe>").expect("IFRAME_BLOCK regex is valid")
});

static VIDEO_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<video[^>]*>.*?</video>").expect("VIDEO_BLOCK regex is valid")
});

static VOID_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("(?i)<(?:{})[^>]*/?>", VOID_TAGS.join("|")))
        .expect("VOID_TAG regex is valid")
});

/// Returns the placeholder token standing in for the raw block at `index`.
pub fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{index}{PLACEHOLDER_SUFFIX}")
}

/// Whether `line` consists of exactly one placeholder token.
pub fn is_placeholder_line(line: &str) -> bool {
    line.strip_prefix(PLACEHOLDER_PREFIX)
        .and_then(|rest| rest.strip_suffix(PLACEHOLDER_SUFFIX))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Placeholder table for one conversion.
///
/// Indices are handed out in discovery order; the stash is consumed by a single
/// [`RawBlockStash::restore`] call and then dropped with the conversion.
#[derive(Debug, Default, Clone)]
pub struct RawBlockStash {
    blocks: Vec<String>,
}

impl RawBlockStash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every recognized raw HTML span with a placeholder token.
    pub fn extract(&mut self, text: &str) -> String {
        let passes: [(&str, &Regex); 4] = [
            ("container", &*CONTAINER_BLOCK),
            ("iframe", &*IFRAME_BLOCK),
            ("video", &*VIDEO_BLOCK),
            ("void", &*VOID_TAG),
        ];

        let mut current = text.to_string();
        for (pass, pattern) in passes {
            let before = self.blocks.len();
            current = self.stash_matches(&current, pattern);
            let captured = self.blocks.len() - before;
            if captured > 0 {
                tracing::trace!(pass, captured, "stashed raw html");
            }
        }
        current
    }

    /// Put the original text back in place of each placeholder.
    ///
    /// Tokens are resolved in descending index order, first occurrence only, and the stored
    /// text is inserted as-is. A block captured by a later pass may hold the token of an
    /// earlier one (a `<div>` inside an `<iframe>`), so the outer block has to come back first.
    pub fn restore(&self, text: &str) -> String {
        let mut restored = text.to_string();
        for (index, original) in self.blocks.iter().enumerate().rev() {
            restored = restored.replacen(&placeholder(index), original, 1);
        }
        restored
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The stashed spans, indexed by placeholder number.
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    fn stash_matches(&mut self, text: &str, pattern: &Regex) -> String {
        pattern
            .replace_all(text, |caps: &Captures| {
                let token = placeholder(self.blocks.len());
                self.blocks.push(caps[0].to_string());
                token
            })
            .into_owned()
    }
}
