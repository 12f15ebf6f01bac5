//! Paragraph wrapping
//!
//! The last Markdown pass walks the rewritten text line by line. Lines that already carry a
//! block-level tag (or are a raw HTML placeholder) pass through untouched; runs of remaining
//! "loose" lines are wrapped in `<p>` ... `</p>`, one tag per line, with the loose lines of one
//! paragraph kept on their own lines. Blank lines end a paragraph and are dropped.

use crate::passthrough::is_placeholder_line;
use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^<(h[1-6]|ul|ol|li|pre|code|table|tr|blockquote|hr|img)")
        .expect("BLOCK_TAG regex is valid")
});

/// Whether a (trimmed) line is exempt from paragraph wrapping.
pub fn is_block_tagged(line: &str) -> bool {
    starts_with_block_tag(line) || is_placeholder_line(line)
}

/// Whether a (trimmed) line opens with one of the block-level tags.
pub fn starts_with_block_tag(line: &str) -> bool {
    BLOCK_TAG.is_match(line)
}

/// Wrap loose lines in paragraph tags.
///
/// Every line is trimmed on output. A paragraph closes at a blank line, before a block-tagged
/// line, and at the end of input.
pub fn wrap_paragraphs(text: &str) -> String {
    wrap_with(text, is_block_tagged)
}

/// [`wrap_paragraphs`] for text that went through no placeholder extraction: a line that
/// merely looks like a placeholder token is ordinary text.
pub fn wrap_paragraphs_without_placeholders(text: &str) -> String {
    wrap_with(text, starts_with_block_tag)
}

fn wrap_with(text: &str, is_block: fn(&str) -> bool) -> String {
    let lines: Vec<&str> = text.split('\n').map(str::trim).collect();
    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 2);
    let mut in_paragraph = false;

    for (index, line) in lines.iter().copied().enumerate() {
        if line.is_empty() {
            if in_paragraph {
                out.push("</p>");
                in_paragraph = false;
            }
            continue;
        }

        if is_block(line) {
            if in_paragraph {
                out.push("</p>");
                in_paragraph = false;
            }
            out.push(line);
            continue;
        }

        if !in_paragraph {
            out.push("<p>");
            in_paragraph = true;
        }
        out.push(line);

        let closes = match lines.get(index + 1) {
            None => true,
            Some(next) => next.is_empty() || is_block(next),
        };
        if closes {
            out.push("</p>");
            in_paragraph = false;
        }
    }

    if in_paragraph {
        out.push("</p>");
    }

    out.join("\n")
}
