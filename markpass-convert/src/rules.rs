//! Ordered Markdown rewrite rules
//!
//! The Markdown stage is a fixed chain of rewrites over the whole text. Each rule sees the
//! cumulative output of the rules before it, so the order in [`RULES`] is part of the
//! observable behavior:
//!
//!     - `###` before `##` before `#`, so a level-3 heading is never taken by a shorter rule
//!     - bold before italic, so `**x**` is not split by the single-asterisk rule
//!     - links before images, with links refusing any match preceded by `!`
//!     - table rows before table grouping, list items before list grouping
//!     - ordered items after list grouping, which leaves them as bare `<li>` lines
//!
//! A rule that finds nothing to rewrite hands its input back unchanged (`Cow::Borrowed`).
//! Unbalanced delimiters simply never match and fall through as text.
//!
//! Line-anchored rules run in CRLF mode: a line ends before `\r\n` as well as before `\n`,
//! and `.` never captures the `\r`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// A named rewrite step.
pub struct Rule {
    pub name: &'static str,
    rewrite: fn(&str) -> Cow<'_, str>,
}

impl Rule {
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        (self.rewrite)(text)
    }
}

/// The Markdown rules in application order.
pub static RULES: &[Rule] = &[
    Rule {
        name: "h3",
        rewrite: heading_3,
    },
    Rule {
        name: "h2",
        rewrite: heading_2,
    },
    Rule {
        name: "h1",
        rewrite: heading_1,
    },
    Rule {
        name: "bold",
        rewrite: bold,
    },
    Rule {
        name: "italic",
        rewrite: italic,
    },
    Rule {
        name: "link",
        rewrite: link,
    },
    Rule {
        name: "image",
        rewrite: image,
    },
    Rule {
        name: "code-block",
        rewrite: code_block,
    },
    Rule {
        name: "inline-code",
        rewrite: inline_code,
    },
    Rule {
        name: "hr",
        rewrite: horizontal_rule,
    },
    Rule {
        name: "table-row",
        rewrite: table_row,
    },
    Rule {
        name: "table",
        rewrite: table,
    },
    Rule {
        name: "unordered-item",
        rewrite: unordered_item,
    },
    Rule {
        name: "unordered-list",
        rewrite: unordered_list,
    },
    Rule {
        name: "ordered-item",
        rewrite: ordered_item,
    },
    Rule {
        name: "blockquote",
        rewrite: blockquote,
    },
];

/// Run every rule in [`RULES`] over `text`.
pub fn apply_rules(text: &str) -> String {
    let mut current = text.to_string();
    for rule in RULES {
        let next = match rule.apply(&current) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(next) => next,
        };
        tracing::trace!(
            rule = rule.name,
            before = current.len(),
            after = next.len(),
            "rule rewrote text"
        );
        current = next;
    }
    current
}

static HEADING_3: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^### (.*)$").expect("HEADING_3 regex is valid"));
static HEADING_2: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^## (.*)$").expect("HEADING_2 regex is valid"));
static HEADING_1: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^# (.*)$").expect("HEADING_1 regex is valid"));

static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("BOLD regex is valid"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("ITALIC regex is valid"));

static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("LINK regex is valid"));
static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("IMAGE regex is valid"));

static CODE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```([^`]+)```").expect("CODE_BLOCK regex is valid"));
static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("INLINE_CODE regex is valid"));

static HORIZONTAL_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^---$").expect("HORIZONTAL_RULE regex is valid"));

static TABLE_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^\|(.+)\|$").expect("TABLE_ROW regex is valid"));

static UNORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^- (.+)$").expect("UNORDERED_ITEM regex is valid"));
// ASCII digits only; `\d` would also accept other scripts' digits.
static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^[0-9]+\. (.+)$").expect("ORDERED_ITEM regex is valid"));

static BLOCKQUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^> (.+)$").expect("BLOCKQUOTE regex is valid"));

fn heading_3(text: &str) -> Cow<'_, str> {
    HEADING_3.replace_all(text, "<h3>${1}</h3>")
}

fn heading_2(text: &str) -> Cow<'_, str> {
    HEADING_2.replace_all(text, "<h2>${1}</h2>")
}

fn heading_1(text: &str) -> Cow<'_, str> {
    HEADING_1.replace_all(text, "<h1>${1}</h1>")
}

fn bold(text: &str) -> Cow<'_, str> {
    BOLD.replace_all(text, "<strong>${1}</strong>")
}

fn italic(text: &str) -> Cow<'_, str> {
    ITALIC.replace_all(text, "<em>${1}</em>")
}

fn link(text: &str) -> Cow<'_, str> {
    let mut rewritten = false;
    let replaced = LINK.replace_all(text, |caps: &Captures| {
        let start = caps.get(0).map_or(0, |whole| whole.start());
        if text[..start].ends_with('!') {
            // Image syntax; leave it for the image rule.
            return caps[0].to_string();
        }
        rewritten = true;
        format!("<a href=\"{}\">{}</a>", &caps[2], &caps[1])
    });
    if rewritten {
        replaced
    } else {
        Cow::Borrowed(text)
    }
}

fn image(text: &str) -> Cow<'_, str> {
    IMAGE.replace_all(text, "<img src=\"${2}\" alt=\"${1}\">")
}

fn code_block(text: &str) -> Cow<'_, str> {
    CODE_BLOCK.replace_all(text, "<pre><code>${1}</code></pre>")
}

fn inline_code(text: &str) -> Cow<'_, str> {
    INLINE_CODE.replace_all(text, "<code>${1}</code>")
}

fn horizontal_rule(text: &str) -> Cow<'_, str> {
    HORIZONTAL_RULE.replace_all(text, "<hr>")
}

fn table_row(text: &str) -> Cow<'_, str> {
    TABLE_ROW.replace_all(text, |caps: &Captures| {
        let cells: String = caps[0]
            .split('|')
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(|cell| format!("<td>{cell}</td>"))
            .collect();
        format!("<tr>{cells}</tr>")
    })
}

fn table(text: &str) -> Cow<'_, str> {
    group_lines(text, is_table_row_line, |rows| {
        let mut out = String::from("<table>");
        if let Some((header, body)) = rows.split_first() {
            out.push_str(&header.replace("<td>", "<th>").replace("</td>", "</th>"));
            for row in body {
                out.push_str(row);
            }
        }
        out.push_str("</table>");
        out
    })
}

fn unordered_item(text: &str) -> Cow<'_, str> {
    UNORDERED_ITEM.replace_all(text, "<li>${1}</li>")
}

fn unordered_list(text: &str) -> Cow<'_, str> {
    group_lines(text, is_list_item_line, |items| {
        format!("<ul>{}</ul>", items.concat())
    })
}

fn ordered_item(text: &str) -> Cow<'_, str> {
    ORDERED_ITEM.replace_all(text, "<li>${1}</li>")
}

fn blockquote(text: &str) -> Cow<'_, str> {
    BLOCKQUOTE.replace_all(text, "<blockquote>${1}</blockquote>")
}

/// A row line needs at least one character between its tags, so an all-blank
/// `| |` row never opens a table.
fn is_table_row_line(line: &str) -> bool {
    line.len() > "<tr></tr>".len() && line.starts_with("<tr>") && line.ends_with("</tr>")
}

fn is_list_item_line(line: &str) -> bool {
    line.len() >= "<li></li>".len() && line.starts_with("<li>") && line.ends_with("</li>")
}

fn without_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Collapse every maximal run of consecutive lines accepted by `is_member`
/// into the single line produced by `wrap`.
fn group_lines<'a>(
    text: &'a str,
    is_member: fn(&str) -> bool,
    wrap: impl Fn(&[&str]) -> String,
) -> Cow<'a, str> {
    if !text.split('\n').map(without_cr).any(is_member) {
        return Cow::Borrowed(text);
    }

    let mut out: Vec<Cow<'a, str>> = Vec::new();
    let mut run: Vec<&str> = Vec::new();
    for line in text.split('\n') {
        let content = without_cr(line);
        if is_member(content) {
            run.push(content);
            continue;
        }
        if !run.is_empty() {
            out.push(Cow::Owned(wrap(&run)));
            run.clear();
        }
        out.push(Cow::Borrowed(line));
    }
    if !run.is_empty() {
        out.push(Cow::Owned(wrap(&run)));
    }
    Cow::Owned(out.join("\n"))
}
