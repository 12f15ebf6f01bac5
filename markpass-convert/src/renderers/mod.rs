//! Built-in renderer implementations
//!
//! | Name             | Behavior                                                          |
//! |------------------|-------------------------------------------------------------------|
//! | `markdown`       | Markdown rules with raw HTML / embed passthrough (the default)    |
//! | `markdown-basic` | Markdown rules only; raw HTML is exposed to every rule            |
//! | `line-breaks`    | No Markdown at all; each newline becomes `<br>`                   |

pub mod line_breaks;
pub mod markdown;

pub use line_breaks::LineBreakRenderer;
pub use markdown::{BasicMarkdownRenderer, MarkdownRenderer};
