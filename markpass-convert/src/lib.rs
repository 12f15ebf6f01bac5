//! Markdown to HTML conversion with raw HTML passthrough
//!
//!     This crate turns the Markdown used by content pages (blog articles, wiki pages, short
//!     excerpts) into an HTML fragment. Authors mix plain Markdown with raw HTML: embedded
//!     videos, figures, layout containers. The raw HTML must reach the page exactly as written,
//!     while everything around it gets the usual Markdown treatment.
//!
//!     TLDR:
//!         - convert(text) is the whole public contract: one string in, one string out.
//!         - It never fails. Unbalanced or unknown syntax falls through as text.
//!         - It never escapes. Sanitize untrusted input outside of this crate.
//!
//!     This is a pure lib: no I/O, no env vars, no global state. Fetching sources and
//!     injecting the result into a page belong to the callers.
//!
//! Architecture
//!
//!     Conversion is a fixed pipeline (./converter.rs):
//!
//!         raw HTML → placeholders (./passthrough.rs)
//!         Markdown rules, in a fixed order (./rules.rs)
//!         paragraph wrapping over lines (./paragraphs.rs)
//!         placeholders → raw HTML (./passthrough.rs)
//!
//!     The rule chain is deliberately not CommonMark. There are no nested blocks, the first row
//!     of a table is always its header, ordered list items are emitted as bare `<li>` lines,
//!     and nested same-named containers close at the first matching end tag. All of that is
//!     behavior existing content relies on.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── converter.rs            # MarkdownConverter, the four-stage pipeline
//!     ├── passthrough.rs          # raw HTML placeholder stash
//!     ├── rules.rs                # ordered Markdown rewrite rules
//!     ├── paragraphs.rs           # paragraph wrapping
//!     ├── renderer.rs             # Renderer trait
//!     ├── renderers               # built-in renderers
//!     ├── registry.rs             # RendererRegistry for selection by name
//!     ├── cache.rs                # content-addressed render cache
//!     ├── document.rs             # title extraction and article wrapping
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── convert                 # end-to-end conversion behavior
//!     ├── properties.rs           # proptest: totality, determinism, passthrough
//!     └── renderers.rs            # registry, cache, documents
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.

pub mod cache;
pub mod converter;
pub mod document;
pub mod error;
pub mod paragraphs;
pub mod passthrough;
pub mod registry;
pub mod renderer;
pub mod renderers;
pub mod rules;

pub use cache::{CacheStats, CachedRenderer};
pub use converter::{convert, ConvertOptions, MarkdownConverter};
pub use document::{extract_title, render_document, DocumentOptions, RenderedDocument};
pub use error::ConvertError;
pub use registry::RendererRegistry;
pub use renderer::Renderer;
