//! Renderer trait definition
//!
//! This module defines the Renderer trait that every output flavor implements, giving callers
//! (the CLI, caches, document wrappers) one uniform way to turn source text into markup.

/// Trait for source-to-markup renderers
///
/// Rendering is infallible: a renderer must accept any string and return markup for it.
///
/// # Examples
///
/// ```ignore
/// struct Shouting;
///
/// impl Renderer for Shouting {
///     fn name(&self) -> &str {
///         "shouting"
///     }
///
///     fn render(&self, source: &str) -> String {
///         source.to_uppercase()
///     }
/// }
/// ```
pub trait Renderer: Send + Sync {
    /// The name of this renderer (e.g., "markdown", "line-breaks")
    fn name(&self) -> &str;

    /// Optional description of this renderer
    fn description(&self) -> &str {
        ""
    }

    /// Render source text into markup
    fn render(&self, source: &str) -> String;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn render(&self, source: &str) -> String {
        (**self).render(source)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn render(&self, source: &str) -> String {
        (**self).render(source)
    }
}
