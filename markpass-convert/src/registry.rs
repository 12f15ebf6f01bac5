//! Renderer registry for renderer discovery and selection
//!
//! This module provides a centralized registry for all available renderers.
//! Renderers can be registered and retrieved by name.

use crate::error::ConvertError;
use crate::renderer::Renderer;
use crate::renderers::{BasicMarkdownRenderer, LineBreakRenderer, MarkdownRenderer};
use std::collections::HashMap;

/// Registry of renderers
///
/// # Examples
///
/// ```ignore
/// let registry = RendererRegistry::default();
/// let html = registry.render("# Title", "markdown")?;
/// ```
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn Renderer>>,
}

impl RendererRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        RendererRegistry {
            renderers: HashMap::new(),
        }
    }

    /// Register a renderer
    ///
    /// If a renderer with the same name already exists, it will be replaced.
    pub fn register<R: Renderer + 'static>(&mut self, renderer: R) {
        self.renderers
            .insert(renderer.name().to_string(), Box::new(renderer));
    }

    /// Get a renderer by name
    pub fn get(&self, name: &str) -> Result<&dyn Renderer, ConvertError> {
        self.renderers
            .get(name)
            .map(|r| r.as_ref())
            .ok_or_else(|| ConvertError::RendererNotFound(name.to_string()))
    }

    /// Check if a renderer exists
    pub fn has(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    /// List all available renderer names (sorted)
    pub fn list_renderers(&self) -> Vec<String> {
        let mut names: Vec<_> = self.renderers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Render source text with the named renderer
    pub fn render(&self, source: &str, renderer: &str) -> Result<String, ConvertError> {
        Ok(self.get(renderer)?.render(source))
    }
}

impl Default for RendererRegistry {
    /// Registry with all built-in renderers
    fn default() -> Self {
        let mut registry = RendererRegistry::new();
        registry.register(MarkdownRenderer::default());
        registry.register(BasicMarkdownRenderer::default());
        registry.register(LineBreakRenderer);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Renderer for Upper {
        fn name(&self) -> &str {
            "upper"
        }

        fn render(&self, source: &str) -> String {
            source.to_uppercase()
        }
    }

    #[test]
    fn default_registry_lists_builtins() {
        let registry = RendererRegistry::default();
        assert_eq!(
            registry.list_renderers(),
            vec!["line-breaks", "markdown", "markdown-basic"]
        );
    }

    #[test]
    fn unknown_renderer_is_an_error() {
        let registry = RendererRegistry::default();
        let err = registry.render("x", "rst").unwrap_err();
        assert_eq!(err, ConvertError::RendererNotFound("rst".to_string()));
        assert_eq!(err.to_string(), "Renderer 'rst' not found");
    }

    #[test]
    fn register_replaces_by_name() {
        let mut registry = RendererRegistry::new();
        assert!(!registry.has("upper"));
        registry.register(Upper);
        assert!(registry.has("upper"));
        assert_eq!(registry.render("abc", "upper").unwrap(), "ABC");
        assert_eq!(registry.get("upper").unwrap().description(), "");
    }
}
