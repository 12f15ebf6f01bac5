//! Error types for renderer lookup

use std::fmt;

/// Errors that can occur while selecting a renderer.
///
/// Conversion itself is total over its input and never produces one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Renderer not found in registry
    RendererNotFound(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::RendererNotFound(name) => write!(f, "Renderer '{name}' not found"),
        }
    }
}

impl std::error::Error for ConvertError {}
