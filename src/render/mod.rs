//! Renderer module: trait-based format dispatch.

pub mod json;
pub mod template;

use crate::model::ClassDocument;
use anyhow::{anyhow, Result};

/// Trait for rendering a ClassDocument into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &ClassDocument) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name. `template` replaces the
/// built-in markdown template.
pub fn create_renderer(format: &str, template: Option<String>) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => {
            let renderer = match template {
                Some(source) => template::TemplateRenderer::new(source)?,
                None => template::TemplateRenderer::builtin(),
            };
            Ok(Box::new(renderer))
        }
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use markdown or json",
            format
        )),
    }
}
