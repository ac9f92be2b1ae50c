//! Markdown through a user-replaceable template.
//!
//! Templates see the class record directly: `name`, `extends`, `summary`,
//! `description`, `signals`, `enums`, `properties`, `methods`, `file_path`.

use crate::model::ClassDocument;
use crate::render::Renderer;
use anyhow::{Context, Result};
use tinytemplate::TinyTemplate;

static BUILTIN_TEMPLATE: &str = include_str!("../../templates/class_doc_template.md");

const TEMPLATE_NAME: &str = "class";

pub struct TemplateRenderer {
    source: String,
}

impl TemplateRenderer {
    /// Use `source` as the template; fails if it does not compile.
    pub fn new(source: String) -> Result<Self> {
        let renderer = Self { source };
        renderer.compile()?;
        Ok(renderer)
    }

    pub fn builtin() -> Self {
        Self {
            source: BUILTIN_TEMPLATE.to_string(),
        }
    }

    fn compile(&self) -> Result<TinyTemplate<'_>> {
        let mut tt = TinyTemplate::new();
        tt.set_default_formatter(&tinytemplate::format_unescaped);
        tt.add_template(TEMPLATE_NAME, &self.source)
            .context("invalid template")?;
        Ok(tt)
    }
}

impl Renderer for TemplateRenderer {
    fn render(&self, doc: &ClassDocument) -> Result<String> {
        let tt = self.compile()?;
        tt.render(TEMPLATE_NAME, doc)
            .with_context(|| format!("failed to render {}", doc.file_path))
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}
