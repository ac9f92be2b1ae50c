//! JSON renderer: the class record as-is, for external pipelines.

use crate::model::ClassDocument;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &ClassDocument) -> Result<String> {
        let mut out = serde_json::to_string_pretty(doc)
            .with_context(|| format!("failed to serialize {}", doc.file_path))?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EnumDoc, PropertyDoc};

    #[test]
    fn record_fields() {
        let mut doc = ClassDocument::new("player.gd");
        doc.name = Some("Player".to_string());
        doc.extends = "Node2D".to_string();
        doc.properties.push(PropertyDoc {
            name: "speed".to_string(),
            type_hint: Some("float".to_string()),
            ..Default::default()
        });
        let mut state = EnumDoc {
            name: "State".to_string(),
            ..Default::default()
        };
        state.insert("IDLE", None);
        doc.enums.push(state);

        let out = JsonRenderer.render(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["file_path"], "player.gd");
        assert_eq!(value["name"], "Player");
        assert_eq!(value["extends"], "Node2D");
        assert!(value["summary"].is_null());
        assert_eq!(value["properties"][0]["type"], "float");
        assert_eq!(value["properties"][0]["has_setter"], false);
        assert_eq!(value["enums"][0]["values"][0]["name"], "IDLE");
        assert_eq!(value["signals"], serde_json::json!([]));
    }
}
