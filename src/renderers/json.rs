//! JSON renderer: the diagram model itself, for external drawing tools.

use super::Renderer;
use crate::error::RosterError;
use crate::layout::types::DiagramModel;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn to_value(diagram: &DiagramModel) -> Result<serde_json::Value, RosterError> {
        Ok(serde_json::to_value(diagram)?)
    }

    /// Pretty-printed document for one diagram.
    pub fn encode(diagram: &DiagramModel) -> Result<String, RosterError> {
        Ok(serde_json::to_string_pretty(&Self::to_value(diagram)?)? + "\n")
    }

    /// A single JSON array rather than concatenated documents.
    pub fn encode_all(diagrams: &[DiagramModel]) -> Result<String, RosterError> {
        let values = diagrams
            .iter()
            .map(Self::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(serde_json::to_string_pretty(&values)? + "\n")
    }
}

fn or_null(encoded: Result<String, RosterError>) -> String {
    encoded.unwrap_or_else(|e| {
        log::error!("{e}");
        "null\n".to_string()
    })
}

impl Renderer for JsonRenderer {
    fn render(&self, diagram: &DiagramModel) -> String {
        or_null(Self::encode(diagram))
    }

    fn render_all(&self, diagrams: &[DiagramModel]) -> String {
        or_null(Self::encode_all(diagrams))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
