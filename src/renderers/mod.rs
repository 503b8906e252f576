//! Renderer trait and the built-in renderers.

pub mod ascii;
pub mod canvas;
pub mod charset;
pub mod json;
pub mod svg;

pub use ascii::AsciiRenderer;
pub use json::JsonRenderer;
pub use svg::SvgRenderer;

use crate::config::{OutputFormat, RenderConfig};
use crate::layout::types::DiagramModel;

/// Trait for diagram renderers.
pub trait Renderer {
    /// Render one laid-out roster line to a string.
    fn render(&self, diagram: &DiagramModel) -> String;

    /// Render several diagrams, separated by a blank line.
    fn render_all(&self, diagrams: &[DiagramModel]) -> String {
        diagrams
            .iter()
            .map(|d| self.render(d))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Pick the renderer for the configured output format.
pub fn renderer_for(config: &RenderConfig) -> Box<dyn Renderer + Send + Sync> {
    match config.format {
        OutputFormat::Ascii => Box::new(AsciiRenderer::new(config.unicode, config.padding)),
        OutputFormat::Svg => Box::new(SvgRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
