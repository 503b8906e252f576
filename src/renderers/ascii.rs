//! ASCII/Unicode renderer for roster-line diagrams.
//!
//! Each node slot of the model becomes a fixed-width column band. The rows
//! are, top to bottom: two title lines, a spacer, gap labels, the box top,
//! the baseline (train ids, arrows, depot markers), the box bottom and the
//! time labels.

use super::Renderer;
use super::canvas::{Canvas, Rect};
use super::charset::{BoxChars, CharSet, Glyphs};
use crate::layout::types::{DiagramModel, DiagramNode, MarkerSide};

const ROW_TITLE: usize = 0;
const ROW_GAP_LABEL: usize = 3;
const ROW_BOX_TOP: usize = 4;
const ROW_BASELINE: usize = 5;
const ROW_TIME_LABEL: usize = 7;
const HEIGHT: usize = 8;
pub const MAX_PADDING: usize = 16;
const BOX_HEIGHT: usize = 3;
/// Narrowest run of arrow shaft plus head between two boxes.
const MIN_ARROW: usize = 3;

/// Renders a diagram model to ASCII/Unicode text using box-drawing characters.
pub struct AsciiRenderer {
    pub unicode: bool,
    pub padding: usize,
}

impl AsciiRenderer {
    /// Padding above `MAX_PADDING` is clamped.
    pub fn new(unicode: bool, padding: usize) -> Self {
        Self {
            unicode,
            padding: padding.min(MAX_PADDING),
        }
    }

    fn box_width(&self, node: &DiagramNode) -> usize {
        node.label.chars().count() + 2 * self.padding + 2
    }

    /// Character width of one node slot, wide enough that neighbouring
    /// boxes, arrows and time labels never overlap.
    fn slot_width(&self, diagram: &DiagramModel) -> usize {
        let widest_box = diagram
            .nodes
            .iter()
            .map(|n| self.box_width(n))
            .max()
            .unwrap_or(2);
        let widest_gap = diagram
            .edges
            .iter()
            .map(|e| e.label().chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_ARROW);
        let widest_time = diagram
            .nodes
            .iter()
            .filter_map(|n| n.time_label.as_ref())
            .map(|t| t.text().chars().count())
            .max()
            .unwrap_or(0);
        (widest_box + widest_gap + 4).max(widest_time + 2)
    }
}

impl Renderer for AsciiRenderer {
    fn render(&self, diagram: &DiagramModel) -> String {
        let cs = CharSet::from_unicode_flag(self.unicode);
        let glyphs = Glyphs::for_charset(cs);
        let slot = self.slot_width(diagram);
        let col = |x: f64| ((x - diagram.bounds.x0) * slot as f64).round().max(0.0) as usize;

        let title = diagram.title.lines();
        let title_col = col(diagram.title.anchor.x);
        let title_width = title.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let width = (col(diagram.bounds.x1) + 1).max(title_col + title_width);
        let mut canvas = Canvas::new(width, HEIGHT);

        for (i, line) in title.iter().enumerate() {
            canvas.write_str(title_col, ROW_TITLE + i, line);
        }

        let mut boxes = Vec::with_capacity(diagram.nodes.len());
        for node in &diagram.nodes {
            let center = col(node.position.x);
            let w = self.box_width(node);
            let rect = Rect::new(center.saturating_sub(w / 2), ROW_BOX_TOP, w, BOX_HEIGHT);
            canvas.draw_box(rect, &BoxChars::for_category(cs, node.category));
            canvas.write_str(rect.x + 1 + self.padding, ROW_BASELINE, &node.label);
            if node.marker(MarkerSide::Left).is_some() && rect.x >= 2 {
                canvas.set(rect.x - 2, ROW_BASELINE, glyphs.depot);
            }
            if node.marker(MarkerSide::Right).is_some() {
                canvas.set(rect.right() + 1, ROW_BASELINE, glyphs.depot);
            }
            if let Some(time) = &node.time_label {
                canvas.write_centered(col(time.anchor.x), ROW_TIME_LABEL, &time.text());
            }
            boxes.push(rect);
        }

        for edge in &diagram.edges {
            let (Some(from), Some(to)) = (boxes.get(edge.from_index), boxes.get(edge.to_index))
            else {
                continue;
            };
            let start = from.right() + 1;
            let head = to.x.saturating_sub(2);
            if head > start {
                canvas.hline(ROW_BASELINE, start, head - 1, glyphs.shaft);
            }
            canvas.set(head, ROW_BASELINE, glyphs.arrow_right);
            canvas.write_centered(col(edge.label_anchor.x), ROW_GAP_LABEL, &edge.label());
        }

        canvas.render_to_string()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
