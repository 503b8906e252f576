//! SVG renderer. Converts a diagram model to an SVG string.
//!
//! Model coordinates are scaled directly: one node slot is `UNIT_X` pixels
//! wide and the y axis is flipped so the title sits above the baseline.

use super::Renderer;
use crate::layout::types::{DiagramModel, DiagramNode, EndpointMarker, GapEdge, Point};
use crate::schedule::types::TrainCategory;

// ── Constants ────────────────────────────────────────────────────────────────

const UNIT_X: f64 = 120.0;
const UNIT_Y: f64 = 100.0;
const CHAR_W: f64 = 8.0;
const BOX_PAD: f64 = 8.0;
const BOX_H: f64 = 28.0;
const FONT_SIZE: u32 = 13;
const SMALL_FONT_SIZE: u32 = 10;
const TITLE_FONT_SIZE: u32 = 15;
const FONT_FAMILY: &str = "sans-serif";

const DARK_BLUE: &str = "darkblue";
const DARK_RED: &str = "darkred";
const MARKER_FILL: &str = r##"fill="#dbe3f1" stroke="#41507a" stroke-width="1""##;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn font(size: u32) -> String {
    format!(r#"font-family="{FONT_FAMILY}" font-size="{size}""#)
}

fn fill_color(category: TrainCategory) -> &'static str {
    match category {
        TrainCategory::Commercial => "green",
        TrainCategory::Evolution => "orange",
        TrainCategory::Unknown => "gray",
    }
}

/// Maps model coordinates to pixels for one diagram.
struct Frame {
    x0: f64,
    y1: f64,
}

impl Frame {
    fn px(&self, x: f64) -> f64 {
        (x - self.x0) * UNIT_X
    }

    fn py(&self, y: f64) -> f64 {
        (self.y1 - y) * UNIT_Y
    }

    fn point(&self, p: Point) -> (f64, f64) {
        (self.px(p.x), self.py(p.y))
    }
}

// ── Element rendering ────────────────────────────────────────────────────────

fn render_marker(frame: &Frame, marker: &EndpointMarker) -> String {
    let e = marker.extent;
    let x = frame.px(e.x0);
    let y = frame.py(e.y1);
    let w = e.width() * UNIT_X;
    let h = e.height() * UNIT_Y;
    format!(r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" rx="4" {MARKER_FILL}/>"#)
}

fn render_node(frame: &Frame, node: &DiagramNode) -> String {
    let (cx, cy) = frame.point(node.position);
    let w = node.label.chars().count() as f64 * CHAR_W + 2.0 * BOX_PAD;
    let x = cx - w / 2.0;
    let y = cy - BOX_H / 2.0;
    let fill = fill_color(node.category);
    let f = font(FONT_SIZE);
    let mut parts = vec![
        format!(
            r#"<rect x="{x}" y="{y}" width="{w}" height="{BOX_H}" rx="6" fill="{fill}" stroke="black" stroke-width="1"/>"#
        ),
        format!(
            r#"<text x="{cx}" y="{cy}" dominant-baseline="central" text-anchor="middle" {f}>{}</text>"#,
            escape(&node.label)
        ),
    ];
    if let Some(time) = &node.time_label {
        let (tx, ty) = frame.point(time.anchor);
        let f = font(SMALL_FONT_SIZE);
        parts.push(format!(
            r#"<text x="{tx}" y="{ty}" dominant-baseline="hanging" text-anchor="middle" {f} fill="{DARK_BLUE}">{}</text>"#,
            escape(&time.text())
        ));
    }
    parts.join("\n")
}

fn render_edge(frame: &Frame, edge: &GapEdge) -> String {
    let (x1, y1) = frame.point(edge.start);
    let (x2, y2) = frame.point(edge.end);
    let (lx, ly) = frame.point(edge.label_anchor);
    let f = font(SMALL_FONT_SIZE);
    format!(
        "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"black\" stroke-width=\"1.5\" marker-end=\"url(#arrowhead)\"/>\n\
         <text x=\"{lx}\" y=\"{ly}\" text-anchor=\"middle\" {f} fill=\"{DARK_RED}\">{}</text>",
        escape(&edge.label())
    )
}

fn render_title(frame: &Frame, diagram: &DiagramModel) -> String {
    let (x, y) = frame.point(diagram.title.anchor);
    let f = font(TITLE_FONT_SIZE);
    let tspans: String = diagram
        .title
        .lines()
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let ty = y + (i as u32 + 1) as f64 * (TITLE_FONT_SIZE + 3) as f64;
            format!(r#"<tspan x="{x}" y="{ty}">{}</tspan>"#, escape(line))
        })
        .collect();
    format!(r#"<text {f} font-weight="bold" fill="{DARK_BLUE}">{tspans}</text>"#)
}

// ── Renderer ─────────────────────────────────────────────────────────────────

/// Renders one roster line as a standalone SVG document.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl Renderer for SvgRenderer {
    fn render(&self, diagram: &DiagramModel) -> String {
        let frame = Frame {
            x0: diagram.bounds.x0,
            y1: diagram.bounds.y1,
        };
        let svg_w = diagram.bounds.width() * UNIT_X;
        let svg_h = diagram.bounds.height() * UNIT_Y;

        let mut parts = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{svg_w}" height="{svg_h}" viewBox="0 0 {svg_w} {svg_h}">"#
            ),
            "<defs>".to_string(),
            r#"  <marker id="arrowhead" markerWidth="10" markerHeight="7" refX="10" refY="3.5" orient="auto">"#.to_string(),
            r#"    <polygon points="0 0, 10 3.5, 0 7" fill="black"/>"#.to_string(),
            "  </marker>".to_string(),
            "</defs>".to_string(),
            format!(r#"<rect width="{svg_w}" height="{svg_h}" fill="white"/>"#),
            render_title(&frame, diagram),
        ];

        // Depot markers sit behind the boxes.
        for marker in diagram.nodes.iter().flat_map(|n| n.markers.iter()) {
            parts.push(render_marker(&frame, marker));
        }
        for edge in &diagram.edges {
            parts.push(render_edge(&frame, edge));
        }
        for node in &diagram.nodes {
            parts.push(render_node(&frame, node));
        }

        parts.push("</svg>".to_string());
        let mut out = parts.join("\n");
        out.push('\n');
        out
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
