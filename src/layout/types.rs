//! Diagram types: Point, Extent, DiagramNode, GapEdge, DiagramModel.
//!
//! Coordinates are in node-slot units: node `i` sits at `x = i` on the
//! baseline `y = 0`, and `y` grows upward. Renderers map these to their own
//! character cells or pixels.

use chrono::NaiveTime;
use serde::Serialize;

use crate::schedule::types::TrainCategory;

// ─── Constants ────────────────────────────────────────────────────────────────

pub const BASELINE_Y: f64 = 0.0;
pub const TIME_LABEL_OFFSET: f64 = -0.4;
pub const MARKER_WIDTH: f64 = 0.5;
pub const MARKER_HALF_HEIGHT: f64 = 0.8;
/// Horizontal gap left between a node and the arrow touching it.
pub const EDGE_INSET: f64 = 0.2;
pub const GAP_LABEL_OFFSET: f64 = 0.2;
pub const TITLE_ANCHOR: Point = Point { x: -0.8, y: 1.2 };
pub const Y_MIN: f64 = -1.0;
pub const Y_MAX: f64 = 1.5;

/// Display format of times on the diagram.
pub const TIME_LABEL_FORMAT: &str = "%H:%M";

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── Extent ──────────────────────────────────────────────────────────────────

/// An axis-aligned box `[x0, x1] x [y0, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl Extent {
    pub fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self { x0, x1, y0, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

// ─── EndpointMarker ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkerSide {
    /// Before the first leg: the train leaves the depot.
    Left,
    /// After the last leg: the train returns to the depot.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EndpointMarker {
    pub side: MarkerSide,
    pub extent: Extent,
}

// ─── TimeLabel ───────────────────────────────────────────────────────────────

/// Arrival and departure of a leg, shown under its node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeLabel {
    pub arrival: NaiveTime,
    pub departure: NaiveTime,
    pub anchor: Point,
}

impl TimeLabel {
    pub fn text(&self) -> String {
        format!(
            "{} -> {}",
            self.arrival.format(TIME_LABEL_FORMAT),
            self.departure.format(TIME_LABEL_FORMAT)
        )
    }
}

// ─── DiagramNode ─────────────────────────────────────────────────────────────

/// A leg with its computed position and annotations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramNode {
    pub index: usize,
    /// Train id.
    pub label: String,
    pub category: TrainCategory,
    pub position: Point,
    pub markers: Vec<EndpointMarker>,
    pub time_label: Option<TimeLabel>,
}

impl DiagramNode {
    pub fn marker(&self, side: MarkerSide) -> Option<&EndpointMarker> {
        self.markers.iter().find(|m| m.side == side)
    }
}

// ─── GapEdge ─────────────────────────────────────────────────────────────────

/// Arrow between consecutive nodes carrying the transfer duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapEdge {
    pub from_index: usize,
    pub to_index: usize,
    pub duration_minutes: i64,
    pub start: Point,
    pub end: Point,
    pub label_anchor: Point,
}

impl GapEdge {
    pub fn label(&self) -> String {
        format!("{} min", self.duration_minutes)
    }
}

// ─── DiagramTitle ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramTitle {
    pub day: String,
    pub line: String,
    pub anchor: Point,
}

impl DiagramTitle {
    pub fn lines(&self) -> [String; 2] {
        [
            format!("Day: {}", self.day),
            format!("Roster line: {}", self.line),
        ]
    }
}

// ─── DiagramModel ────────────────────────────────────────────────────────────

/// The full output of the layout pass for one roster line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramModel {
    pub title: DiagramTitle,
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<GapEdge>,
    /// Coordinate space every renderer must reserve.
    pub bounds: Extent,
}

impl DiagramModel {
    pub fn new(day: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            title: DiagramTitle {
                day: day.into(),
                line: line.into(),
                anchor: TITLE_ANCHOR,
            },
            nodes: Vec::new(),
            edges: Vec::new(),
            bounds: Extent::new(-1.0, 0.0, Y_MIN, Y_MAX),
        }
    }

    /// The edge leaving node `index`, if one was laid out.
    pub fn edge_from(&self, index: usize) -> Option<&GapEdge> {
        self.edges.iter().find(|e| e.from_index == index)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
