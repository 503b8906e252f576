//! Horizontal roster-line layout.
//!
//! One node per leg on a single baseline, depot markers at both ends, a
//! time label under each fully-timed leg and an arrow for every resolved gap.

use super::roster::{Leg, RosterLine};
use super::types::{
    BASELINE_Y, DiagramModel, DiagramNode, EDGE_INSET, EndpointMarker, Extent, GAP_LABEL_OFFSET,
    GapEdge, MARKER_HALF_HEIGHT, MARKER_WIDTH, MarkerSide, Point, TIME_LABEL_OFFSET, TimeLabel,
    Y_MAX, Y_MIN,
};

/// Roster-line layout engine.
pub struct DiagramLayout;

impl DiagramLayout {
    /// Lay out a roster line. Pure: the same line always yields the same model.
    pub fn layout(roster_line: &RosterLine) -> DiagramModel {
        let mut model = DiagramModel::new(&roster_line.day, &roster_line.line);
        model.nodes = roster_line.legs.iter().map(place_node).collect();
        model.edges = roster_line
            .gaps
            .iter()
            .flatten()
            .map(|gap| {
                let x = gap.from_index as f64;
                GapEdge {
                    from_index: gap.from_index,
                    to_index: gap.to_index,
                    duration_minutes: gap.duration_minutes,
                    start: Point::new(x + EDGE_INSET, BASELINE_Y),
                    end: Point::new(x + 1.0 - EDGE_INSET, BASELINE_Y),
                    label_anchor: Point::new(x + 0.5, BASELINE_Y + GAP_LABEL_OFFSET),
                }
            })
            .collect();
        model.bounds = Extent::new(-1.0, roster_line.len() as f64, Y_MIN, Y_MAX);
        model
    }
}

fn place_node(leg: &Leg) -> DiagramNode {
    let x = leg.index as f64;
    let mut markers = Vec::new();
    if leg.is_first {
        markers.push(EndpointMarker {
            side: MarkerSide::Left,
            extent: marker_extent(x - MARKER_WIDTH, x),
        });
    }
    if leg.is_last {
        markers.push(EndpointMarker {
            side: MarkerSide::Right,
            extent: marker_extent(x, x + MARKER_WIDTH),
        });
    }
    let time_label = leg.times().map(|(arrival, departure)| TimeLabel {
        arrival,
        departure,
        anchor: Point::new(x, BASELINE_Y + TIME_LABEL_OFFSET),
    });
    DiagramNode {
        index: leg.index,
        label: leg.train_id.clone(),
        category: leg.category,
        position: Point::new(x, BASELINE_Y),
        markers,
        time_label,
    }
}

fn marker_extent(x0: f64, x1: f64) -> Extent {
    Extent::new(
        x0,
        x1,
        BASELINE_Y - MARKER_HALF_HEIGHT,
        BASELINE_Y + MARKER_HALF_HEIGHT,
    )
}

// ─── Tests ───────────────────────────────────────────────────────────────────
