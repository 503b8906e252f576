//! Layout engine: schedule rows to positioned roster-line diagrams.

pub mod diagram;
pub mod roster;
pub mod types;

pub use diagram::DiagramLayout;
pub use roster::{GapAnnotation, Leg, RosterLine, RosterLineBuilder};
pub use types::{DiagramModel, DiagramNode, EndpointMarker, Extent, GapEdge, MarkerSide, Point};

use crate::schedule::types::ScheduleRow;

/// Build and lay out one (day, line) group in a single call.
///
/// Returns `None` for an empty group.
pub fn layout_group<'a, I>(rows: I, day: &str, line: &str) -> Option<DiagramModel>
where
    I: IntoIterator<Item = &'a ScheduleRow>,
{
    RosterLineBuilder::build(rows, day, line).map(|rl| DiagramLayout::layout(&rl))
}
