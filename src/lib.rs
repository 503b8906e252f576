//! roster-diagram: train roster-line schedules to horizontal diagrams.
//!
//! Public API: `roster_lines()`, `diagrams()`, `render_selection()` and
//! `render_csv()`. The selection is always passed in explicitly; nothing is
//! read from ambient state and nothing is cached between calls.

pub mod config;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod renderers;
pub mod schedule;

#[cfg(feature = "wasm")]
pub mod wasm;

use rayon::prelude::*;

use crate::config::{AppConfig, RenderConfig};
use crate::dataset::{ScheduleDataset, Selection, SelectionAdvisory};
use crate::error::RosterError;
use crate::layout::{DiagramLayout, DiagramModel, RosterLine, RosterLineBuilder};
use crate::renderers::renderer_for;

/// Roster lines for every non-empty selected (day, line) pair, in selection order.
pub fn roster_lines(dataset: &ScheduleDataset, selection: &Selection) -> Vec<RosterLine> {
    dataset
        .filter(selection)
        .groups()
        .into_iter()
        .filter_map(|g| RosterLineBuilder::build(g.rows, g.day, g.line))
        .collect()
}

/// Laid-out diagrams for every non-empty selected pair, in selection order.
///
/// Each roster line is laid out independently on the rayon pool.
pub fn diagrams(dataset: &ScheduleDataset, selection: &Selection) -> Vec<DiagramModel> {
    let lines = roster_lines(dataset, selection);
    let models: Vec<DiagramModel> = lines.par_iter().map(DiagramLayout::layout).collect();
    log::info!("laid out {} roster line diagrams", models.len());
    models
}

/// Render every diagram of the selection with the configured renderer.
///
/// An incomplete selection yields its advisory instead of output. A complete
/// selection that matches no rows renders as an empty string.
pub fn render_selection(
    dataset: &ScheduleDataset,
    selection: &Selection,
    config: &RenderConfig,
) -> Result<String, SelectionAdvisory> {
    if let Some(advisory) = selection.advisory() {
        return Err(advisory);
    }
    let models = diagrams(dataset, selection);
    if models.is_empty() {
        return Ok(String::new());
    }
    Ok(renderer_for(config).render_all(&models))
}

/// Load a CSV table from text and render the selected days and lines.
///
/// An incomplete selection renders as its advisory message.
pub fn render_csv(
    csv_text: &str,
    days: &[&str],
    lines: &[&str],
    config: &AppConfig,
) -> Result<String, RosterError> {
    let dataset = ScheduleDataset::from_reader(csv_text.as_bytes(), &config.dataset)?;
    let selection = Selection::new(days.iter().copied(), lines.iter().copied());
    Ok(render_selection(&dataset, &selection, &config.render)
        .unwrap_or_else(|advisory| advisory.to_string()))
}
