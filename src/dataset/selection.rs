//! Operator selection of days and lines, and the filtered table it yields.

use csv::StringRecord;

use super::ScheduleDataset;
use crate::schedule::types::ScheduleRow;

// ─── SelectionAdvisory ───────────────────────────────────────────────────────

/// Why a selection cannot produce diagrams yet. Reported to the operator, never fatal.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAdvisory {
    #[error("Please select at least one day.")]
    NoDays,
    #[error("Please select at least one line.")]
    NoLines,
}

// ─── Selection ───────────────────────────────────────────────────────────────

/// Selected day and line labels, de-duplicated, in the order chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    days: Vec<String>,
    lines: Vec<String>,
}

impl Selection {
    pub fn new<D, L>(days: D, lines: L) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            days: dedup(days),
            lines: dedup(lines),
        }
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Days are checked before lines, as an operator picks them in that order.
    pub fn advisory(&self) -> Option<SelectionAdvisory> {
        if self.days.is_empty() {
            Some(SelectionAdvisory::NoDays)
        } else if self.lines.is_empty() {
            Some(SelectionAdvisory::NoLines)
        } else {
            None
        }
    }

    pub fn contains(&self, row: &ScheduleRow) -> bool {
        self.days.contains(&row.day) && self.lines.contains(&row.line)
    }

    /// Every (day, line) pair: days outer, lines inner.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.days.iter().flat_map(move |day| {
            self.lines
                .iter()
                .map(move |line| (day.as_str(), line.as_str()))
        })
    }
}

fn dedup<I>(values: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for value in values {
        let value = value.into();
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

// ─── FilteredTable ───────────────────────────────────────────────────────────

/// Rows of a dataset that match a selection, in dataset order.
#[derive(Debug, Clone)]
pub struct FilteredTable<'a> {
    dataset: &'a ScheduleDataset,
    selection: &'a Selection,
    indices: Vec<usize>,
}

/// Rows of one (day, line) pair.
#[derive(Debug, Clone)]
pub struct RowGroup<'a> {
    pub day: &'a str,
    pub line: &'a str,
    pub rows: Vec<&'a ScheduleRow>,
}

impl<'a> FilteredTable<'a> {
    pub(crate) fn new(
        dataset: &'a ScheduleDataset,
        selection: &'a Selection,
        indices: Vec<usize>,
    ) -> Self {
        Self {
            dataset,
            selection,
            indices,
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn headers(&self) -> &'a StringRecord {
        self.dataset.headers()
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a ScheduleRow> + '_ {
        self.indices.iter().map(|&i| self.dataset.row(i))
    }

    /// The original records, all columns, unchanged.
    pub fn records(&self) -> impl Iterator<Item = &'a StringRecord> + '_ {
        self.indices.iter().map(|&i| self.dataset.record(i))
    }

    /// Rows per selected (day, line) pair in selection order; empty pairs are skipped.
    pub fn groups(&self) -> Vec<RowGroup<'a>> {
        self.selection
            .pairs()
            .filter_map(|(day, line)| {
                let rows: Vec<&ScheduleRow> = self
                    .rows()
                    .filter(|r| r.day == day && r.line == line)
                    .collect();
                if rows.is_empty() {
                    log::debug!("no rows for day {day:?} line {line:?}");
                    None
                } else {
                    Some(RowGroup { day, line, rows })
                }
            })
            .collect()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
