//! Schedule dataset: the loaded table, read-only to the layout core.
//!
//! Each CSV record is kept verbatim next to its deserialized `ScheduleRow`
//! so that exports hand back every original column untouched.

pub mod export;
pub mod selection;

use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::config::DatasetConfig;
use crate::error::RosterError;
use crate::schedule::types::{COL_DAY, COL_LINE, COL_TRAIN, COLUMNS, ScheduleRow};

/// Columns without which no row can be placed; the time and type columns may be absent.
const REQUIRED_COLUMNS: [&str; 3] = [COL_DAY, COL_LINE, COL_TRAIN];

pub use selection::{FilteredTable, Selection, SelectionAdvisory};

#[derive(Debug, Clone)]
pub struct ScheduleDataset {
    headers: StringRecord,
    records: Vec<StringRecord>,
    rows: Vec<ScheduleRow>,
}

impl ScheduleDataset {
    /// Read a headed CSV table.
    pub fn from_reader<R: Read>(reader: R, config: &DatasetConfig) -> Result<Self, RosterError> {
        let trim = if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        };
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(config.delimiter_byte()?)
            .trim(trim)
            .from_reader(reader);
        let headers = reader.headers()?.clone();
        if let Some(column) = REQUIRED_COLUMNS
            .into_iter()
            .find(|column| !headers.iter().any(|h| h == *column))
        {
            return Err(RosterError::MissingColumn(column));
        }
        let mut records = Vec::new();
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.deserialize::<ScheduleRow>(Some(&headers))?);
            records.push(record);
        }
        log::info!("loaded {} schedule rows", rows.len());
        Ok(Self {
            headers,
            records,
            rows,
        })
    }

    pub fn from_path(path: impl AsRef<Path>, config: &DatasetConfig) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| RosterError::io(path, e))?;
        Self::from_reader(file, config)
    }

    /// Build a dataset directly from rows, with the standard columns only.
    pub fn from_rows(rows: Vec<ScheduleRow>) -> Self {
        let records = rows
            .iter()
            .map(|row| StringRecord::from(row.to_fields().to_vec()))
            .collect();
        Self {
            headers: StringRecord::from(COLUMNS.to_vec()),
            records,
            rows,
        }
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct day labels in first-seen order.
    pub fn days(&self) -> Vec<&str> {
        distinct(self.rows.iter().map(|r| r.day.as_str()))
    }

    /// Distinct line labels among rows of the given days, first-seen order.
    pub fn lines_for_days<S: AsRef<str>>(&self, days: &[S]) -> Vec<&str> {
        distinct(
            self.rows
                .iter()
                .filter(|r| days.iter().any(|d| d.as_ref() == r.day))
                .map(|r| r.line.as_str()),
        )
    }

    /// Rows whose day and line are both selected, in dataset order.
    pub fn filter<'a>(&'a self, selection: &'a Selection) -> FilteredTable<'a> {
        let indices = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| selection.contains(row))
            .map(|(i, _)| i)
            .collect();
        FilteredTable::new(self, selection, indices)
    }

    pub(crate) fn record(&self, index: usize) -> &StringRecord {
        &self.records[index]
    }

    pub(crate) fn row(&self, index: usize) -> &ScheduleRow {
        &self.rows[index]
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

// ─── Tests ───────────────────────────────────────────────────────────────────
