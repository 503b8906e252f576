//! RosterLine: the ordered legs of one (day, line) pair with parsed times.
//!
//! This is the intermediate form between raw schedule rows and the
//! positioned diagram. Legs keep the input order of the rows; times that are
//! missing or do not parse as `HH:MM:SS` are stored as `None` and only
//! suppress the annotations that depend on them.

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::schedule::types::{ScheduleRow, TrainCategory};

/// Strict time-of-day format of the `HeureA` / `HeureD` columns.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Parse a raw time-of-day cell. Empty, missing or malformed values are `None`.
///
/// Surrounding whitespace and leap seconds (`23:59:60`) are malformed too.
pub fn parse_time_of_day(raw: Option<&str>) -> Option<NaiveTime> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }
    if raw.trim() != raw {
        log::debug!("ignoring time {raw:?}: surrounding whitespace");
        return None;
    }
    match NaiveTime::parse_from_str(raw, TIME_FORMAT) {
        Ok(time) if time.nanosecond() >= 1_000_000_000 => {
            log::debug!("ignoring time {raw:?}: leap second");
            None
        }
        Ok(time) => Some(time),
        Err(e) => {
            log::debug!("ignoring time {raw:?}: {e}");
            None
        }
    }
}

// ─── Leg ─────────────────────────────────────────────────────────────────────

/// One train duty within a roster line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leg {
    pub train_id: String,
    pub departure_time: Option<NaiveTime>,
    pub arrival_time: Option<NaiveTime>,
    pub category: TrainCategory,
    /// 0-based position within the roster line.
    pub index: usize,
    pub is_first: bool,
    pub is_last: bool,
}

impl Leg {
    /// `(arrival, departure)` when both resolved, so the leg can carry a time label.
    pub fn times(&self) -> Option<(NaiveTime, NaiveTime)> {
        self.arrival_time.zip(self.departure_time)
    }
}

// ─── GapAnnotation ───────────────────────────────────────────────────────────

/// Idle time between the arrival of one leg and the departure of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GapAnnotation {
    pub from_index: usize,
    pub to_index: usize,
    /// Whole minutes, truncated toward zero. Negative when the next
    /// departure is earlier than the arrival.
    pub duration_minutes: i64,
}

impl GapAnnotation {
    /// The gap between two consecutive legs, if both adjacent times exist.
    pub fn between(earlier: &Leg, later: &Leg) -> Option<Self> {
        let arrival = earlier.arrival_time?;
        let departure = later.departure_time?;
        Some(Self {
            from_index: earlier.index,
            to_index: later.index,
            duration_minutes: departure.signed_duration_since(arrival).num_minutes(),
        })
    }
}

// ─── RosterLine ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterLine {
    pub day: String,
    pub line: String,
    pub legs: Vec<Leg>,
    /// `gaps[i]` describes legs `i` and `i + 1`; length is `legs.len() - 1`.
    pub gaps: Vec<Option<GapAnnotation>>,
}

impl RosterLine {
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Always false for a line produced by `RosterLineBuilder`.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// The gap following leg `index`, if there is one and it resolved.
    pub fn gap_after(&self, index: usize) -> Option<&GapAnnotation> {
        self.gaps.get(index).and_then(Option::as_ref)
    }
}

// ─── RosterLineBuilder ───────────────────────────────────────────────────────

/// Promotes the rows of one (day, line) pair to a `RosterLine`.
pub struct RosterLineBuilder;

impl RosterLineBuilder {
    /// Build the roster line for `day` / `line` from rows already filtered to
    /// that pair. Returns `None` when there are no rows.
    pub fn build<'a, I>(rows: I, day: &str, line: &str) -> Option<RosterLine>
    where
        I: IntoIterator<Item = &'a ScheduleRow>,
    {
        let rows: Vec<&ScheduleRow> = rows.into_iter().collect();
        if rows.is_empty() {
            log::debug!("no rows for day {day:?} line {line:?}, skipping");
            return None;
        }
        let last = rows.len() - 1;
        let legs: Vec<Leg> = rows
            .iter()
            .enumerate()
            .map(|(index, row)| Leg {
                train_id: row.train_id.clone(),
                departure_time: parse_time_of_day(row.departure_time.as_deref()),
                arrival_time: parse_time_of_day(row.arrival_time.as_deref()),
                category: row.category(),
                index,
                is_first: index == 0,
                is_last: index == last,
            })
            .collect();
        let gaps = legs
            .windows(2)
            .map(|pair| GapAnnotation::between(&pair[0], &pair[1]))
            .collect();
        Some(RosterLine {
            day: day.to_string(),
            line: line.to_string(),
            legs,
            gaps,
        })
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
