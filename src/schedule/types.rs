/// Input records for the roster-line pipeline.
///
/// `ScheduleRow` is one line of the schedule table exactly as loaded; the
/// optional string fields are left unparsed so that a bad cell never stops
/// the dataset from loading. `TrainCategory` is the tagged form of the
/// `TypeTrainA` column.
use serde::{Deserialize, Serialize};

// ─── Column names ────────────────────────────────────────────────────────────

pub const COL_DAY: &str = "Jour";
pub const COL_LINE: &str = "Ligne Jour";
pub const COL_TRAIN: &str = "TrainA";
pub const COL_ARRIVAL: &str = "HeureA";
pub const COL_DEPARTURE: &str = "HeureD";
pub const COL_TRAIN_TYPE: &str = "TypeTrainA";

/// Columns the core reads, in the order used when a table is built from rows.
pub const COLUMNS: [&str; 6] = [
    COL_DAY,
    COL_LINE,
    COL_TRAIN,
    COL_ARRIVAL,
    COL_DEPARTURE,
    COL_TRAIN_TYPE,
];

// ─── TrainCategory ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrainCategory {
    /// Passenger-carrying service.
    Commercial,
    /// Non-revenue repositioning move.
    Evolution,
    #[default]
    Unknown,
}

impl TrainCategory {
    pub const COMMERCIAL_LABEL: &str = "Commercial";
    pub const EVOLUTION_LABEL: &str = "Évolution";

    /// Classify a raw `TypeTrainA` value. Exact, case-sensitive match.
    pub fn classify(train_type: Option<&str>) -> Self {
        match train_type {
            Some(Self::COMMERCIAL_LABEL) => TrainCategory::Commercial,
            Some(Self::EVOLUTION_LABEL) => TrainCategory::Evolution,
            _ => TrainCategory::Unknown,
        }
    }
}

// ─── ScheduleRow ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Service day label (e.g. "Lundi").
    #[serde(rename = "Jour")]
    pub day: String,
    /// Roster line label within that day.
    #[serde(rename = "Ligne Jour")]
    pub line: String,
    #[serde(rename = "TrainA")]
    pub train_id: String,
    /// Raw `HH:MM:SS` arrival time, if the cell is filled.
    #[serde(rename = "HeureA", default)]
    pub arrival_time: Option<String>,
    /// Raw `HH:MM:SS` departure time, if the cell is filled.
    #[serde(rename = "HeureD", default)]
    pub departure_time: Option<String>,
    #[serde(rename = "TypeTrainA", default)]
    pub train_type: Option<String>,
}

impl ScheduleRow {
    pub fn new(
        day: impl Into<String>,
        line: impl Into<String>,
        train_id: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            line: line.into(),
            train_id: train_id.into(),
            arrival_time: None,
            departure_time: None,
            train_type: None,
        }
    }

    pub fn with_times(mut self, arrival: Option<&str>, departure: Option<&str>) -> Self {
        self.arrival_time = arrival.map(str::to_owned);
        self.departure_time = departure.map(str::to_owned);
        self
    }

    pub fn with_type(mut self, train_type: impl Into<String>) -> Self {
        self.train_type = Some(train_type.into());
        self
    }

    pub fn category(&self) -> TrainCategory {
        TrainCategory::classify(self.train_type.as_deref())
    }

    /// Field values in `COLUMNS` order, absent cells as empty strings.
    pub fn to_fields(&self) -> [&str; 6] {
        [
            self.day.as_str(),
            self.line.as_str(),
            self.train_id.as_str(),
            self.arrival_time.as_deref().unwrap_or_default(),
            self.departure_time.as_deref().unwrap_or_default(),
            self.train_type.as_deref().unwrap_or_default(),
        ]
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
