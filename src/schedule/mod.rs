//! Schedule records as read from the input table.

pub mod types;

pub use types::{COLUMNS, ScheduleRow, TrainCategory};
