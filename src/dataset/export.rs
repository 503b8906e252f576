//! CSV export of a filtered table.

use std::io::Write;

use super::FilteredTable;
use crate::error::RosterError;

pub const FILE_PREFIX: &str = "Lignes_Roulement";

/// `Lignes_Roulement_<day1>_<day2>.<extension>`
pub fn file_name<S: AsRef<str>>(days: &[S], extension: &str) -> String {
    let mut name = String::from(FILE_PREFIX);
    for day in days {
        name.push('_');
        name.push_str(day.as_ref());
    }
    name.push('.');
    name.push_str(extension);
    name
}

/// Write the original header and the filtered records, all columns untouched.
pub fn write_csv<W: Write>(table: &FilteredTable<'_>, writer: W) -> Result<(), RosterError> {
    let mut writer = csv::WriterBuilder::new().from_writer(writer);
    writer.write_record(table.headers())?;
    for record in table.records() {
        writer.write_record(record)?;
    }
    writer.flush().map_err(|e| RosterError::io("csv export", e))?;
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
