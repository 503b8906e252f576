//! Error type for the I/O glue around the layout core.
//!
//! Building and laying out roster lines never fails; only loading datasets,
//! reading configuration and writing exports do.

#[derive(thiserror::Error, Debug)]
pub enum RosterError {
    #[error("failure reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed schedule table: {0}")]
    Csv(#[from] csv::Error),
    #[error("schedule table has no {0:?} column")]
    MissingColumn(&'static str),
    #[error("failure encoding diagram: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl RosterError {
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        RosterError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
