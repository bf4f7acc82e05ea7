use connectors::file::csv::error::FileError;
use engine_config::error::SettingsError;
use engine_report::error::ReportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Roster file error: {0}")]
    Roster(#[from] FileError),

    #[error("Report assembly error: {0}")]
    Report(#[from] ReportError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Invalid report track: {0}")]
    InvalidTrack(String),
}
