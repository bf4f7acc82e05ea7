use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read the settings file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to deserialize the settings file: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Invalid school settings: {}", issues.join("; "))]
    Invalid { issues: Vec<String> },
}
