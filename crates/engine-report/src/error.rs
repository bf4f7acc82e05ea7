use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to serialize page to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Renderer error: {0}")]
    Renderer(String),
}
