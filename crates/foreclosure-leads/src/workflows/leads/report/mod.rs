mod document;
mod export;
pub mod views;

pub use document::LeadDocument;
pub use export::{write_csv, LeadExportRow};

/// Rendering a scored collection for storage or spreadsheets failed.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),
}
