//! Report exporter traits and types
//!
//! This module defines the trait interface for report exporters and the
//! errors they can produce.

use crate::crawler::DomainResult;
use thiserror::Error;

/// Errors that can occur during export operations
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Column headers shared by every report format, in column order
pub const REPORT_COLUMNS: [&str; 2] = ["domain", "emails"];

/// Trait for rendering a result table into a downloadable document
///
/// Implementations write one header row (`domain`, `emails`) followed by
/// one row per record, in the order given.
pub trait ReportExporter: Send + Sync {
    /// MIME type of the produced document
    fn content_type(&self) -> &'static str;

    /// File extension (without the dot) of the produced document
    fn file_extension(&self) -> &'static str;

    /// Renders the records into a complete document
    fn export(&self, records: &[DomainResult]) -> ExportResult<Vec<u8>>;

    /// Suggested download file name for a report
    fn file_name(&self) -> String {
        format!("extracted_emails.{}", self.file_extension())
    }
}
