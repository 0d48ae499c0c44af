//! CSV report exporter

use crate::crawler::DomainResult;
use crate::output::traits::{ExportError, ExportResult, ReportExporter, REPORT_COLUMNS};

/// Writes the result table as comma-separated values
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportExporter for CsvExporter {
    fn content_type(&self) -> &'static str {
        "text/csv"
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }

    fn export(&self, records: &[DomainResult]) -> ExportResult<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        // Written explicitly so an empty table still carries its header.
        writer.write_record(REPORT_COLUMNS)?;
        for record in records {
            writer.write_record([record.domain.as_str(), record.emails.as_str()])?;
        }

        writer
            .into_inner()
            .map_err(|e| ExportError::Write(e.to_string()))
    }
}
