//! XLSX report exporter

use crate::crawler::DomainResult;
use crate::output::traits::{ExportResult, ReportExporter, REPORT_COLUMNS};
use rust_xlsxwriter::{Format, Workbook};

/// MIME type of Office Open XML spreadsheets
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const DOMAIN_COLUMN_WIDTH: f64 = 32.0;
const EMAILS_COLUMN_WIDTH: f64 = 64.0;

/// Writes the result table as a single-sheet workbook
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxExporter;

impl XlsxExporter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportExporter for XlsxExporter {
    fn content_type(&self) -> &'static str {
        XLSX_CONTENT_TYPE
    }

    fn file_extension(&self) -> &'static str {
        "xlsx"
    }

    fn export(&self, records: &[DomainResult]) -> ExportResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_column_width(0, DOMAIN_COLUMN_WIDTH)?;
        worksheet.set_column_width(1, EMAILS_COLUMN_WIDTH)?;

        for (col, title) in REPORT_COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header)?;
        }

        for (index, record) in records.iter().enumerate() {
            let row = index as u32 + 1;
            worksheet.write_string(row, 0, &record.domain)?;
            worksheet.write_string(row, 1, &record.emails)?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}
