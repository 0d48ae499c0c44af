//! Output module for rendering harvest results
//!
//! This module handles:
//! - Exporting the result table as XLSX or CSV
//! - Choosing an exporter from a file name
//! - Summarizing batch statistics

mod csv_output;
pub mod stats;
mod traits;
mod xlsx_output;

pub use csv_output::CsvExporter;
pub use stats::{print_statistics, BatchStatistics};
pub use traits::{ExportError, ExportResult, ReportExporter, REPORT_COLUMNS};
pub use xlsx_output::{XlsxExporter, XLSX_CONTENT_TYPE};

use std::path::Path;

/// Picks the exporter matching a file's extension
///
/// `.csv` (any case) selects CSV; everything else gets XLSX.
///
/// # Example
///
/// ```
/// use mail_harvest::output::{exporter_for_path, ReportExporter};
/// use std::path::Path;
///
/// assert_eq!(exporter_for_path(Path::new("out.csv")).file_extension(), "csv");
/// assert_eq!(exporter_for_path(Path::new("out.xlsx")).file_extension(), "xlsx");
/// ```
pub fn exporter_for_path(path: &Path) -> Box<dyn ReportExporter> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        Box::new(CsvExporter::new())
    } else {
        Box::new(XlsxExporter::new())
    }
}
