use std::path::PathBuf;

use escopo_model::IngestReport;

/// Outcome of one `escopo ingest` run.
#[derive(Debug)]
pub struct IngestRunResult {
    pub workbook: PathBuf,
    pub report: IngestReport,
    /// Path the items JSON was written to, when requested.
    pub json: Option<PathBuf>,
    /// Path of the stored level document, when a store was used.
    pub stored: Option<PathBuf>,
}
