pub mod error;
pub mod header;
pub mod normalize;
pub mod pipeline;
pub mod workbook;

pub use error::{IngestError, Result};
pub use header::{HeaderMap, HeaderScan, locate_header_row};
pub use normalize::{RowOutcome, extract_digits, normalize_row};
pub use pipeline::{IngestOptions, ingest_sheets, ingest_workbook};
pub use workbook::{Sheet, Workbook};
