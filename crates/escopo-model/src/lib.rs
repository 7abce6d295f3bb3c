pub mod field;
pub mod item;
pub mod report;
pub mod synonyms;

pub use field::CanonicalField;
pub use item::ScopeSequenceItem;
pub use report::{IngestReport, SheetReport, SheetStatus};
pub use synonyms::SynonymTable;
