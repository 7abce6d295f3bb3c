//! Persistence of normalized items, grouped by education level.
//!
//! Each education level is stored as one JSON document named after the
//! normalized level id. Writes replace, never merge: re-uploading a
//! corrected workbook must not leave stale rows from a prior upload.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use escopo_model::ScopeSequenceItem;

/// Directory-backed store, one JSON document per education level.
#[derive(Debug, Clone)]
pub struct ScopeStore {
    /// Base directory for stored level documents.
    base_dir: PathBuf,
}

/// A persisted level document, with storage metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredLevel {
    /// The education level label as supplied by the uploader.
    pub level: String,
    /// Every item of the level's latest upload.
    pub items: Vec<ScopeSequenceItem>,
    /// Optional timestamp of when this document was written (ISO 8601).
    pub saved_at: Option<String>,
    /// Version of the storage format.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

/// Summary of one stored level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelMetadata {
    /// Level label as stored.
    pub level: String,
    /// File path of the level document.
    pub file_path: PathBuf,
    /// Number of items in the document.
    pub item_count: usize,
}

impl ScopeStore {
    /// Create a store at the given directory.
    ///
    /// The directory will be created if it doesn't exist.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)
            .with_context(|| format!("Failed to create store: {}", base_dir.display()))?;
        Ok(Self { base_dir })
    }

    /// Get the base directory of this store.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Replace every stored item for a level with the given items.
    ///
    /// The whole document is rewritten, so rows from a prior upload
    /// never survive a re-upload.
    pub fn replace_level(&self, level: &str, items: &[ScopeSequenceItem]) -> Result<PathBuf> {
        let stored = StoredLevel {
            level: level.to_string(),
            items: items.to_vec(),
            saved_at: Some(timestamp()),
            version: default_version(),
        };
        let path = self.base_dir.join(self.level_filename(level));
        let json = serde_json::to_string_pretty(&stored)
            .with_context(|| format!("Failed to serialize items for level {}", level))?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write level to {}", path.display()))?;
        Ok(path)
    }

    /// Load the items of a level's latest upload.
    ///
    /// Returns `None` if nothing was stored for the level.
    pub fn load_level(&self, level: &str) -> Result<Option<Vec<ScopeSequenceItem>>> {
        let stored = self.load_stored(level)?;
        Ok(stored.map(|s| s.items))
    }

    /// Load a level document with its storage metadata.
    pub fn load_stored(&self, level: &str) -> Result<Option<StoredLevel>> {
        let path = self.base_dir.join(self.level_filename(level));
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read level from {}", path.display()))?;
        let stored: StoredLevel = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse level from {}", path.display()))?;
        Ok(Some(stored))
    }

    /// List all stored levels.
    pub fn list(&self) -> Result<Vec<LevelMetadata>> {
        let mut metadata = Vec::new();
        for entry in fs::read_dir(&self.base_dir)
            .with_context(|| format!("Failed to read store: {}", self.base_dir.display()))?
        {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            if !filename.ends_with(".json") {
                continue;
            }
            let contents = fs::read_to_string(&path)?;
            if let Ok(stored) = serde_json::from_str::<StoredLevel>(&contents) {
                metadata.push(LevelMetadata {
                    level: stored.level.clone(),
                    file_path: path,
                    item_count: stored.items.len(),
                });
            }
        }
        metadata.sort_by(|a, b| a.level.cmp(&b.level));
        Ok(metadata)
    }

    /// Delete a stored level. Returns false when nothing was stored.
    pub fn delete_level(&self, level: &str) -> Result<bool> {
        let path = self.base_dir.join(self.level_filename(level));
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to delete level: {}", path.display()))?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Check if a level has a stored document.
    pub fn exists(&self, level: &str) -> bool {
        self.base_dir.join(self.level_filename(level)).exists()
    }

    /// Generate the filename for a level document.
    fn level_filename(&self, level: &str) -> String {
        format!("{}.json", normalize_id(level))
    }
}

/// Normalize a level label for use in filenames.
fn normalize_id(id: &str) -> String {
    id.trim()
        .to_uppercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

/// Get current timestamp in ISO 8601-like format, without pulling in a
/// date-time dependency for a single metadata field.
fn timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let secs = duration.as_secs();
    format!(
        "{}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        1970 + secs / 31536000,
        (secs % 31536000) / 2592000 + 1,
        (secs % 2592000) / 86400 + 1,
        (secs % 86400) / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
