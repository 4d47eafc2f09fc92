//! The persisted vault document and its disk helpers.
//!
//! A vault file is a single UTF-8 JSON object:
//!
//! ```json
//! { "Created": "2026-08-30T12:00:00Z",
//!   "Objects": { "entry-name": "base64-ciphertext", ... } }
//! ```
//!
//! The `Created`/`Objects` field names are a compatibility surface for
//! existing vault files and must not change. `Created` records when the
//! document was last written, not when the vault was first made: every save
//! stamps it fresh.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultError};

/// The exact serialized shape written to and read from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultDocument {
    /// When this document was written. Stamped fresh on every save.
    #[serde(rename = "Created")]
    pub created: DateTime<Utc>,

    /// Entry name to base64 ciphertext. Insertion order is irrelevant.
    #[serde(rename = "Objects")]
    pub entries: HashMap<String, String>,
}

impl VaultDocument {
    /// Build a document around the given entries with a fresh timestamp.
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self {
            created: Utc::now(),
            entries,
        }
    }

    /// Serialize to the on-disk JSON text.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| VaultError::SerializationError(e.to_string()))
    }
}

/// Write a document to `path`, replacing any existing file.
///
/// Deletes the old file first, then writes the new contents. This is NOT
/// crash-atomic: a failure between the delete and the write leaves neither
/// the old nor the new document on disk. Callers that cannot tolerate that
/// gap must keep their own backup.
pub fn write_document(path: &Path, document: &VaultDocument) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    fs::write(path, document.to_json()?)?;
    Ok(())
}

/// Read a document from `path`.
///
/// Fails with `VaultNotFound` when the file does not exist and
/// `InvalidVaultFormat` when its contents are not a well-formed document.
pub fn read_document(path: &Path) -> Result<VaultDocument> {
    if !path.exists() {
        return Err(VaultError::VaultNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| VaultError::InvalidVaultFormat(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_compat_field_names() {
        let mut entries = HashMap::new();
        entries.insert("api-key".to_string(), "Y2lwaGVydGV4dA==".to_string());

        let json = VaultDocument::new(entries).to_json().unwrap();
        assert!(json.contains("\"Created\""));
        assert!(json.contains("\"Objects\""));
        assert!(json.contains("\"api-key\""));
    }

    #[test]
    fn document_roundtrips_through_json() {
        let mut entries = HashMap::new();
        entries.insert("a".to_string(), "AAAA".to_string());
        entries.insert("b".to_string(), "BBBB".to_string());

        let doc = VaultDocument::new(entries.clone());
        let parsed: VaultDocument = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(parsed.entries, entries);
        assert_eq!(parsed.created, doc.created);
    }
}
