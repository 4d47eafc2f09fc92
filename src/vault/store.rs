//! The string-valued vault: an in-memory map of encrypted entries with
//! save/load/refresh persistence.
//!
//! Every entry is encrypted on the way in and decrypted on the way out with
//! a password supplied per call; no vault-wide password exists and none is
//! ever retained. The map is not safe for concurrent mutation; a vault
//! shared across threads needs external mutual exclusion, including around
//! `save`/`load` (the delete-then-write in `save` must not interleave with
//! a concurrent `load`).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::crypto::{AesCbcCipher, Cipher};
use crate::errors::{Result, VaultError};

use super::document::{self, VaultDocument};

/// The main vault handle.
///
/// Construct one with [`Vault::new`] (default AES-CBC cipher) or
/// [`Vault::with_cipher`], point it at a directory and file name, and use
/// its methods to manage entries.
pub struct Vault {
    /// Directory the vault file lives in.
    location: Option<PathBuf>,

    /// File name of the vault document inside `location`.
    file_name: Option<String>,

    /// The injected encryption capability.
    cipher: Box<dyn Cipher>,

    /// In-memory map of entry name to base64 ciphertext.
    entries: HashMap<String, String>,
}

impl Default for Vault {
    fn default() -> Self {
        Self::new()
    }
}

impl Vault {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Empty vault using the stock AES-256-CBC cipher with default
    /// key derivation parameters.
    pub fn new() -> Self {
        Self::with_cipher(Box::new(AesCbcCipher::new()))
    }

    /// Empty vault using the given cipher.
    ///
    /// The cipher is a swappable strategy: the vault only ever calls
    /// `encrypt_text`/`decrypt_text` on it, so an alternate scheme can be
    /// substituted without touching vault logic. Entries written with one
    /// cipher are only readable through a compatible one.
    pub fn with_cipher(cipher: Box<dyn Cipher>) -> Self {
        Self {
            location: None,
            file_name: None,
            cipher,
            entries: HashMap::new(),
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Set the directory the vault file lives in.
    pub fn set_location(&mut self, location: impl Into<PathBuf>) {
        self.location = Some(location.into());
    }

    /// Set the vault document's file name inside the location directory.
    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.file_name = Some(file_name.into());
    }

    /// The configured location directory, if set.
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// The configured file name, if set.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Join location and file name into the full vault path.
    fn full_path(&self) -> Result<PathBuf> {
        let location = self
            .location
            .as_ref()
            .ok_or_else(|| VaultError::NotConfigured("location is not set".into()))?;
        let file_name = self
            .file_name
            .as_ref()
            .ok_or_else(|| VaultError::NotConfigured("file name is not set".into()))?;

        Ok(location.join(file_name))
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Encrypt `plaintext` with `password` and store it under `name`.
    ///
    /// Fails with `EntryAlreadyExists` if the name is taken; an existing
    /// entry is never silently overwritten. The map is untouched on any
    /// failure, and nothing is written to disk until [`Vault::save`].
    pub fn add(&mut self, name: &str, plaintext: &str, password: &str) -> Result<()> {
        if self.entries.contains_key(name) {
            return Err(VaultError::EntryAlreadyExists(name.to_string()));
        }

        let ciphertext = self.cipher.encrypt_text(plaintext, password)?;
        self.entries.insert(name.to_string(), ciphertext);
        Ok(())
    }

    /// Decrypt and return the entry stored under `name`.
    ///
    /// A missing name is a query miss, not an error: `Ok(None)`. A wrong
    /// password surfaces as `DecryptionFailed`, indistinguishable from
    /// corrupted ciphertext (the scheme has no authentication tag).
    pub fn get(&self, name: &str, password: &str) -> Result<Option<String>> {
        match self.entries.get(name) {
            Some(ciphertext) => self.cipher.decrypt_text(ciphertext, password).map(Some),
            None => Ok(None),
        }
    }

    /// Remove the entry stored under `name`. No-op when absent; never errors.
    pub fn remove(&mut self, name: &str) {
        self.entries.remove(name);
    }

    /// Drop every entry from the in-memory map.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` if an entry with the given name exists.
    ///
    /// Metadata-only check; no decryption is performed.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries currently held in memory.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the vault holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entry names, sorted. Ciphertext is not touched.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// The current state as on-disk JSON text, with a fresh timestamp.
    pub fn to_json(&self) -> Result<String> {
        VaultDocument::new(self.entries.clone()).to_json()
    }

    /// Write the vault document to disk, replacing any existing file.
    ///
    /// Requires location and file name to be set. Creates the location
    /// directory if missing. The document gets a fresh `Created` timestamp
    /// on every save; the previous file's timestamp is not preserved.
    ///
    /// The replace is delete-then-write, not an atomic rename: a crash
    /// between the two steps loses the prior file.
    pub fn save(&self) -> Result<()> {
        let path = self.full_path()?;

        if let Some(location) = &self.location {
            if !location.exists() {
                fs::create_dir_all(location)?;
            }
        }

        document::write_document(&path, &VaultDocument::new(self.entries.clone()))
    }

    /// Read the vault document from disk, replacing the in-memory map
    /// wholesale. Unsaved in-memory changes are discarded.
    ///
    /// Fails with `VaultNotFound` when the target file does not exist.
    pub fn load(&mut self) -> Result<()> {
        let path = self.full_path()?;
        let doc = document::read_document(&path)?;
        self.entries = doc.entries;
        Ok(())
    }

    /// Clear the in-memory map, then load from disk.
    pub fn refresh(&mut self) -> Result<()> {
        self.clear();
        self.load()
    }
}
