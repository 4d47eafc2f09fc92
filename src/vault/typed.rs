//! Generic typed wrapper over the string-valued vault.
//!
//! `TypedVault<T>` owns a [`Vault`] and converts payloads to and from JSON
//! text at the boundary; it keeps no storage of its own, so its lifecycle is
//! exactly the inner vault's. Serde supplies the serialization capability
//! through the `Serialize`/`DeserializeOwned` bounds.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::crypto::Cipher;
use crate::errors::{Result, VaultError};

use super::store::Vault;

/// A vault for arbitrary serde-serializable payloads.
///
/// Composition over a string vault: the payload is serialized to JSON text
/// before encryption, so any `T` representable as JSON and reconstructible
/// from it can be stored.
pub struct TypedVault<T> {
    inner: Vault,
    _payload: PhantomData<fn() -> T>,
}

impl<T> Default for TypedVault<T>
where
    T: Serialize + DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TypedVault<T>
where
    T: Serialize + DeserializeOwned,
{
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Empty typed vault over a default [`Vault`].
    pub fn new() -> Self {
        Self::from_vault(Vault::new())
    }

    /// Empty typed vault using the given cipher.
    pub fn with_cipher(cipher: Box<dyn Cipher>) -> Self {
        Self::from_vault(Vault::with_cipher(cipher))
    }

    /// Wrap an existing string vault, keeping its entries and configuration.
    pub fn from_vault(inner: Vault) -> Self {
        Self {
            inner,
            _payload: PhantomData,
        }
    }

    /// Unwrap back into the underlying string vault.
    pub fn into_inner(self) -> Vault {
        self.inner
    }

    // ------------------------------------------------------------------
    // Typed entry operations
    // ------------------------------------------------------------------

    /// Serialize `value` and store it encrypted under `name`.
    ///
    /// Same duplicate-key rule as [`Vault::add`]: an existing name is
    /// rejected, never overwritten.
    pub fn add(&mut self, name: &str, value: &T, password: &str) -> Result<()> {
        let text = serde_json::to_string(value)
            .map_err(|e| VaultError::SerializationError(e.to_string()))?;
        self.inner.add(name, &text, password)
    }

    /// Decrypt and deserialize the entry stored under `name`.
    ///
    /// Unlike [`Vault::get`], a missing name is an error here
    /// (`EntryNotFound`) rather than a silent absent value; decrypted text
    /// that does not parse as `T` is `SerializationError`.
    pub fn get(&self, name: &str, password: &str) -> Result<T> {
        let text = self
            .inner
            .get(name, password)?
            .ok_or_else(|| VaultError::EntryNotFound(name.to_string()))?;

        serde_json::from_str(&text).map_err(|e| VaultError::SerializationError(e.to_string()))
    }

    // ------------------------------------------------------------------
    // Pass-throughs to the inner vault
    // ------------------------------------------------------------------

    /// Remove the entry stored under `name`. No-op when absent.
    pub fn remove(&mut self, name: &str) {
        self.inner.remove(name);
    }

    /// Drop every entry from the in-memory map.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns `true` if an entry with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains(name)
    }

    /// Number of entries currently held in memory.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the vault holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Set the directory the vault file lives in.
    pub fn set_location(&mut self, location: impl Into<PathBuf>) {
        self.inner.set_location(location);
    }

    /// Set the vault document's file name.
    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.inner.set_file_name(file_name);
    }

    /// The configured location directory, if set.
    pub fn location(&self) -> Option<&Path> {
        self.inner.location()
    }

    /// The configured file name, if set.
    pub fn file_name(&self) -> Option<&str> {
        self.inner.file_name()
    }

    /// See [`Vault::save`].
    pub fn save(&self) -> Result<()> {
        self.inner.save()
    }

    /// See [`Vault::load`].
    pub fn load(&mut self) -> Result<()> {
        self.inner.load()
    }

    /// See [`Vault::refresh`].
    pub fn refresh(&mut self) -> Result<()> {
        self.inner.refresh()
    }
}
