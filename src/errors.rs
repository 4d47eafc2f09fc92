use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in secvault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Carries no detail on purpose: a wrong password, a flipped ciphertext
    /// byte, and truncated base64 all surface identically. The scheme has no
    /// authentication tag, so they cannot be told apart.
    #[error("Decryption failed: wrong password or corrupted data")]
    DecryptionFailed,

    // --- Vault errors ---
    #[error("Vault not configured: {0}")]
    NotConfigured(String),

    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Invalid vault format: {0}")]
    InvalidVaultFormat(String),

    #[error("Entry '{0}' already exists")]
    EntryAlreadyExists(String),

    #[error("Entry '{0}' not found")]
    EntryNotFound(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Convenience type alias for secvault results.
pub type Result<T> = std::result::Result<T, VaultError>;
