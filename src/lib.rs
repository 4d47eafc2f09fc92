//! secvault: a password-based encrypted key-value store.
//!
//! Named secrets are encrypted individually (AES-256-CBC, key and IV derived
//! from a per-entry password via PBKDF2) and persisted together as a single
//! JSON document on disk.
//!
//! Ciphertext is **not authenticated**: the scheme provides confidentiality
//! only, no tamper detection. A wrong password and corrupted data are
//! indistinguishable to the caller. See the `crypto` module docs before
//! relying on this crate for anything adversarial.

pub mod crypto;
pub mod errors;
pub mod vault;

pub use errors::{Result, VaultError};
pub use vault::{TypedVault, Vault};
