//! Vault module: encrypted named-entry storage.
//!
//! This module provides:
//! - The persisted JSON document shape and its disk helpers (`document`)
//! - The string-valued `Vault` with add/get/remove and save/load/refresh
//!   (`store`)
//! - The generic `TypedVault<T>` wrapper for arbitrary serde payloads
//!   (`typed`)

pub mod document;
pub mod store;
pub mod typed;

// Re-export the most commonly used items.
pub use document::VaultDocument;
pub use store::Vault;
pub use typed::TypedVault;
