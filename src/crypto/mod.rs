//! Cryptographic primitives for secvault.
//!
//! This module provides:
//! - PBKDF2-based key and IV derivation (`kdf`)
//! - AES-256-CBC encryption and decryption with PKCS#7 padding (`cipher`)
//! - The `Cipher` capability trait and its text codec implementation
//!   (`codec`)
//!
//! None of these layers authenticate the ciphertext. CBC with PKCS#7 padding
//! detects most corruption through padding failures, but a tampered buffer
//! can occasionally decrypt to garbage without any error. Callers that need
//! tamper detection must layer a MAC or switch to an AEAD mode; doing so
//! here would change the on-disk format, so it is intentionally left out.

pub mod cipher;
pub mod codec;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use secvault::crypto::{AesCbcCipher, Cipher, KdfParams, ...};
pub use cipher::{decrypt, encrypt, BLOCK_LEN, KEY_LEN};
pub use codec::{AesCbcCipher, Cipher};
pub use kdf::{derive_key_iv, generate_salt, KdfParams};
