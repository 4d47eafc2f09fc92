//! The `Cipher` capability trait and its AES-CBC implementation.
//!
//! The vault never talks to the block cipher directly; it holds a boxed
//! `Cipher` so an alternate scheme can be swapped in without touching any
//! vault logic. `AesCbcCipher` is the stock implementation: PBKDF2-derived
//! key/IV, AES-256-CBC, and a text layer that hashes the password and
//! base64-encodes the ciphertext.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, Zeroizing};

use crate::errors::{Result, VaultError};

use super::cipher::{self, BLOCK_LEN, KEY_LEN};
use super::kdf::{derive_key_iv, KdfParams};

/// Encryption capability consumed by the vault.
///
/// The byte-level pair works on raw secret bytes; the text pair is what the
/// vault uses for entries (human-entered password in, printable ciphertext
/// out). Implementations must keep the two layers consistent: `decrypt_text`
/// must invert `encrypt_text` for the same password.
pub trait Cipher {
    /// Encrypt raw bytes using a raw secret (not a human-entered password).
    fn encrypt(&self, plaintext: &[u8], password: &[u8]) -> Result<Vec<u8>>;

    /// Inverse of [`Cipher::encrypt`].
    fn decrypt(&self, ciphertext: &[u8], password: &[u8]) -> Result<Vec<u8>>;

    /// Encrypt a string with a human-entered password, producing a
    /// printable (base64) ciphertext string.
    fn encrypt_text(&self, input: &str, password: &str) -> Result<String>;

    /// Inverse of [`Cipher::encrypt_text`].
    fn decrypt_text(&self, input: &str, password: &str) -> Result<String>;
}

/// AES-256-CBC cipher with PBKDF2 key derivation.
///
/// All entries encrypted through one instance share its `KdfParams`
/// (salt and iteration count); the password varies per call.
#[derive(Debug, Clone, Default)]
pub struct AesCbcCipher {
    params: KdfParams,
}

impl AesCbcCipher {
    /// Cipher with the default salt and iteration count.
    ///
    /// The default salt is static across all vaults; see
    /// [`crate::crypto::kdf::DEFAULT_SALT`] before using this for new data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cipher with explicit key derivation parameters.
    pub fn with_params(params: KdfParams) -> Self {
        Self { params }
    }

    /// The key derivation parameters in use.
    pub fn params(&self) -> &KdfParams {
        &self.params
    }

    /// SHA-256 of the password's UTF-8 bytes.
    ///
    /// Normalizes arbitrary-length passwords to a fixed 32-byte secret
    /// before key derivation, so the byte-level API never sees the raw
    /// password.
    fn hash_password(password: &str) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(Sha256::digest(password.as_bytes()).into())
    }
}

impl Cipher for AesCbcCipher {
    fn encrypt(&self, plaintext: &[u8], password: &[u8]) -> Result<Vec<u8>> {
        let (key, iv) = derive_key_iv(
            password,
            &self.params.salt,
            self.params.iterations,
            KEY_LEN,
            BLOCK_LEN,
        );
        let key = Zeroizing::new(key);
        let iv = Zeroizing::new(iv);

        cipher::encrypt(plaintext, &key, &iv)
    }

    fn decrypt(&self, ciphertext: &[u8], password: &[u8]) -> Result<Vec<u8>> {
        let (key, iv) = derive_key_iv(
            password,
            &self.params.salt,
            self.params.iterations,
            KEY_LEN,
            BLOCK_LEN,
        );
        let key = Zeroizing::new(key);
        let iv = Zeroizing::new(iv);

        cipher::decrypt(ciphertext, &key, &iv)
    }

    fn encrypt_text(&self, input: &str, password: &str) -> Result<String> {
        let secret = Self::hash_password(password);
        let ciphertext = self.encrypt(input.as_bytes(), secret.as_slice())?;
        Ok(BASE64.encode(ciphertext))
    }

    fn decrypt_text(&self, input: &str, password: &str) -> Result<String> {
        let ciphertext = BASE64
            .decode(input)
            .map_err(|_| VaultError::DecryptionFailed)?;

        let secret = Self::hash_password(password);
        let plaintext = self.decrypt(&ciphertext, secret.as_slice())?;

        String::from_utf8(plaintext).map_err(|e| {
            // The bytes inside the error are decrypted plaintext; scrub them
            // before discarding.
            let mut bad_bytes = e.into_bytes();
            bad_bytes.zeroize();
            VaultError::DecryptionFailed
        })
    }
}
