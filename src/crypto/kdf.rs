//! Password-based key and IV derivation using PBKDF2-HMAC-SHA256.
//!
//! The cipher needs both a key and an IV for every password. Both come out
//! of a single PBKDF2 output stream: the key is the first `key_len` bytes
//! and the IV is the *next* `iv_len` bytes of the same stream. Deriving the
//! two independently (each call restarting the stream at byte zero) yields a
//! different IV and therefore different ciphertext, so any alternate
//! implementation that wants to read vaults written by this one must keep
//! the sequential-stream construction.

use rand::RngCore;

/// The salt used when none is configured explicitly.
///
/// A fixed salt shared by every vault is a real weakness: it lets an
/// attacker precompute one rainbow table that applies to all of them. It is
/// kept as the default because changing it silently would make existing
/// vault files undecryptable. Prefer [`generate_salt`] and store the salt
/// alongside the vault when creating anything new.
pub const DEFAULT_SALT: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Default PBKDF2 iteration count.
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// Key derivation parameters shared by every entry of a vault.
///
/// These must match between encryption and decryption; they are not stored
/// in the vault document, so the caller is responsible for keeping them
/// stable for the lifetime of a vault file.
#[derive(Debug, Clone)]
pub struct KdfParams {
    /// Salt fed to PBKDF2. See [`DEFAULT_SALT`] for why the default is weak.
    pub salt: Vec<u8>,
    /// PBKDF2 iteration count. Zero is a caller error and is not validated
    /// here; `pbkdf2` treats it as no stretching at all.
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            salt: DEFAULT_SALT.to_vec(),
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Derive a key and IV from a password in one continuous PBKDF2 stream.
///
/// Runs PBKDF2-HMAC-SHA256 once for `key_len + iv_len` output bytes and
/// splits the result: key first, IV immediately after. Deterministic for
/// identical inputs.
pub fn derive_key_iv(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key_len: usize,
    iv_len: usize,
) -> (Vec<u8>, Vec<u8>) {
    let mut stream = vec![0u8; key_len + iv_len];
    pbkdf2::pbkdf2_hmac::<sha2::Sha256>(password, salt, iterations, &mut stream);

    let iv = stream.split_off(key_len);
    (stream, iv)
}

/// Generate a cryptographically random salt of the given length.
///
/// This is the improvement path over [`DEFAULT_SALT`]: generate a salt per
/// vault and persist it next to the vault file.
pub fn generate_salt(len: usize) -> Vec<u8> {
    let mut salt = vec![0u8; len];
    rand::rng().fill_bytes(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_and_iv_come_from_one_stream() {
        let password = b"hunter2";
        let (key, iv) = derive_key_iv(password, &DEFAULT_SALT, 100, 32, 16);
        assert_eq!(key.len(), 32);
        assert_eq!(iv.len(), 16);

        // A full 48-byte derivation must equal key || iv.
        let (mut full, rest) = derive_key_iv(password, &DEFAULT_SALT, 100, 48, 0);
        assert!(rest.is_empty());
        let tail = full.split_off(32);
        assert_eq!(full, key);
        assert_eq!(&tail[..16], iv.as_slice());

        // An independent 16-byte derivation restarts the stream and must
        // NOT match the IV taken from the continuous stream.
        let (standalone_iv, _) = derive_key_iv(password, &DEFAULT_SALT, 100, 16, 0);
        assert_ne!(standalone_iv, iv);
    }

    #[test]
    fn derivation_is_deterministic() {
        let (k1, iv1) = derive_key_iv(b"pw", b"salt", 500, 32, 16);
        let (k2, iv2) = derive_key_iv(b"pw", b"salt", 500, 32, 16);
        assert_eq!(k1, k2);
        assert_eq!(iv1, iv2);
    }

    #[test]
    fn generate_salt_has_requested_length() {
        assert_eq!(generate_salt(8).len(), 8);
        assert_eq!(generate_salt(32).len(), 32);
    }
}
