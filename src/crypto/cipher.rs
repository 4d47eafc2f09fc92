//! AES-256-CBC encryption and decryption with PKCS#7 padding.
//!
//! These are the raw byte-level primitives: the caller supplies the key and
//! IV (normally produced by `kdf::derive_key_iv`). Encryption is fully
//! deterministic given identical key, IV, and plaintext. There is no
//! authentication tag; see the module docs in `crypto` for the consequences.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;

use crate::errors::{Result, VaultError};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES-256 key length in bytes.
pub const KEY_LEN: usize = 32;

/// AES block (and therefore IV) length in bytes.
pub const BLOCK_LEN: usize = 16;

/// Encrypt `plaintext` with a 32-byte key and a 16-byte IV.
///
/// The output length is `plaintext.len()` rounded up to the next block
/// boundary (a full extra block when the input is already block-aligned,
/// per PKCS#7).
pub fn encrypt(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let enc = Aes256CbcEnc::new_from_slices(key, iv)
        .map_err(|e| VaultError::EncryptionFailed(format!("invalid key or IV length: {e}")))?;

    Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypt data that was produced by [`encrypt`] with the same key and IV.
///
/// Fails when the ciphertext length is not a multiple of the block size,
/// when the padding is invalid after decryption, or when the key or IV
/// length is wrong. A wrong key usually lands in the invalid-padding case,
/// but not always: roughly one tampered or mis-keyed decryption in 256
/// produces valid-looking padding and returns garbage bytes instead of an
/// error.
pub fn decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let dec =
        Aes256CbcDec::new_from_slices(key, iv).map_err(|_| VaultError::DecryptionFailed)?;

    dec.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| VaultError::DecryptionFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; KEY_LEN] = [0xAB; KEY_LEN];
    const IV: [u8; BLOCK_LEN] = [0xCD; BLOCK_LEN];

    #[test]
    fn roundtrip() {
        let plaintext = b"attack at dawn";
        let ct = encrypt(plaintext, &KEY, &IV).unwrap();
        assert_eq!(decrypt(&ct, &KEY, &IV).unwrap(), plaintext);
    }

    #[test]
    fn output_is_block_padded() {
        // 16-byte input gains a full padding block.
        let ct = encrypt(&[0u8; 16], &KEY, &IV).unwrap();
        assert_eq!(ct.len(), 32);

        // Empty input still produces one block.
        let ct = encrypt(&[], &KEY, &IV).unwrap();
        assert_eq!(ct.len(), 16);
    }

    #[test]
    fn encryption_is_deterministic() {
        let a = encrypt(b"same input", &KEY, &IV).unwrap();
        let b = encrypt(b"same input", &KEY, &IV).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn bad_key_length_is_rejected() {
        assert!(matches!(
            encrypt(b"x", &[0u8; 31], &IV),
            Err(VaultError::EncryptionFailed(_))
        ));
        assert!(matches!(
            decrypt(&[0u8; 16], &KEY, &[0u8; 15]),
            Err(VaultError::DecryptionFailed)
        ));
    }

    #[test]
    fn non_block_multiple_ciphertext_is_rejected() {
        assert!(matches!(
            decrypt(&[0u8; 17], &KEY, &IV),
            Err(VaultError::DecryptionFailed)
        ));
    }
}
