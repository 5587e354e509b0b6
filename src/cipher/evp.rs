//! OpenSSL `EVP_BytesToKey` passphrase derivation (MD5, one iteration).
//!
//! This is the scheme CryptoJS applies when a cipher is given a string key
//! instead of raw key material, so ciphertexts produced here interoperate
//! with the browser side of the playground.  It is a demo-grade KDF and is
//! not suitable for protecting real secrets.

use md5::{Digest, Md5};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of the random salt prepended to every ciphertext.
pub const SALT_LEN: usize = 8;

/// Derived key material, wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    pub key: Vec<u8>,
    pub iv: Vec<u8>,
}

/// Stretches `passphrase` and `salt` into `key_len` key bytes and `iv_len`
/// IV bytes by chaining MD5 over (previous digest || passphrase || salt).
pub fn bytes_to_key(
    passphrase: &[u8],
    salt: &[u8; SALT_LEN],
    key_len: usize,
    iv_len: usize,
) -> KeyMaterial {
    let mut derived: Vec<u8> = Vec::with_capacity(key_len + iv_len);
    let mut block: Vec<u8> = Vec::new();
    while derived.len() < key_len + iv_len {
        let mut hasher = Md5::new();
        hasher.update(&block);
        hasher.update(passphrase);
        hasher.update(salt);
        block = hasher.finalize().to_vec();
        derived.extend_from_slice(&block);
    }
    block.zeroize();
    let key = derived[..key_len].to_vec();
    let iv = derived[key_len..key_len + iv_len].to_vec();
    derived.zeroize();
    KeyMaterial { key, iv }
}

#[cfg(test)]
mod tests {
    use super::bytes_to_key;

    const SALT: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

    #[test]
    fn derives_requested_lengths() {
        for (key_len, iv_len) in [(32, 16), (24, 8), (16, 8), (16, 0), (8, 8)] {
            let material = bytes_to_key(b"passphrase", &SALT, key_len, iv_len);
            assert_eq!(key_len, material.key.len());
            assert_eq!(iv_len, material.iv.len());
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let first = bytes_to_key(b"passphrase", &SALT, 32, 16);
        let second = bytes_to_key(b"passphrase", &SALT, 32, 16);
        assert_eq!(first.key, second.key);
        assert_eq!(first.iv, second.iv);
    }

    #[test]
    fn derivation_is_salt_sensitive() {
        let other_salt = [7, 6, 5, 4, 3, 2, 1, 0];
        let first = bytes_to_key(b"passphrase", &SALT, 32, 16);
        let second = bytes_to_key(b"passphrase", &other_salt, 32, 16);
        assert_ne!(first.key, second.key);
    }

    #[test]
    fn derivation_is_passphrase_sensitive() {
        let first = bytes_to_key(b"passphrase", &SALT, 32, 16);
        let second = bytes_to_key(b"Passphrase", &SALT, 32, 16);
        assert_ne!(first.key, second.key);
    }

    #[test]
    fn empty_passphrase_is_allowed() {
        let material = bytes_to_key(b"", &SALT, 32, 16);
        assert_eq!(32, material.key.len());
    }
}
