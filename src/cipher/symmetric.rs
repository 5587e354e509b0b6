//! Symmetric primitives with the OpenSSL `Salted__` wire format.
//!
//! Every ciphertext is `Base64("Salted__" || salt || raw)` with the key and
//! IV derived from the passphrase via [`evp::bytes_to_key`], matching what
//! CryptoJS emits for passphrase-keyed ciphers.

use aes::cipher::{
    block_padding::Pkcs7, consts::U32, BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit,
    KeyIvInit, StreamCipher,
};
use data_encoding::BASE64;
use rand::Rng;
use rc4::Rc4;

use super::{evp, Error};

const SALT_MAGIC: &[u8] = b"Salted__";

// CryptoJS derives a 256-bit RC4 key from the passphrase.
const RC4_KEY_LEN: usize = 32;
const RABBIT_KEY_LEN: usize = 16;
const RABBIT_IV_LEN: usize = 8;

fn fresh_salt() -> [u8; evp::SALT_LEN] {
    rand::thread_rng().gen()
}

fn encode_payload(salt: &[u8; evp::SALT_LEN], ciphertext: &[u8]) -> String {
    let mut raw = Vec::with_capacity(SALT_MAGIC.len() + salt.len() + ciphertext.len());
    raw.extend_from_slice(SALT_MAGIC);
    raw.extend_from_slice(salt);
    raw.extend_from_slice(ciphertext);
    BASE64.encode(&raw)
}

fn decode_payload(payload: &str) -> Result<([u8; evp::SALT_LEN], Vec<u8>), Error> {
    let raw = BASE64.decode(payload.trim().as_bytes())?;
    if raw.len() < SALT_MAGIC.len() + evp::SALT_LEN || &raw[..SALT_MAGIC.len()] != SALT_MAGIC {
        return Err(Error::format("ciphertext is missing the salt header"));
    }
    let mut salt = [0u8; evp::SALT_LEN];
    salt.copy_from_slice(&raw[SALT_MAGIC.len()..SALT_MAGIC.len() + evp::SALT_LEN]);
    let ciphertext = raw[SALT_MAGIC.len() + evp::SALT_LEN..].to_vec();
    Ok((salt, ciphertext))
}

/// CBC encryption with PKCS#7 padding over any block cipher.
pub fn cbc_encrypt<C>(plaintext: &str, passphrase: &str) -> Result<String, Error>
where
    C: BlockCipher + BlockEncryptMut + KeyInit,
{
    let salt = fresh_salt();
    let material =
        evp::bytes_to_key(passphrase.as_bytes(), &salt, C::key_size(), C::block_size());
    let cipher = cbc::Encryptor::<C>::new_from_slices(&material.key, &material.iv)
        .map_err(|_| Error::key_length())?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
    Ok(encode_payload(&salt, &ciphertext))
}

/// CBC decryption.  An unpad failure almost always means the wrong key.
pub fn cbc_decrypt<C>(payload: &str, passphrase: &str) -> Result<String, Error>
where
    C: BlockCipher + BlockDecryptMut + KeyInit,
{
    let (salt, ciphertext) = decode_payload(payload)?;
    let material =
        evp::bytes_to_key(passphrase.as_bytes(), &salt, C::key_size(), C::block_size());
    let cipher = cbc::Decryptor::<C>::new_from_slices(&material.key, &material.iv)
        .map_err(|_| Error::key_length())?;
    let plaintext =
        cipher.decrypt_padded_vec_mut::<Pkcs7>(&ciphertext).map_err(|_| Error::unpad())?;
    String::from_utf8(plaintext).map_err(Into::into)
}

pub fn rc4_encrypt(plaintext: &str, passphrase: &str) -> Result<String, Error> {
    let salt = fresh_salt();
    let material = evp::bytes_to_key(passphrase.as_bytes(), &salt, RC4_KEY_LEN, 0);
    let mut cipher = Rc4::<U32>::new_from_slice(&material.key).map_err(|_| Error::key_length())?;
    let mut buf = plaintext.as_bytes().to_vec();
    cipher.apply_keystream(&mut buf);
    Ok(encode_payload(&salt, &buf))
}

pub fn rc4_decrypt(payload: &str, passphrase: &str) -> Result<String, Error> {
    let (salt, mut buf) = decode_payload(payload)?;
    let material = evp::bytes_to_key(passphrase.as_bytes(), &salt, RC4_KEY_LEN, 0);
    let mut cipher = Rc4::<U32>::new_from_slice(&material.key).map_err(|_| Error::key_length())?;
    cipher.apply_keystream(&mut buf);
    String::from_utf8(buf).map_err(Into::into)
}

pub fn rabbit_encrypt(plaintext: &str, passphrase: &str) -> Result<String, Error> {
    let salt = fresh_salt();
    let material = evp::bytes_to_key(passphrase.as_bytes(), &salt, RABBIT_KEY_LEN, RABBIT_IV_LEN);
    let mut cipher = rabbit::Rabbit::new_from_slices(&material.key, &material.iv)
        .map_err(|_| Error::key_length())?;
    let mut buf = plaintext.as_bytes().to_vec();
    cipher.apply_keystream(&mut buf);
    Ok(encode_payload(&salt, &buf))
}

pub fn rabbit_decrypt(payload: &str, passphrase: &str) -> Result<String, Error> {
    let (salt, mut buf) = decode_payload(payload)?;
    let material = evp::bytes_to_key(passphrase.as_bytes(), &salt, RABBIT_KEY_LEN, RABBIT_IV_LEN);
    let mut cipher = rabbit::Rabbit::new_from_slices(&material.key, &material.iv)
        .map_err(|_| Error::key_length())?;
    cipher.apply_keystream(&mut buf);
    String::from_utf8(buf).map_err(Into::into)
}
