//! The crypto provider boundary.
//!
//! The dispatcher only ever talks to [`Provider`]; the concrete stack behind
//! it can be swapped without touching the routing logic.  [`CryptoProvider`]
//! is the default implementation, backed by the RustCrypto crates with an
//! OpenSSL-compatible passphrase scheme.

use std::{backtrace::Backtrace, fmt, string};

use crate::data::HashAlgorithm;

pub mod evp;
pub mod hash;
pub mod rsa;
pub mod symmetric;

/// The primitives served by the provider.  The classical ciphers never
/// appear here; they are handled before the provider is reached.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Primitive {
    Aes,
    Des,
    TripleDes,
    Rc4,
    Rabbit,
    Rsa,
}

#[derive(Debug)]
pub enum ErrorKind {
    Decode(data_encoding::DecodeError),
    FromUtf8(string::FromUtf8Error),
    Format(String),
    KeyLength,
    Unpad,
}

#[derive(Debug)]
pub struct ErrorImpl {
    kind: ErrorKind,
    backtrace: Option<Backtrace>,
}

#[derive(Debug)]
pub struct Error {
    inner: Box<ErrorImpl>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ErrorKind::Decode(err) => err.fmt(f),
            ErrorKind::FromUtf8(err) => err.fmt(f),
            ErrorKind::Format(msg) => msg.fmt(f),
            ErrorKind::KeyLength => write!(f, "derived key material has the wrong length"),
            ErrorKind::Unpad => write!(f, "block padding is invalid"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Decode(err) => Some(err),
            ErrorKind::FromUtf8(err) => Some(err),
            ErrorKind::Format(_) => None,
            ErrorKind::KeyLength => None,
            ErrorKind::Unpad => None,
        }
    }
}

impl From<data_encoding::DecodeError> for Error {
    fn from(err: data_encoding::DecodeError) -> Error {
        Error::capture(ErrorKind::Decode(err))
    }
}

impl From<string::FromUtf8Error> for Error {
    fn from(err: string::FromUtf8Error) -> Error {
        Error::capture(ErrorKind::FromUtf8(err))
    }
}

impl Error {
    fn capture(kind: ErrorKind) -> Error {
        let backtrace = Some(Backtrace::capture());
        let inner = Box::new(ErrorImpl { kind, backtrace });
        Error { inner }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    pub fn backtrace(&mut self) -> Option<Backtrace> {
        self.inner.backtrace.take()
    }

    fn format(msg: impl Into<String>) -> Error {
        Error::capture(ErrorKind::Format(msg.into()))
    }

    fn key_length() -> Error {
        Error::capture(ErrorKind::KeyLength)
    }

    fn unpad() -> Error {
        Error::capture(ErrorKind::Unpad)
    }
}

/// The narrow interface the dispatcher depends on.
///
/// `encrypt` and `decrypt` carry the passphrase through unchanged; `digest`
/// is one-way and keyless.
pub trait Provider {
    fn encrypt(&self, primitive: Primitive, plaintext: &str, key: &str) -> Result<String, Error>;

    fn decrypt(&self, primitive: Primitive, ciphertext: &str, key: &str) -> Result<String, Error>;

    fn digest(&self, algorithm: HashAlgorithm, text: &str) -> String;
}

/// Default provider backed by the RustCrypto crates.
#[derive(Debug, Default, Copy, Clone)]
pub struct CryptoProvider;

impl Provider for CryptoProvider {
    fn encrypt(&self, primitive: Primitive, plaintext: &str, key: &str) -> Result<String, Error> {
        match primitive {
            Primitive::Aes => symmetric::cbc_encrypt::<aes::Aes256>(plaintext, key),
            Primitive::Des => symmetric::cbc_encrypt::<des::Des>(plaintext, key),
            Primitive::TripleDes => symmetric::cbc_encrypt::<des::TdesEde3>(plaintext, key),
            Primitive::Rc4 => symmetric::rc4_encrypt(plaintext, key),
            Primitive::Rabbit => symmetric::rabbit_encrypt(plaintext, key),
            Primitive::Rsa => Ok(rsa::demo_encrypt(plaintext)),
        }
    }

    fn decrypt(&self, primitive: Primitive, ciphertext: &str, key: &str) -> Result<String, Error> {
        match primitive {
            Primitive::Aes => symmetric::cbc_decrypt::<aes::Aes256>(ciphertext, key),
            Primitive::Des => symmetric::cbc_decrypt::<des::Des>(ciphertext, key),
            Primitive::TripleDes => symmetric::cbc_decrypt::<des::TdesEde3>(ciphertext, key),
            Primitive::Rc4 => symmetric::rc4_decrypt(ciphertext, key),
            Primitive::Rabbit => symmetric::rabbit_decrypt(ciphertext, key),
            Primitive::Rsa => rsa::demo_decrypt(ciphertext),
        }
    }

    fn digest(&self, algorithm: HashAlgorithm, text: &str) -> String {
        hash::digest(algorithm, text)
    }
}

#[cfg(test)]
mod tests {
    use super::{CryptoProvider, Primitive, Provider};

    const PRIMITIVES: [Primitive; 6] = [
        Primitive::Aes,
        Primitive::Des,
        Primitive::TripleDes,
        Primitive::Rc4,
        Primitive::Rabbit,
        Primitive::Rsa,
    ];

    #[test]
    fn roundtrip_every_primitive() {
        let provider = CryptoProvider;
        let plaintext = "The Magic Words are Squeamish Ossifrage";
        for primitive in PRIMITIVES {
            let ciphertext =
                provider.encrypt(primitive, plaintext, "passphrase").expect("should encrypt");
            assert_ne!(plaintext, ciphertext);
            let decrypted =
                provider.decrypt(primitive, &ciphertext, "passphrase").expect("should decrypt");
            assert_eq!(plaintext, decrypted, "primitive {:?}", primitive);
        }
    }

    #[test]
    fn roundtrip_empty_passphrase() {
        // The playground allows an absent key; it maps to "".
        let provider = CryptoProvider;
        for primitive in PRIMITIVES {
            let ciphertext = provider.encrypt(primitive, "hello", "").expect("should encrypt");
            let decrypted = provider.decrypt(primitive, &ciphertext, "").expect("should decrypt");
            assert_eq!("hello", decrypted, "primitive {:?}", primitive);
        }
    }
}
