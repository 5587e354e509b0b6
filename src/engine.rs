//! Routes a cipher request to the classical engine or the crypto provider.
//!
//! Each call is independent and side-effect free: the dispatcher holds only
//! an immutable provider and the configured classical defaults, so it can be
//! shared freely across threads.

use std::{backtrace::Backtrace, fmt};

use crate::{
    cipher::{self, CryptoProvider, Primitive, Provider},
    classical::{self, KeywordError},
    data::{Algorithm, HashAlgorithm, Key, Operation, Request, Response},
};

#[derive(Debug)]
pub enum ErrorKind {
    InvalidKey(KeywordError),
    UnsupportedAlgorithm(String),
    DecryptionFailed(cipher::Error),
    Provider(cipher::Error),
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
            ErrorKind::InvalidKey(err) => write!(f, "invalid key: {}", err),
            ErrorKind::UnsupportedAlgorithm(name) => {
                write!(f, "unsupported algorithm: {:?}", name)
            }
            ErrorKind::DecryptionFailed(_) => {
                write!(f, "decryption failed: ciphertext is not readable with the given key")
            }
            ErrorKind::Provider(err) => write!(f, "crypto provider error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::InvalidKey(err) => Some(err),
            ErrorKind::UnsupportedAlgorithm(_) => None,
            ErrorKind::DecryptionFailed(err) => Some(err),
            ErrorKind::Provider(err) => Some(err),
        }
    }
}

impl Error {
    fn new(kind: ErrorKind) -> Error {
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

    fn invalid_key(err: KeywordError) -> Error {
        Error::new(ErrorKind::InvalidKey(err))
    }

    fn unsupported(name: &str) -> Error {
        Error::new(ErrorKind::UnsupportedAlgorithm(name.to_string()))
    }

    fn decryption_failed(err: cipher::Error) -> Error {
        Error::new(ErrorKind::DecryptionFailed(err))
    }

    fn provider(err: cipher::Error) -> Error {
        Error::new(ErrorKind::Provider(err))
    }
}

/// Fallbacks applied when a classical request carries no usable key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub shift: i32,
    pub keyword: String,
}

impl Default for Defaults {
    fn default() -> Defaults {
        Defaults {
            shift: classical::DEFAULT_SHIFT,
            keyword: classical::DEFAULT_KEYWORD.to_string(),
        }
    }
}

/// The single entry point for cipher requests.
pub struct Dispatcher<P> {
    provider: P,
    defaults: Defaults,
}

impl Dispatcher<CryptoProvider> {
    pub fn new(defaults: Defaults) -> Dispatcher<CryptoProvider> {
        Dispatcher::with_provider(CryptoProvider, defaults)
    }
}

impl Default for Dispatcher<CryptoProvider> {
    fn default() -> Dispatcher<CryptoProvider> {
        Dispatcher::new(Defaults::default())
    }
}

impl<P: Provider> Dispatcher<P> {
    pub fn with_provider(provider: P, defaults: Defaults) -> Dispatcher<P> {
        Dispatcher { provider, defaults }
    }

    pub fn encrypt(&self, request: &Request) -> Result<Response, Error> {
        self.dispatch(Operation::Encrypt, request)
    }

    pub fn decrypt(&self, request: &Request) -> Result<Response, Error> {
        self.dispatch(Operation::Decrypt, request)
    }

    /// One-way digest.  Unknown algorithm names fail the same way unknown
    /// cipher tags do.
    pub fn digest(&self, algorithm: &str, text: &str) -> Result<Response, Error> {
        let algorithm =
            algorithm.parse::<HashAlgorithm>().map_err(|()| Error::unsupported(algorithm))?;
        let result = self.provider.digest(algorithm, text);
        Ok(Response { result })
    }

    fn dispatch(&self, op: Operation, request: &Request) -> Result<Response, Error> {
        let algorithm = request
            .algorithm
            .parse::<Algorithm>()
            .map_err(|()| Error::unsupported(&request.algorithm))?;
        let text = request.text.as_str();
        let key = request.key.as_ref().map(Key::as_str).unwrap_or("");
        let result = match algorithm {
            Algorithm::Caesar => {
                let shift = parse_shift(key, self.defaults.shift);
                match op {
                    Operation::Encrypt => classical::caesar(text, shift),
                    Operation::Decrypt => classical::caesar(text, -shift),
                }
            }
            Algorithm::Vigenere => {
                let keyword = if key.is_empty() { self.defaults.keyword.as_str() } else { key };
                let transformed = match op {
                    Operation::Encrypt => classical::vigenere_encode(text, keyword),
                    Operation::Decrypt => classical::vigenere_decode(text, keyword),
                };
                transformed.map_err(Error::invalid_key)?
            }
            Algorithm::Aes => self.delegate(op, Primitive::Aes, text, key)?,
            Algorithm::Des => self.delegate(op, Primitive::Des, text, key)?,
            Algorithm::TripleDes => self.delegate(op, Primitive::TripleDes, text, key)?,
            Algorithm::Rc4 => self.delegate(op, Primitive::Rc4, text, key)?,
            Algorithm::Rabbit => self.delegate(op, Primitive::Rabbit, text, key)?,
            Algorithm::Rsa => self.delegate(op, Primitive::Rsa, text, key)?,
        };
        Ok(Response { result })
    }

    fn delegate(
        &self,
        op: Operation,
        primitive: Primitive,
        text: &str,
        key: &str,
    ) -> Result<String, Error> {
        match op {
            Operation::Encrypt => {
                self.provider.encrypt(primitive, text, key).map_err(Error::provider)
            }
            Operation::Decrypt => {
                self.provider.decrypt(primitive, text, key).map_err(Error::decryption_failed)
            }
        }
    }
}

/// A Caesar key is an integer shift; anything unparsable falls back to the
/// configured default.
fn parse_shift(key: &str, default: i32) -> i32 {
    key.trim().parse::<i32>().unwrap_or(default)
}
