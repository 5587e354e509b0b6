use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Wraps a [`String`] in a newtype
macro_rules! wrap_string {
    ($name:ident) => {
        /// A newtype that wraps a [`String`].
        #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        #[allow(dead_code)]
        impl $name {
            pub const fn new(value: String) -> Self {
                Self(value)
            }

            pub fn into_inner(self) -> String {
                self.0
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

wrap_string!(Plaintext);
wrap_string!(Key);

/// The direction of a cipher operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    Encrypt,
    Decrypt,
}

/// The set of algorithm tags the playground dispatches on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Aes,
    Des,
    TripleDes,
    Rc4,
    Rabbit,
    Rsa,
    Caesar,
    Vigenere,
}

impl Algorithm {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Aes => "aes",
            Algorithm::Des => "des",
            Algorithm::TripleDes => "tripledes",
            Algorithm::Rc4 => "rc4",
            Algorithm::Rabbit => "rabbit",
            Algorithm::Rsa => "rsa",
            Algorithm::Caesar => "caesar",
            Algorithm::Vigenere => "vigenere",
        }
    }
}

impl FromStr for Algorithm {
    type Err = ();

    fn from_str(s: &str) -> Result<Algorithm, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aes" => Ok(Algorithm::Aes),
            "des" => Ok(Algorithm::Des),
            "tripledes" | "3des" => Ok(Algorithm::TripleDes),
            "rc4" => Ok(Algorithm::Rc4),
            "rabbit" => Ok(Algorithm::Rabbit),
            "rsa" => Ok(Algorithm::Rsa),
            "caesar" => Ok(Algorithm::Caesar),
            "vigenere" | "vigenère" => Ok(Algorithm::Vigenere),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-way digest algorithms, exposed next to the ciphers but never
/// routed through encrypt/decrypt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    pub const fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = ();

    fn from_str(s: &str) -> Result<HashAlgorithm, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" | "sha-1" => Ok(HashAlgorithm::Sha1),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "sha512" | "sha-512" => Ok(HashAlgorithm::Sha512),
            _ => Err(()),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cipher request.  The algorithm tag is kept as the raw string
/// so the dispatcher owns the unknown-tag failure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub text: Plaintext,
    pub algorithm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
}

impl Request {
    pub fn new(text: impl Into<Plaintext>, algorithm: impl Into<String>, key: Option<Key>) -> Request {
        Request { text: text.into(), algorithm: algorithm.into(), key }
    }
}

/// The uniform success payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::{Algorithm, HashAlgorithm, Key, Request};

    #[test]
    fn algorithm_parses_known_tags() {
        for (input, expected) in [
            ("aes", Algorithm::Aes),
            ("des", Algorithm::Des),
            ("tripledes", Algorithm::TripleDes),
            ("3des", Algorithm::TripleDes),
            ("rc4", Algorithm::Rc4),
            ("rabbit", Algorithm::Rabbit),
            ("rsa", Algorithm::Rsa),
            ("caesar", Algorithm::Caesar),
            ("vigenere", Algorithm::Vigenere),
            ("AES", Algorithm::Aes),
            ("Caesar", Algorithm::Caesar),
        ] {
            let actual = input.parse::<Algorithm>().expect("should parse");
            assert_eq!(expected, actual);
        }
    }

    #[test]
    fn algorithm_rejects_unknown_tags() {
        assert!("unknown".parse::<Algorithm>().is_err());
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn hash_algorithm_parses_known_tags() {
        for (input, expected) in [
            ("md5", HashAlgorithm::Md5),
            ("sha1", HashAlgorithm::Sha1),
            ("SHA-256", HashAlgorithm::Sha256),
            ("sha512", HashAlgorithm::Sha512),
        ] {
            let actual = input.parse::<HashAlgorithm>().expect("should parse");
            assert_eq!(expected, actual);
        }
        assert!("sha3".parse::<HashAlgorithm>().is_err());
    }

    #[test]
    fn request_serializes_camel_case() {
        let request = Request::new("attack", "caesar", Some(Key::from("3")));
        let json = serde_json::to_string(&request).expect("should serialize");
        assert_eq!(r#"{"text":"attack","algorithm":"caesar","key":"3"}"#, json);
    }

    #[test]
    fn request_skips_absent_key() {
        let request = Request::new("attack", "caesar", None);
        let json = serde_json::to_string(&request).expect("should serialize");
        assert_eq!(r#"{"text":"attack","algorithm":"caesar"}"#, json);
    }

    #[test]
    fn request_roundtrips() {
        let expected = Request::new("hello", "vigenere", Some(Key::from("lemon")));
        let json = serde_json::to_string(&expected).expect("should serialize");
        let actual: Request = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(expected, actual);
    }
}
