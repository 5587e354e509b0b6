//! One-way digests, hex-encoded.

use data_encoding::HEXLOWER;
use md5::{Digest, Md5};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use crate::data::HashAlgorithm;

pub fn digest(algorithm: HashAlgorithm, text: &str) -> String {
    let bytes = text.as_bytes();
    match algorithm {
        HashAlgorithm::Md5 => HEXLOWER.encode(Md5::digest(bytes).as_slice()),
        HashAlgorithm::Sha1 => HEXLOWER.encode(Sha1::digest(bytes).as_slice()),
        HashAlgorithm::Sha256 => HEXLOWER.encode(Sha256::digest(bytes).as_slice()),
        HashAlgorithm::Sha512 => HEXLOWER.encode(Sha512::digest(bytes).as_slice()),
    }
}
