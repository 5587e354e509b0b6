//! Demonstration stand-in for the RSA path.
//!
//! This is NOT RSA and NOT secure.  The playground has no key material for a
//! real asymmetric exchange, so the "rsa" tag maps to a reversible, clearly
//! labeled Base64 encoding.  The label makes the output impossible to
//! mistake for a genuine ciphertext.

use data_encoding::BASE64;

use super::Error;

const LABEL: &str = "rsa-demo:";

pub fn demo_encrypt(plaintext: &str) -> String {
    format!("{}{}", LABEL, BASE64.encode(plaintext.as_bytes()))
}

pub fn demo_decrypt(payload: &str) -> Result<String, Error> {
    let encoded = payload
        .strip_prefix(LABEL)
        .ok_or_else(|| Error::format("payload is missing the rsa-demo label"))?;
    let raw = BASE64.decode(encoded.as_bytes())?;
    String::from_utf8(raw).map_err(Into::into)
}
