//! In-memory store of the descriptive algorithm entries the playground
//! serves alongside the live operations.  Seeded at construction; nothing
//! is persisted.

use serde::Serialize;

/// One descriptive entry.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmInfo {
    pub id: u32,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub key_length: &'static str,
    pub security: &'static str,
    pub speed: &'static str,
    pub use_cases: &'static str,
    pub steps: &'static [&'static str],
}

pub struct Catalog {
    entries: Vec<AlgorithmInfo>,
}

impl Default for Catalog {
    fn default() -> Catalog {
        Catalog::new()
    }
}

impl Catalog {
    pub fn new() -> Catalog {
        let entries = seed();
        Catalog { entries }
    }

    pub fn all(&self) -> &[AlgorithmInfo] {
        self.entries.as_slice()
    }

    pub fn find(&self, id: u32) -> Option<&AlgorithmInfo> {
        self.entries.iter().find(|info| info.id == id)
    }

    /// Case-insensitive substring match on the entry name, in the spirit of
    /// a lookup box: `caesar` matches "Caesar Cipher".
    pub fn search(&self, query: &str) -> Vec<&AlgorithmInfo> {
        let query = query.to_ascii_lowercase();
        self.entries
            .iter()
            .filter(|info| info.name.to_ascii_lowercase().contains(&query))
            .collect()
    }
}

fn seed() -> Vec<AlgorithmInfo> {
    vec![
        AlgorithmInfo {
            id: 1,
            name: "RSA",
            kind: "Asymmetric",
            description: "Public-key cryptosystem built on the difficulty of factoring the \
                          product of two large primes.  The encryption key is public while the \
                          decryption key stays private, which makes it the workhorse of key \
                          exchange and digital signatures.",
            key_length: "1024-4096 bits",
            security: "High",
            speed: "Slow",
            use_cases: "Digital signatures, key exchange, secure communications",
            steps: &[
                "Generate two large prime numbers p and q",
                "Compute n = p * q and the totient phi(n) = (p-1) * (q-1)",
                "Choose e with 1 < e < phi(n), coprime with phi(n)",
                "Compute d such that (d * e) mod phi(n) = 1",
                "Public key = (e, n), private key = (d, n)",
                "Encryption: c = m^e mod n",
                "Decryption: m = c^d mod n",
            ],
        },
        AlgorithmInfo {
            id: 2,
            name: "AES",
            kind: "Symmetric",
            description: "The Advanced Encryption Standard, a block cipher using the same key \
                          for encryption and decryption.  It processes 128-bit blocks through a \
                          substitution-permutation network and remains the default choice for \
                          bulk encryption.",
            key_length: "128, 192, 256 bits",
            security: "Very High",
            speed: "Fast",
            use_cases: "File encryption, secure communications, VPNs",
            steps: &[
                "Split the plaintext into 128-bit blocks",
                "Expand the cipher key into a key schedule",
                "Initial round: AddRoundKey",
                "Main rounds: SubBytes, ShiftRows, MixColumns, AddRoundKey",
                "Final round omits MixColumns",
            ],
        },
        AlgorithmInfo {
            id: 3,
            name: "DES",
            kind: "Symmetric",
            description: "The Data Encryption Standard, a 16-round Feistel cipher from the \
                          1970s.  Its 56-bit key is far too short for modern hardware, but its \
                          design shaped decades of cryptography.",
            key_length: "56 bits",
            security: "Low (Broken)",
            speed: "Medium",
            use_cases: "Historical, legacy systems",
            steps: &[
                "Apply the initial permutation to the input block",
                "Split the block into left and right halves",
                "Run 16 Feistel rounds: expand, XOR with the round key, S-box substitution, permute",
                "Swap and apply the final permutation",
            ],
        },
        AlgorithmInfo {
            id: 4,
            name: "Vigen\u{e8}re Cipher",
            kind: "Polyalphabetic Cipher",
            description: "A series of interwoven Caesar ciphers keyed by the letters of a \
                          repeating keyword.  Each letter of the keyword selects a different \
                          shift, defeating simple frequency analysis.",
            key_length: "Variable",
            security: "Very Low",
            speed: "Fast",
            use_cases: "Educational purposes, historical interest",
            steps: &[
                "Choose a keyword and repeat it over the input",
                "Convert letters to numbers (A=0, B=1, ...)",
                "Add the keyword value to each input value modulo 26",
                "Convert the result back to a letter",
            ],
        },
        AlgorithmInfo {
            id: 5,
            name: "Caesar Cipher",
            kind: "Substitution Cipher",
            description: "The simplest substitution cipher: every letter is shifted a fixed \
                          number of places down the alphabet, wrapping around at the end.",
            key_length: "Fixed (small)",
            security: "Very Low",
            speed: "Very Fast",
            use_cases: "Educational purposes, puzzles",
            steps: &[
                "Choose a shift value (classically 3)",
                "Convert each letter to a numeric value (A=0, B=1, ...)",
                "Add the shift modulo 26",
                "Convert the result back to a letter",
            ],
        },
        AlgorithmInfo {
            id: 6,
            name: "Hash Functions",
            kind: "Cryptographic Function",
            description: "One-way functions that map data of any size to a fixed-length \
                          digest.  Reversing them is computationally infeasible, which makes \
                          them the backbone of integrity checks and password storage.",
            key_length: "N/A",
            security: "Varies by algorithm",
            speed: "Fast",
            use_cases: "Password storage, data integrity verification, digital signatures",
            steps: &[
                "Take input data of any length",
                "Apply the compression function over fixed-size blocks",
                "Produce a fixed-length digest",
                "Common algorithms include MD5, SHA-1, SHA-256, SHA-512",
            ],
        },
    ]
}
