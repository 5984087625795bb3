//! Content digests used to check fixtures after they land on disk.
//!
//! Digests are always rendered as lowercase hex. Files are hashed in chunks
//! so memory use stays bounded regardless of fixture size.

use anyhow::{Context, Result};
use md5::Md5;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

const BUF_SIZE: usize = 64 * 1024;

/// Hash algorithm a fixture's expected digest was produced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestAlgorithm {
    /// Integrity check only; the built-in fixture set is pinned with MD5.
    #[default]
    Md5,
    Sha256,
}

impl DigestAlgorithm {
    /// Length of a hex digest produced by this algorithm.
    pub fn hex_len(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 32,
            DigestAlgorithm::Sha256 => 64,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            other => anyhow::bail!("unknown digest algorithm: {}", other),
        }
    }
}

/// Compute the digest of an in-memory buffer as lowercase hex.
pub fn digest_bytes(algo: DigestAlgorithm, data: &[u8]) -> String {
    match algo {
        DigestAlgorithm::Md5 => hex::encode(Md5::digest(data)),
        DigestAlgorithm::Sha256 => hex::encode(Sha256::digest(data)),
    }
}

fn hash_reader<D: Digest, R: Read>(mut reader: R) -> io::Result<(String, u64)> {
    let mut hasher = D::new();
    let mut buf = vec![0u8; BUF_SIZE];
    let mut total = 0u64;
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
        total += n as u64;
    }
    Ok((hex::encode(hasher.finalize()), total))
}

/// Digest a file in chunks, returning the lowercase hex digest and the
/// number of bytes hashed.
pub fn digest_file(algo: DigestAlgorithm, path: &Path) -> io::Result<(String, u64)> {
    let f = File::open(path)?;
    match algo {
        DigestAlgorithm::Md5 => hash_reader::<Md5, _>(f),
        DigestAlgorithm::Sha256 => hash_reader::<Sha256, _>(f),
    }
}

/// Compute the digest of a file as lowercase hex, reading it in chunks.
pub fn digest_path(algo: DigestAlgorithm, path: &Path) -> Result<String> {
    let (hex, _) = digest_file(algo, path).with_context(|| format!("digest {}", path.display()))?;
    Ok(hex)
}

/// Canonicalize an expected digest: trimmed, lowercase, and the right length
/// for `algo`. Returns `None` if it is not a valid hex digest.
pub fn normalize_hex(algo: DigestAlgorithm, s: &str) -> Option<String> {
    let s = s.trim();
    if s.len() != algo.hex_len() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Some(s.to_ascii_lowercase())
}

/// Case-insensitive digest comparison.
pub fn digests_match(expected: &str, actual: &str) -> bool {
    expected.trim().eq_ignore_ascii_case(actual.trim())
}
